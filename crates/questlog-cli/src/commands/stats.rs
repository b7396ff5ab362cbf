//! Daily progress statistics for CLI.

use clap::Subcommand;
use questlog_core::{category_stats, App};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Print a progress summary as JSON
    Show,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::load();

    match action {
        StatsAction::Show => {
            let state = app.state();
            let summary = serde_json::json!({
                "level": state.hero.level,
                "xp": state.hero.xp,
                "xp_to_next_level": state.hero.xp_to_next_level,
                "gaming_minutes": state.hero.gaming_minutes,
                "total_tasks_completed": state.hero.total_tasks_completed,
                "streak_current": state.streaks.current,
                "streak_longest": state.streaks.longest,
                "tasks_completed_today": state.streaks.tasks_completed_today,
                "daily_goal": state.streaks.daily_goal,
                "gaming_minutes_today": state.session.total_gaming_today,
                "categories": category_stats(&state.quests),
                "storage_available": app.persistence_enabled(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
