//! Streak status commands for CLI.

use clap::Subcommand;
use questlog_core::App;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Print streak bookkeeping as JSON
    Status,
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::load();

    match action {
        StreakAction::Status => {
            println!("{}", serde_json::to_string_pretty(&app.state().streaks)?);
        }
    }

    Ok(())
}
