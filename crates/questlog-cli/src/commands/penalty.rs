//! Honesty-check commands for CLI.

use clap::Subcommand;
use questlog_core::{Action, App};

use super::print_events;

#[derive(Subcommand)]
pub enum PenaltyAction {
    /// Report unauthorized gaming and take the penalty
    Report {
        /// Minutes of unauthorized gaming
        minutes: u64,
    },
}

pub fn run(action: PenaltyAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::load();

    match action {
        PenaltyAction::Report { minutes } => {
            let events = app.dispatch(Action::ReportPenalty { minutes });
            print_events(&events)?;
            println!("{}", serde_json::to_string_pretty(&app.state().hero)?);
        }
    }

    Ok(())
}
