//! Progress reset command for CLI.

use questlog_core::{Action, App};

use super::print_events;

pub fn run(yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !yes {
        println!("This wipes all progress and cannot be undone. Re-run with --yes to confirm.");
        return Ok(());
    }
    let mut app = App::load();
    let events = app.dispatch(Action::ResetProgress);
    print_events(&events)?;
    println!("Progress reset. The default quests are back.");
    Ok(())
}
