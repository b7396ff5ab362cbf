pub mod config;
pub mod hero;
pub mod penalty;
pub mod quest;
pub mod reset;
pub mod session;
pub mod stats;
pub mod streak;

use questlog_core::Event;

/// Print each event the reducer produced, one pretty JSON document per event.
pub fn print_events(events: &[Event]) -> Result<(), Box<dyn std::error::Error>> {
    for event in events {
        println!("{}", serde_json::to_string_pretty(event)?);
    }
    Ok(())
}
