//! Gaming session commands for CLI.

use std::time::Duration;

use clap::Subcommand;
use questlog_core::{Action, App, Event};

use super::print_events;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Redeem bank minutes and start the countdown
    Start {
        /// Minutes to redeem
        minutes: u64,
    },
    /// Pause the countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// End early and refund unused whole minutes
    End,
    /// Catch up on elapsed time and print session state as JSON
    Status,
    /// Run the one-second tick loop until the session ends
    Watch,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::load();

    match action {
        SessionAction::Start { minutes } => {
            let events = app.dispatch(Action::StartSession { minutes });
            if events
                .iter()
                .any(|e| matches!(e, Event::SessionStarted { .. }))
            {
                print_events(&events)?;
            } else {
                println!(
                    "Could not start: {} minutes requested, {} in the bank.",
                    minutes,
                    app.state().hero.gaming_minutes
                );
            }
        }
        SessionAction::Pause => {
            print_events(&app.dispatch(Action::PauseSession))?;
        }
        SessionAction::Resume => {
            print_events(&app.dispatch(Action::ResumeSession))?;
        }
        SessionAction::End => {
            print_events(&app.dispatch(Action::EndSession))?;
        }
        SessionAction::Status => {
            let events = app.dispatch(Action::Tick);
            println!("{}", serde_json::to_string_pretty(&app.state().session)?);
            print_events(&events)?;
        }
        SessionAction::Watch => {
            watch(&mut app)?;
        }
    }

    Ok(())
}

/// The recurring one-second timer: tick, report, repeat until Idle.
fn watch(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    if !app.state().session.is_active() && !app.state().session.is_paused() {
        println!("No session to watch.");
        return Ok(());
    }
    loop {
        std::thread::sleep(Duration::from_secs(1));
        let events = app.dispatch(Action::Tick);
        for event in &events {
            match event {
                Event::SessionWarning { remaining_seconds, .. } => {
                    println!("Almost done: {remaining_seconds}s left!");
                }
                Event::SessionExpired { minutes_consumed, .. } => {
                    println!("Time's up! {minutes_consumed} minutes used.");
                    return Ok(());
                }
                _ => {}
            }
        }
        let session = &app.state().session;
        if session.is_active() {
            let remaining = session.remaining_seconds();
            println!("{:02}:{:02} remaining", remaining / 60, remaining % 60);
        } else if !session.is_paused() {
            return Ok(());
        }
    }
}
