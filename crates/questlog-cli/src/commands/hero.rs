//! Hero progression commands for CLI.

use clap::Subcommand;
use questlog_core::App;

#[derive(Subcommand)]
pub enum HeroAction {
    /// Print the hero profile as JSON
    Status,
}

pub fn run(action: HeroAction) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::load();

    match action {
        HeroAction::Status => {
            println!("{}", serde_json::to_string_pretty(&app.state().hero)?);
        }
    }

    Ok(())
}
