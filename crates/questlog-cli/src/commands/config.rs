//! Configuration commands for CLI.

use clap::Subcommand;
use questlog_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a value by dot-separated key (e.g. streak.daily_goal)
    Get {
        /// Config key
        key: String,
    },
    /// Set a value by dot-separated key and save
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// Print the whole configuration as JSON
    Show,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
