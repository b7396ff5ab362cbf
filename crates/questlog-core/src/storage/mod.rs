mod config;
pub mod migrations;
mod store;

pub use config::{Config, HeroConfig, PenaltyConfig, SessionConfig, StreakConfig};
pub use store::{Store, KEY_HERO, KEY_QUESTS, KEY_SESSION, KEY_STREAKS};

use std::path::PathBuf;

use crate::error::CoreError;

/// Returns `~/.config/questlog[-dev]/` based on QUESTLOG_ENV.
///
/// Set QUESTLOG_ENV=dev to use the development data directory.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("QUESTLOG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("questlog-dev")
    } else {
        base_dir.join("questlog")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
