//! TOML-based application configuration.
//!
//! Stores the tunable knobs:
//! - Hero name
//! - Daily streak goal
//! - Session warning threshold
//! - Penalty rates
//!
//! Configuration is stored at `~/.config/questlog/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, CoreError};

/// Hero profile configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroConfig {
    #[serde(default = "default_hero_name")]
    pub name: String,
}

/// Streak configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakConfig {
    /// Completions per day required to extend the streak.
    #[serde(default = "default_daily_goal")]
    pub daily_goal: u32,
}

/// Gaming-session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Remaining seconds at which the low-time warning fires.
    #[serde(default = "default_warning_seconds")]
    pub warning_seconds: u64,
}

/// Honesty-check penalty rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyConfig {
    /// Experience lost per unauthorized minute.
    #[serde(default = "default_xp_per_minute")]
    pub xp_per_minute: u64,
    /// Bank minutes lost per unauthorized minute.
    #[serde(default = "default_bank_per_minute")]
    pub bank_per_minute: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/questlog/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub streak: StreakConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub penalty: PenaltyConfig,
}

// Default functions
fn default_hero_name() -> String {
    "The Hero".into()
}
fn default_daily_goal() -> u32 {
    4
}
fn default_warning_seconds() -> u64 {
    60
}
fn default_xp_per_minute() -> u64 {
    2
}
fn default_bank_per_minute() -> u64 {
    1
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            name: default_hero_name(),
        }
    }
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            daily_goal: default_daily_goal(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            warning_seconds: default_warning_seconds(),
        }
    }
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self {
            xp_per_minute: default_xp_per_minute(),
            bank_per_minute: default_bank_per_minute(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hero: HeroConfig::default(),
            streak: StreakConfig::default(),
            session: SessionConfig::default(),
            penalty: PenaltyConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    fn path() -> Result<PathBuf, CoreError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    pub fn load() -> Result<Self, CoreError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), CoreError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist. Errors on unknown keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.streak.daily_goal, 4);
        assert_eq!(parsed.session.warning_seconds, 60);
        assert_eq!(parsed.penalty.xp_per_minute, 2);
        assert_eq!(parsed.penalty.bank_per_minute, 1);
        assert_eq!(parsed.hero.name, "The Hero");
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("streak.daily_goal").as_deref(), Some("4"));
        assert_eq!(cfg.get("hero.name").as_deref(), Some("The Hero"));
        assert!(cfg.get("streak.missing_key").is_none());
    }

    #[test]
    fn set_json_value_by_path_updates_nested_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "session.warning_seconds", "120").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "session.warning_seconds").unwrap(),
            &serde_json::Value::Number(120.into())
        );
    }

    #[test]
    fn set_json_value_by_path_updates_nested_string() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "hero.name", "Sir Questsalot").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "hero.name").unwrap(),
            &serde_json::Value::String("Sir Questsalot".to_string())
        );
    }

    #[test]
    fn set_json_value_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "streak.nonexistent_key", "1");
        assert!(result.is_err());
    }

    #[test]
    fn set_json_value_by_path_rejects_invalid_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result =
            Config::set_json_value_by_path(&mut json, "streak.daily_goal", "not_a_number");
        assert!(result.is_err());
    }
}
