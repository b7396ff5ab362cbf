//! Quest types: the actionable items a user completes for reward.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed difficulty tiers, each with a fixed xp / gaming-minute reward pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Epic,
}

impl Difficulty {
    pub fn base_xp(self) -> u64 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 25,
            Difficulty::Hard => 50,
            Difficulty::Epic => 100,
        }
    }

    pub fn base_minutes(self) -> u64 {
        match self {
            Difficulty::Easy => 15,
            Difficulty::Medium => 30,
            Difficulty::Hard => 50,
            Difficulty::Epic => 90,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Epic => "Epic",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "epic" => Ok(Difficulty::Epic),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A task a user can complete for reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    /// Unique identifier
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
    /// Free-form tag used for grouping in stats.
    pub category: String,
    /// Transient "just completed" marker; cleared on the next state change.
    #[serde(default)]
    pub completed: bool,
    /// Completed at least once today; cleared at day rollover.
    #[serde(default)]
    pub completed_today: bool,
}

impl Quest {
    pub fn new(name: impl Into<String>, difficulty: Difficulty, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            difficulty,
            category: category.into(),
            completed: false,
            completed_today: false,
        }
    }
}

/// The quest set seeded on first run and after a progress reset.
pub fn default_quests() -> Vec<Quest> {
    vec![
        Quest::new("Code for 30 minutes", Difficulty::Medium, "coding"),
        Quest::new("Apply to 1 job", Difficulty::Hard, "career"),
        Quest::new("Exercise 20 minutes", Difficulty::Medium, "health"),
        Quest::new("Complete a chore", Difficulty::Easy, "life"),
    ]
}
