//! Difficulty-scaled reward calculation with streak bonus.
//!
//! The streak bonus is 10% per consecutive day, truncated to whole
//! multipliers: `reward = floor(base * (1 + floor(streak * 0.1)))`, which in
//! integer arithmetic is `base * (1 + streak / 10)`. A streak of 1..=9 leaves
//! rewards unchanged; 10..=19 doubles them, and so on.

use serde::{Deserialize, Serialize};

use crate::quest::Difficulty;

/// An xp / gaming-minute reward pair, applied atomically with completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub xp: u64,
    pub minutes: u64,
}

/// Whole-number streak multiplier: `1 + floor(streak * 0.1)`.
pub fn streak_bonus_factor(streak: u32) -> u64 {
    1 + (streak / 10) as u64
}

/// Reward for completing a quest of `difficulty` at the given streak length.
pub fn quest_reward(difficulty: Difficulty, streak: u32) -> Reward {
    let factor = streak_bonus_factor(streak);
    Reward {
        xp: difficulty.base_xp() * factor,
        minutes: difficulty.base_minutes() * factor,
    }
}
