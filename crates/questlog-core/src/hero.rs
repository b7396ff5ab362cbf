//! Hero progression: experience, levels, the gaming-minute bank, weakness.
//!
//! Levels follow a geometric growth curve. Experience is renormalized
//! immediately after every change: overflow rolls into level-ups, underflow
//! rolls into level-downs, floored at level 1 with zero experience.

use serde::{Deserialize, Serialize};

/// Experience required to advance from level 1 to level 2.
pub const BASE_LEVEL_XP: u64 = 100;

/// Per-level growth of the level-up threshold.
const LEVEL_GROWTH: f64 = 1.25;

/// Experience required to advance from `level` to `level + 1`:
/// `floor(100 * 1.25^(level - 1))`.
pub fn xp_threshold(level: u32) -> u64 {
    let exp = level.saturating_sub(1) as i32;
    (BASE_LEVEL_XP as f64 * LEVEL_GROWTH.powi(exp)).floor() as u64
}

/// The user's progression profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next_level: u64,
    pub gaming_minutes: u64,
    pub total_tasks_completed: u64,
    #[serde(default)]
    pub is_weakened: bool,
    #[serde(default)]
    pub weakness_level: u32,
}

impl Default for Hero {
    fn default() -> Self {
        Self::named("The Hero")
    }
}

/// Outcome of an honesty-check penalty, for event reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenaltyOutcome {
    pub xp_lost: u64,
    pub minutes_lost: u64,
    pub levels_lost: u32,
    pub weakness_level: u32,
}

impl Hero {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            xp: 0,
            xp_to_next_level: xp_threshold(1),
            gaming_minutes: 0,
            total_tasks_completed: 0,
            is_weakened: false,
            weakness_level: 0,
        }
    }

    /// Add experience and roll any overflow into level-ups.
    ///
    /// Handles multi-level jumps from a single grant. Returns the number of
    /// levels gained.
    pub fn gain_xp(&mut self, amount: u64) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        let mut gained = 0;
        while self.xp >= self.xp_to_next_level {
            self.xp -= self.xp_to_next_level;
            self.level += 1;
            self.xp_to_next_level = xp_threshold(self.level);
            gained += 1;
        }
        gained
    }

    /// Remove experience, demoting while the balance would be negative.
    ///
    /// Each demotion restores the previous level's threshold and credits it
    /// back. Floored at level 1 with zero experience. Returns levels lost.
    pub fn lose_xp(&mut self, amount: u64) -> u32 {
        if amount <= self.xp {
            self.xp -= amount;
            return 0;
        }
        let mut deficit = amount - self.xp;
        self.xp = 0;
        let mut lost = 0;
        while deficit > 0 && self.level > 1 {
            self.level -= 1;
            lost += 1;
            let restored = xp_threshold(self.level);
            self.xp_to_next_level = restored;
            if deficit <= restored {
                self.xp = restored - deficit;
                deficit = 0;
            } else {
                deficit -= restored;
            }
        }
        lost
    }

    /// One quest completion chips one step off the weakness counter,
    /// regardless of difficulty. Returns true when this completion cleared
    /// the weakness entirely.
    pub fn clear_weakness_step(&mut self) -> bool {
        if self.weakness_level == 0 {
            return false;
        }
        self.weakness_level -= 1;
        if self.weakness_level == 0 {
            self.is_weakened = false;
            return true;
        }
        false
    }

    /// Apply the honesty-check penalty for `minutes` of unauthorized gaming.
    ///
    /// Experience loss goes through the demotion path; the bank deduction
    /// saturates at zero. Weakness grows by one step per started half hour.
    pub fn apply_penalty(
        &mut self,
        minutes: u64,
        xp_per_minute: u64,
        bank_per_minute: u64,
    ) -> PenaltyOutcome {
        let xp_lost = minutes.saturating_mul(xp_per_minute);
        let levels_lost = self.lose_xp(xp_lost);

        let bank_penalty = minutes.saturating_mul(bank_per_minute);
        let minutes_lost = bank_penalty.min(self.gaming_minutes);
        self.gaming_minutes -= minutes_lost;

        let steps = ((minutes + 29) / 30) as u32;
        self.weakness_level = self.weakness_level.saturating_add(steps);
        self.is_weakened = self.weakness_level > 0;

        PenaltyOutcome {
            xp_lost,
            minutes_lost,
            levels_lost,
            weakness_level: self.weakness_level,
        }
    }
}
