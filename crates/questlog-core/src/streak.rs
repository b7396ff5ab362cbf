//! Daily-completion streak bookkeeping.
//!
//! A day "qualifies" when the daily goal is met; the streak extends by one on
//! the completion that meets it, at most once per calendar day. A gap of more
//! than one day since the last qualifying completion breaks the streak.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Streaks {
    /// Consecutive days the daily goal was met.
    pub current: u32,
    /// Longest streak ever reached.
    pub longest: u32,
    /// Date of the last qualifying completion (goal met that day).
    pub last_completed_date: Option<NaiveDate>,
    /// Completions recorded for `active_date`.
    pub tasks_completed_today: u32,
    /// Completions per day required to keep the streak alive.
    pub daily_goal: u32,
    /// The calendar day `tasks_completed_today` counts for.
    #[serde(default)]
    pub active_date: Option<NaiveDate>,
}

/// What a day-rollover check found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RollOver {
    /// The calendar date moved on from `active_date`.
    pub new_day: bool,
    /// More than one day passed since the last qualifying completion.
    pub streak_broken: bool,
    /// Streak length before it broke (0 when `streak_broken` is false).
    pub previous: u32,
}

impl Streaks {
    pub fn new(daily_goal: u32) -> Self {
        Self {
            current: 0,
            longest: 0,
            last_completed_date: None,
            tasks_completed_today: 0,
            daily_goal,
            active_date: None,
        }
    }

    /// Record one completion on `today`.
    ///
    /// Returns the new streak length when this completion met the daily goal
    /// and extended the streak; `None` otherwise. The streak extends at most
    /// once per calendar day: the goal-meeting completion stamps
    /// `last_completed_date`, and further completions the same day see the
    /// stamp and pass through.
    pub fn record_completion(&mut self, today: NaiveDate) -> Option<u32> {
        self.active_date = Some(today);
        self.tasks_completed_today += 1;
        if self.tasks_completed_today >= self.daily_goal
            && self.last_completed_date != Some(today)
        {
            self.current += 1;
            self.longest = self.longest.max(self.current);
            self.last_completed_date = Some(today);
            return Some(self.current);
        }
        None
    }

    /// Detect a day change and reset daily bookkeeping.
    ///
    /// Callers run this before every mutation so stale daily counters never
    /// leak into a new day.
    pub fn roll_over(&mut self, today: NaiveDate) -> RollOver {
        if self.active_date == Some(today) {
            return RollOver::default();
        }
        let had_active_day = self.active_date.is_some();
        self.active_date = Some(today);
        self.tasks_completed_today = 0;

        let mut result = RollOver {
            new_day: had_active_day,
            ..RollOver::default()
        };
        if let Some(last) = self.last_completed_date {
            if (today - last).num_days() > 1 && self.current > 0 {
                result.streak_broken = true;
                result.previous = self.current;
                self.current = 0;
            }
        }
        result
    }
}
