use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every state change in the system produces an Event.
///
/// The CLI prints events as they happen; nothing else in the core reads them
/// back, so they carry display-ready data rather than references into state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    QuestCompleted {
        quest_id: String,
        name: String,
        xp: u64,
        minutes: u64,
        at: DateTime<Utc>,
    },
    LevelUp {
        level: u32,
        at: DateTime<Utc>,
    },
    LevelDown {
        level: u32,
        at: DateTime<Utc>,
    },
    StreakExtended {
        current: u32,
        longest: u32,
        at: DateTime<Utc>,
    },
    StreakBroken {
        previous: u32,
        at: DateTime<Utc>,
    },
    /// Daily bookkeeping ran because the calendar date changed.
    DayRolledOver {
        at: DateTime<Utc>,
    },
    WeaknessCleared {
        at: DateTime<Utc>,
    },
    SessionStarted {
        minutes: u64,
        at: DateTime<Utc>,
    },
    SessionPaused {
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    SessionResumed {
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    /// Remaining time crossed the configured warning threshold.
    SessionWarning {
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    SessionExpired {
        minutes_consumed: u64,
        at: DateTime<Utc>,
    },
    /// Session ended early; unused whole minutes returned to the bank.
    SessionEnded {
        minutes_refunded: u64,
        at: DateTime<Utc>,
    },
    PenaltyApplied {
        xp_lost: u64,
        minutes_lost: u64,
        weakness_level: u32,
        at: DateTime<Utc>,
    },
    ProgressReset {
        at: DateTime<Utc>,
    },
}
