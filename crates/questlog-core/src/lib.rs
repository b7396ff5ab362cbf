//! # Questlog Core Library
//!
//! Core business logic for questlog, a task-gamification tracker: complete
//! quests, earn experience and gaming minutes, keep streaks alive, and spend
//! the bank on timed gaming sessions. All operations are available through
//! the standalone CLI binary; this crate holds everything below the command
//! layer.
//!
//! ## Architecture
//!
//! - **Reducer pipeline**: one `AppState` tree mutated only through
//!   [`App::dispatch`], which returns the [`Event`]s each action produced
//! - **Session engine**: a wall-clock-based countdown that requires the
//!   caller to periodically invoke `tick()`, with the clock injected for
//!   deterministic tests
//! - **Storage**: SQLite key-value blobs for state and TOML for configuration
//!
//! ## Key Components
//!
//! - [`App`]: state container and action dispatcher
//! - [`Hero`]: level/xp progression and the gaming-minute bank
//! - [`GamingSession`]: countdown state machine
//! - [`Store`]: persisted state blobs
//! - [`Config`]: application configuration management

pub mod app;
pub mod clock;
pub mod error;
pub mod events;
pub mod hero;
pub mod quest;
pub mod reward;
pub mod session;
pub mod stats;
pub mod storage;
pub mod streak;

pub use app::{Action, App, AppState};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ConfigError, CoreError, StorageError};
pub use events::Event;
pub use hero::{xp_threshold, Hero, PenaltyOutcome};
pub use quest::{default_quests, Difficulty, Quest};
pub use reward::{quest_reward, streak_bonus_factor, Reward};
pub use session::{GamingSession, SessionState, TickOutcome};
pub use stats::{category_stats, CategoryStats};
pub use storage::{Config, Store};
pub use streak::{RollOver, Streaks};
