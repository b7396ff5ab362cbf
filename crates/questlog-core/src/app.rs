//! Application state and the action/reducer pipeline.
//!
//! All mutations flow through [`App::dispatch`]: it runs the day-rollover
//! check, applies the action, mirrors the four state slices to storage, and
//! returns the events the action produced. There is no other mutation path,
//! so no two mutations are ever concurrent.
//!
//! Malformed requests (unknown quest, session command in the wrong state,
//! insufficient bank) are no-ops reported through diagnostic logging, not
//! errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::CoreError;
use crate::events::Event;
use crate::hero::Hero;
use crate::quest::{default_quests, Difficulty, Quest};
use crate::reward::quest_reward;
use crate::session::{GamingSession, SessionState, TickOutcome};
use crate::storage::{Config, Store, KEY_HERO, KEY_QUESTS, KEY_SESSION, KEY_STREAKS};
use crate::streak::Streaks;

/// The whole in-memory state tree: one slice per persisted blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    pub hero: Hero,
    pub quests: Vec<Quest>,
    pub streaks: Streaks,
    pub session: GamingSession,
}

impl AppState {
    /// Fresh state with the default quest set seeded.
    pub fn new(config: &Config) -> Self {
        Self {
            hero: Hero::named(config.hero.name.clone()),
            quests: default_quests(),
            streaks: Streaks::new(config.streak.daily_goal),
            session: GamingSession::default(),
        }
    }
}

/// Every user-visible operation, plus the timer tick.
#[derive(Debug, Clone)]
pub enum Action {
    AddQuest {
        name: String,
        difficulty: Difficulty,
        category: String,
    },
    CompleteQuest {
        id: String,
    },
    DeleteQuest {
        id: String,
    },
    StartSession {
        minutes: u64,
    },
    PauseSession,
    ResumeSession,
    EndSession,
    /// The recurring one-second tick while a session runs.
    Tick,
    /// Self-reported unauthorized gaming ("honesty check").
    ReportPenalty {
        minutes: u64,
    },
    ResetProgress,
}

/// The application: state, config, clock, and the (optional) store.
///
/// Storage unavailability is detected once at startup; with no store the app
/// keeps working in memory and save attempts are skipped.
pub struct App<C: Clock = SystemClock> {
    state: AppState,
    config: Config,
    store: Option<Store>,
    clock: C,
}

impl App<SystemClock> {
    /// Open storage, rehydrate persisted state, and run on the wall clock.
    pub fn load() -> Self {
        let config = Config::load_or_default();
        let store = match Store::open() {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!(error = %e, "storage unavailable; progress will not be saved");
                None
            }
        };
        Self::from_store(config, store, SystemClock)
    }
}

impl<C: Clock> App<C> {
    /// Assemble an app from parts, rehydrating each slice that the store
    /// holds. Slices that are missing or unreadable fall back to defaults.
    pub fn from_store(config: Config, store: Option<Store>, clock: C) -> Self {
        let mut state = AppState::new(&config);
        if let Some(store) = &store {
            state.hero = Self::rehydrate(store, KEY_HERO).unwrap_or(state.hero);
            state.quests = Self::rehydrate(store, KEY_QUESTS).unwrap_or(state.quests);
            state.streaks = Self::rehydrate(store, KEY_STREAKS).unwrap_or(state.streaks);
            state.session = Self::rehydrate(store, KEY_SESSION).unwrap_or(state.session);
        }
        // Config owns the daily-goal knob; the persisted copy follows it.
        state.streaks.daily_goal = config.streak.daily_goal;
        Self {
            state,
            config,
            store,
            clock,
        }
    }

    fn rehydrate<T: serde::de::DeserializeOwned>(store: &Store, key: &str) -> Option<T> {
        match store.load_slice(key) {
            Ok(slice) => slice,
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unreadable state slice");
                None
            }
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn persistence_enabled(&self) -> bool {
        self.store.is_some()
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Apply one action and mirror the new state to storage.
    pub fn dispatch(&mut self, action: Action) -> Vec<Event> {
        let now = self.clock.now();
        let mut events = Vec::new();

        // "Just completed" markers survive exactly one dispatch.
        for quest in &mut self.state.quests {
            quest.completed = false;
        }
        self.roll_over(now, &mut events);

        match action {
            Action::AddQuest {
                name,
                difficulty,
                category,
            } => self.add_quest(name, difficulty, category),
            Action::CompleteQuest { id } => self.complete_quest(&id, now, &mut events),
            Action::DeleteQuest { id } => self.delete_quest(&id),
            Action::StartSession { minutes } => self.start_session(minutes, now, &mut events),
            Action::PauseSession => self.pause_session(now, &mut events),
            Action::ResumeSession => self.resume_session(now, &mut events),
            Action::EndSession => self.end_session(now, &mut events),
            Action::Tick => self.tick_session(now, &mut events),
            Action::ReportPenalty { minutes } => self.report_penalty(minutes, now, &mut events),
            Action::ResetProgress => {
                self.state = AppState::new(&self.config);
                events.push(Event::ProgressReset { at: now });
            }
        }

        self.persist();
        events
    }

    // ── Handlers ─────────────────────────────────────────────────────

    fn roll_over(&mut self, now: DateTime<Utc>, events: &mut Vec<Event>) {
        let roll = self.state.streaks.roll_over(now.date_naive());
        if roll.streak_broken {
            events.push(Event::StreakBroken {
                previous: roll.previous,
                at: now,
            });
        }
        if roll.new_day {
            for quest in &mut self.state.quests {
                quest.completed_today = false;
            }
            self.state.session.reset_daily();
            events.push(Event::DayRolledOver { at: now });
        }
    }

    fn add_quest(&mut self, name: String, difficulty: Difficulty, category: String) {
        let name = name.trim().to_string();
        if name.is_empty() {
            tracing::warn!("ignoring quest with empty name");
            return;
        }
        self.state.quests.push(Quest::new(name, difficulty, category));
    }

    fn complete_quest(&mut self, id: &str, now: DateTime<Utc>, events: &mut Vec<Event>) {
        let Some(quest) = self.state.quests.iter_mut().find(|q| q.id == id) else {
            tracing::warn!(quest_id = id, "ignoring completion for unknown quest");
            return;
        };
        quest.completed = true;
        quest.completed_today = true;
        let name = quest.name.clone();
        let difficulty = quest.difficulty;

        // Reward scales with the streak as it stood before this completion.
        let reward = quest_reward(difficulty, self.state.streaks.current);
        events.push(Event::QuestCompleted {
            quest_id: id.to_string(),
            name,
            xp: reward.xp,
            minutes: reward.minutes,
            at: now,
        });

        let levels_gained = self.state.hero.gain_xp(reward.xp);
        if levels_gained > 0 {
            events.push(Event::LevelUp {
                level: self.state.hero.level,
                at: now,
            });
        }
        self.state.hero.gaming_minutes += reward.minutes;
        self.state.hero.total_tasks_completed += 1;
        if self.state.hero.clear_weakness_step() {
            events.push(Event::WeaknessCleared { at: now });
        }

        if let Some(current) = self.state.streaks.record_completion(now.date_naive()) {
            events.push(Event::StreakExtended {
                current,
                longest: self.state.streaks.longest,
                at: now,
            });
        }
    }

    fn delete_quest(&mut self, id: &str) {
        let before = self.state.quests.len();
        self.state.quests.retain(|q| q.id != id);
        if self.state.quests.len() == before {
            tracing::warn!(quest_id = id, "ignoring delete for unknown quest");
        }
    }

    fn start_session(&mut self, minutes: u64, now: DateTime<Utc>, events: &mut Vec<Event>) {
        if minutes == 0 {
            tracing::warn!("ignoring zero-minute session request");
            return;
        }
        if self.state.session.state() != SessionState::Idle {
            tracing::warn!("ignoring session start while a session is running");
            return;
        }
        if self.state.hero.gaming_minutes < minutes {
            tracing::warn!(
                requested = minutes,
                available = self.state.hero.gaming_minutes,
                "ignoring session start with insufficient gaming bank"
            );
            return;
        }
        self.state.hero.gaming_minutes -= minutes;
        self.state.session.start(minutes, now);
        events.push(Event::SessionStarted { minutes, at: now });
    }

    fn pause_session(&mut self, now: DateTime<Utc>, events: &mut Vec<Event>) {
        // Catch up on elapsed time first; the session may already be over.
        self.tick_session(now, events);
        match self.state.session.pause(now) {
            Some(remaining_seconds) => events.push(Event::SessionPaused {
                remaining_seconds,
                at: now,
            }),
            None => tracing::warn!("ignoring pause with no active session"),
        }
    }

    fn resume_session(&mut self, now: DateTime<Utc>, events: &mut Vec<Event>) {
        match self.state.session.resume(now) {
            Some(remaining_seconds) => events.push(Event::SessionResumed {
                remaining_seconds,
                at: now,
            }),
            None => tracing::warn!("ignoring resume with no paused session"),
        }
    }

    fn end_session(&mut self, now: DateTime<Utc>, events: &mut Vec<Event>) {
        self.tick_session(now, events);
        match self.state.session.end(now) {
            Some(minutes_refunded) => {
                self.state.hero.gaming_minutes += minutes_refunded;
                events.push(Event::SessionEnded {
                    minutes_refunded,
                    at: now,
                });
            }
            None => tracing::warn!("ignoring end with no session to end"),
        }
    }

    fn tick_session(&mut self, now: DateTime<Utc>, events: &mut Vec<Event>) {
        match self
            .state
            .session
            .tick(now, self.config.session.warning_seconds)
        {
            TickOutcome::Warning { remaining_seconds } => events.push(Event::SessionWarning {
                remaining_seconds,
                at: now,
            }),
            TickOutcome::Expired { minutes_consumed } => events.push(Event::SessionExpired {
                minutes_consumed,
                at: now,
            }),
            TickOutcome::None => {}
        }
    }

    fn report_penalty(&mut self, minutes: u64, now: DateTime<Utc>, events: &mut Vec<Event>) {
        if minutes == 0 {
            tracing::warn!("ignoring zero-minute penalty report");
            return;
        }
        let outcome = self.state.hero.apply_penalty(
            minutes,
            self.config.penalty.xp_per_minute,
            self.config.penalty.bank_per_minute,
        );
        events.push(Event::PenaltyApplied {
            xp_lost: outcome.xp_lost,
            minutes_lost: outcome.minutes_lost,
            weakness_level: outcome.weakness_level,
            at: now,
        });
        if outcome.levels_lost > 0 {
            events.push(Event::LevelDown {
                level: self.state.hero.level,
                at: now,
            });
        }
    }

    // ── Persistence ──────────────────────────────────────────────────

    /// Mirror all four slices to storage; failures are logged, not raised.
    fn persist(&self) {
        let Some(store) = &self.store else { return };
        if let Err(e) = Self::save_all(store, &self.state) {
            tracing::warn!(error = %e, "failed to save state");
        }
    }

    fn save_all(store: &Store, state: &AppState) -> Result<(), CoreError> {
        store.save_slice(KEY_HERO, &state.hero)?;
        store.save_slice(KEY_QUESTS, &state.quests)?;
        store.save_slice(KEY_STREAKS, &state.streaks)?;
        store.save_slice(KEY_SESSION, &state.session)?;
        Ok(())
    }
}
