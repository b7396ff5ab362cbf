//! Gaming-session countdown state machine.
//!
//! The countdown is wall-clock based with no internal thread: the caller
//! ticks it periodically with the current time from an injected clock, and
//! elapsed whole seconds are consumed per tick.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Active -> (Paused <-> Active) -> Idle   (expiry or manual end)
//! ```
//!
//! Starting a session is a two-step handshake with the caller: the caller
//! checks and debits the gaming bank, then calls `start()`. Ending early
//! returns the whole unused minutes for the caller to refund.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Active,
    Paused,
}

/// What a tick observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    None,
    /// Remaining time crossed the warning threshold (fires once per session).
    Warning { remaining_seconds: u64 },
    /// Countdown reached zero; the session is over.
    Expired { minutes_consumed: u64 },
}

/// An active (or idle) gaming-time countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamingSession {
    state: SessionState,
    remaining_seconds: u64,
    total_seconds: u64,
    start_time: Option<DateTime<Utc>>,
    /// Instant of the last effective tick, for elapsed-time catch-up.
    #[serde(default)]
    last_tick: Option<DateTime<Utc>>,
    /// The low-time warning already fired for this session.
    #[serde(default)]
    warning_fired: bool,
    /// Minutes consumed by finished sessions today; reset at day rollover.
    pub total_gaming_today: u64,
}

impl Default for GamingSession {
    fn default() -> Self {
        Self {
            state: SessionState::Idle,
            remaining_seconds: 0,
            total_seconds: 0,
            start_time: None,
            last_tick: None,
            warning_fired: false,
            total_gaming_today: 0,
        }
    }
}

impl GamingSession {
    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn is_paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a countdown of `minutes`. The caller has already debited the
    /// bank. No-op unless Idle.
    pub fn start(&mut self, minutes: u64, now: DateTime<Utc>) -> bool {
        if self.state != SessionState::Idle {
            return false;
        }
        self.state = SessionState::Active;
        self.total_seconds = minutes * 60;
        self.remaining_seconds = self.total_seconds;
        self.start_time = Some(now);
        self.last_tick = Some(now);
        self.warning_fired = false;
        true
    }

    /// Pause the countdown, flushing elapsed time first.
    /// Returns the remaining seconds, or `None` if not Active.
    pub fn pause(&mut self, now: DateTime<Utc>) -> Option<u64> {
        if self.state != SessionState::Active {
            return None;
        }
        self.flush_elapsed(now);
        self.state = SessionState::Paused;
        self.last_tick = None;
        Some(self.remaining_seconds)
    }

    /// Resume a paused countdown. Returns the remaining seconds, or `None`
    /// if not Paused.
    pub fn resume(&mut self, now: DateTime<Utc>) -> Option<u64> {
        if self.state != SessionState::Paused {
            return None;
        }
        self.state = SessionState::Active;
        self.last_tick = Some(now);
        Some(self.remaining_seconds)
    }

    /// End the session early from Active or Paused.
    ///
    /// Returns the whole unused minutes (`floor(remaining / 60)`) for the
    /// caller to refund; consumed minutes accrue to `total_gaming_today`.
    pub fn end(&mut self, now: DateTime<Utc>) -> Option<u64> {
        match self.state {
            SessionState::Active | SessionState::Paused => {
                if self.state == SessionState::Active {
                    self.flush_elapsed(now);
                }
                let refund = self.remaining_seconds / 60;
                self.total_gaming_today += self.total_seconds / 60 - refund;
                self.reset_countdown();
                Some(refund)
            }
            SessionState::Idle => None,
        }
    }

    /// Consume elapsed whole seconds. Effective only while Active.
    ///
    /// Emits the warning once when remaining time crosses `warning_seconds`,
    /// and expires the session at zero.
    pub fn tick(&mut self, now: DateTime<Utc>, warning_seconds: u64) -> TickOutcome {
        if self.state != SessionState::Active {
            return TickOutcome::None;
        }
        if !self.flush_elapsed(now) {
            return TickOutcome::None;
        }
        if self.remaining_seconds == 0 {
            let minutes_consumed = self.total_seconds / 60;
            self.total_gaming_today += minutes_consumed;
            self.reset_countdown();
            return TickOutcome::Expired { minutes_consumed };
        }
        if !self.warning_fired && self.remaining_seconds <= warning_seconds {
            self.warning_fired = true;
            return TickOutcome::Warning {
                remaining_seconds: self.remaining_seconds,
            };
        }
        TickOutcome::None
    }

    /// Reset the daily consumption counter at day rollover.
    pub fn reset_daily(&mut self) {
        self.total_gaming_today = 0;
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Subtract wall-clock seconds elapsed since the last tick.
    /// Returns false when no whole second has passed.
    fn flush_elapsed(&mut self, now: DateTime<Utc>) -> bool {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return false;
        };
        let elapsed = (now - last).num_seconds();
        if elapsed <= 0 {
            return false;
        }
        self.last_tick = Some(now);
        self.remaining_seconds = self.remaining_seconds.saturating_sub(elapsed as u64);
        true
    }

    fn reset_countdown(&mut self) {
        self.state = SessionState::Idle;
        self.remaining_seconds = 0;
        self.total_seconds = 0;
        self.start_time = None;
        self.last_tick = None;
        self.warning_fired = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t0() -> DateTime<Utc> {
        "2026-03-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn start_pause_resume() {
        let mut session = GamingSession::default();
        assert!(session.start(30, t0()));
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.remaining_seconds(), 30 * 60);

        let now = t0() + Duration::seconds(10);
        assert_eq!(session.pause(now), Some(30 * 60 - 10));
        assert_eq!(session.state(), SessionState::Paused);

        // Time spent paused is not consumed.
        let later = now + Duration::seconds(500);
        assert_eq!(session.resume(later), Some(30 * 60 - 10));
        assert_eq!(session.state(), SessionState::Active);

        let outcome = session.tick(later + Duration::seconds(5), 60);
        assert_eq!(outcome, TickOutcome::None);
        assert_eq!(session.remaining_seconds(), 30 * 60 - 15);
    }

    #[test]
    fn start_requires_idle() {
        let mut session = GamingSession::default();
        assert!(session.start(30, t0()));
        assert!(!session.start(10, t0()));
    }

    #[test]
    fn tick_warns_once_then_expires() {
        let mut session = GamingSession::default();
        session.start(1, t0());

        let outcome = session.tick(t0() + Duration::seconds(10), 55);
        assert_eq!(
            outcome,
            TickOutcome::Warning {
                remaining_seconds: 50
            }
        );
        // Warning does not repeat.
        let outcome = session.tick(t0() + Duration::seconds(20), 55);
        assert_eq!(outcome, TickOutcome::None);

        let outcome = session.tick(t0() + Duration::seconds(60), 55);
        assert_eq!(outcome, TickOutcome::Expired { minutes_consumed: 1 });
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.total_gaming_today, 1);
    }

    #[test]
    fn early_end_refunds_whole_minutes() {
        let mut session = GamingSession::default();
        session.start(30, t0());
        // 90 seconds in: 28.5 minutes remain, refund floors to 28.
        let refund = session.end(t0() + Duration::seconds(90));
        assert_eq!(refund, Some(28));
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.total_gaming_today, 2);
    }

    #[test]
    fn end_from_paused_refunds() {
        let mut session = GamingSession::default();
        session.start(10, t0());
        session.pause(t0() + Duration::seconds(60));
        let refund = session.end(t0() + Duration::seconds(600));
        assert_eq!(refund, Some(9));
        assert_eq!(session.total_gaming_today, 1);
    }

    #[test]
    fn end_when_idle_is_a_no_op() {
        let mut session = GamingSession::default();
        assert_eq!(session.end(t0()), None);
    }

    #[test]
    fn tick_ignores_paused_time() {
        let mut session = GamingSession::default();
        session.start(5, t0());
        session.pause(t0() + Duration::seconds(30));
        assert_eq!(session.tick(t0() + Duration::seconds(300), 60), TickOutcome::None);
        assert_eq!(session.remaining_seconds(), 5 * 60 - 30);
    }

    #[test]
    fn sub_second_tick_consumes_nothing() {
        let mut session = GamingSession::default();
        session.start(5, t0());
        assert_eq!(session.tick(t0(), 60), TickOutcome::None);
        assert_eq!(session.remaining_seconds(), 5 * 60);
    }

    #[test]
    fn overshoot_expires_cleanly() {
        let mut session = GamingSession::default();
        session.start(2, t0());
        // Process was asleep well past expiry; one catch-up tick settles it.
        let outcome = session.tick(t0() + Duration::seconds(100_000), 60);
        assert_eq!(outcome, TickOutcome::Expired { minutes_consumed: 2 });
        assert_eq!(session.total_gaming_today, 2);
    }

    #[test]
    fn daily_reset_clears_consumption() {
        let mut session = GamingSession::default();
        session.start(2, t0());
        session.tick(t0() + Duration::seconds(200), 60);
        assert_eq!(session.total_gaming_today, 2);
        session.reset_daily();
        assert_eq!(session.total_gaming_today, 0);
    }
}
