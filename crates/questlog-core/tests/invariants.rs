//! Property tests for the progression and session arithmetic.

use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use questlog_core::{xp_threshold, Difficulty, GamingSession, Hero};

fn t0() -> DateTime<Utc> {
    "2026-04-06T08:00:00Z".parse().unwrap()
}

fn any_difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
        Just(Difficulty::Epic),
    ]
}

proptest! {
    #[test]
    fn threshold_matches_growth_curve(level in 1u32..=120) {
        let expected = (100.0 * 1.25f64.powi(level as i32 - 1)).floor() as u64;
        prop_assert_eq!(xp_threshold(level), expected);
    }

    #[test]
    fn threshold_is_monotonic(level in 1u32..=120) {
        prop_assert!(xp_threshold(level + 1) >= xp_threshold(level));
    }

    #[test]
    fn xp_stays_normalized_after_gains(grants in prop::collection::vec(0u64..5_000, 1..40)) {
        let mut hero = Hero::default();
        for grant in grants {
            hero.gain_xp(grant);
            prop_assert!(hero.xp < hero.xp_to_next_level);
            prop_assert_eq!(hero.xp_to_next_level, xp_threshold(hero.level));
            prop_assert!(hero.level >= 1);
        }
    }

    #[test]
    fn xp_stays_normalized_after_losses(
        gained in 0u64..50_000,
        losses in prop::collection::vec(0u64..10_000, 1..20),
    ) {
        let mut hero = Hero::default();
        hero.gain_xp(gained);
        for loss in losses {
            hero.lose_xp(loss);
            prop_assert!(hero.level >= 1);
            prop_assert!(hero.xp < hero.xp_to_next_level);
            prop_assert_eq!(hero.xp_to_next_level, xp_threshold(hero.level));
        }
    }

    #[test]
    fn gain_then_equal_loss_never_underflows(amount in 0u64..100_000) {
        let mut hero = Hero::default();
        hero.gain_xp(amount);
        hero.lose_xp(amount);
        prop_assert!(hero.level >= 1);
        prop_assert!(hero.xp < hero.xp_to_next_level);
    }

    #[test]
    fn bank_never_negative_under_penalties(
        earned in 0u64..1_000,
        penalty_minutes in 1u64..600,
    ) {
        let mut hero = Hero::default();
        hero.gaming_minutes = earned;
        hero.apply_penalty(penalty_minutes, 2, 1);
        // u64 already forbids negatives; the real claim is saturation, not wrap.
        prop_assert!(hero.gaming_minutes <= earned);
    }

    #[test]
    fn rewards_scale_only_at_whole_tens(streak in 0u32..100, difficulty in any_difficulty()) {
        let reward = questlog_core::quest_reward(difficulty, streak);
        let factor = 1 + (streak / 10) as u64;
        prop_assert_eq!(reward.xp, difficulty.base_xp() * factor);
        prop_assert_eq!(reward.minutes, difficulty.base_minutes() * factor);
    }

    #[test]
    fn session_accounting_balances(minutes in 1u64..240, elapsed in 0i64..20_000) {
        let mut session = GamingSession::default();
        session.start(minutes, t0());
        let refund = session
            .end(t0() + Duration::seconds(elapsed))
            .expect("active session always ends");
        // Refund plus consumed minutes never exceeds what was charged.
        prop_assert!(refund <= minutes);
        prop_assert_eq!(session.total_gaming_today + refund, minutes);
    }

    #[test]
    fn weakness_steps_round_up(minutes in 1u64..300) {
        let mut hero = Hero::default();
        let outcome = hero.apply_penalty(minutes, 2, 1);
        let expected = ((minutes + 29) / 30) as u32;
        prop_assert_eq!(outcome.weakness_level, expected);
        prop_assert!(hero.is_weakened);
    }
}
