/// Property-based tests for personality derivation using proptest
///
/// These verify the structural guarantees of the derivation scheme —
/// determinism, range containment, symmetry — across arbitrary
/// identifiers rather than hand-picked ones.
use horse_ai::{
    DecisionEngine, GameState, PersonalityEngine, RandomSource, SeededRandom, entity_hash,
};
use proptest::prelude::*;

fn identifier_strategy() -> impl Strategy<Value = String> {
    // UUID-ish identifiers plus short/degenerate ones
    "[A-Za-z0-9-]{0,36}"
}

proptest! {
    #[test]
    fn test_hash_is_pure(id in identifier_strategy()) {
        prop_assert_eq!(entity_hash(&id), entity_hash(&id));
    }

    #[test]
    fn test_profile_derivation_is_deterministic(id in identifier_strategy()) {
        let engine = PersonalityEngine::new();
        prop_assert_eq!(engine.profile(&id), engine.profile(&id));
    }

    #[test]
    fn test_salted_derivation_is_deterministic(id in identifier_strategy()) {
        let engine = PersonalityEngine::new().with_trait_salting();
        prop_assert_eq!(engine.profile(&id), engine.profile(&id));
    }

    #[test]
    fn test_stats_stay_in_declared_bands(id in identifier_strategy()) {
        let engine = PersonalityEngine::new();
        let profile = engine.profile(&id);
        let style = &profile.play_style;
        let stats = &profile.stats;

        prop_assert!(stats.vpip >= style.vpip_range[0] && stats.vpip <= style.vpip_range[1]);
        prop_assert!(stats.pfr >= style.pfr_range[0] && stats.pfr <= style.pfr_range[1]);
        prop_assert!(
            stats.three_bet >= style.three_bet_range[0]
                && stats.three_bet <= style.three_bet_range[1]
        );
        prop_assert!(stats.cbet >= style.cbet_range[0] && stats.cbet <= style.cbet_range[1]);
        prop_assert!(
            stats.aggression >= style.aggression_range[0]
                && stats.aggression <= style.aggression_range[1]
        );
        prop_assert!(stats.wtsd >= 25.0 && stats.wtsd < 40.0);
        prop_assert!(stats.won_at_showdown >= 48.0 && stats.won_at_showdown < 56.0);
    }

    #[test]
    fn test_tilt_factor_bounded(id in identifier_strategy()) {
        let engine = PersonalityEngine::new();
        let tilt = engine.tilt_factor(&id);
        prop_assert!((0.0..=0.8).contains(&tilt));
    }

    #[test]
    fn test_rivalry_is_symmetric(a in identifier_strategy(), b in identifier_strategy()) {
        let engine = PersonalityEngine::new();
        let ab = engine.check_rivalry(&a, &b).map(|r| r.kind);
        let ba = engine.check_rivalry(&b, &a).map(|r| r.kind);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn test_friendship_is_symmetric(a in identifier_strategy(), b in identifier_strategy()) {
        let engine = PersonalityEngine::new();
        prop_assert_eq!(engine.are_friends(&a, &b), engine.are_friends(&b, &a));
    }

    #[test]
    fn test_sleep_partitions_the_day(id in identifier_strategy()) {
        let engine = PersonalityEngine::new();
        let pattern = engine.sleep_pattern(&id).clone();
        for hour in 0..24 {
            let sleeping = engine.is_sleeping(&id, hour);
            prop_assert_eq!(sleeping, pattern.covers(hour));
            let expected = if sleeping { 0.0 } else { 1.0 };
            prop_assert_eq!(engine.sleep_activity_mod(&id, hour), expected);
        }
        // Every pattern sleeps some hours and wakes for others
        let asleep = (0..24).filter(|h| pattern.covers(*h)).count();
        prop_assert!(asleep > 0 && asleep < 24);
    }

    #[test]
    fn test_decisions_are_well_formed(
        id in identifier_strategy(),
        hand_strength in 0.0f64..=1.0,
        pot_size in 0.0f64..500.0,
        to_call in 0.0f64..100.0,
        seed in any::<u64>(),
    ) {
        let personalities = PersonalityEngine::new();
        let profile = personalities.profile(&id);
        let engine = DecisionEngine::new();
        let state = GameState {
            hand_strength,
            pot_size,
            to_call,
            ..GameState::default()
        };
        let mut rng = SeededRandom::new(seed);
        let decision = engine.decide(&profile, &state, &mut rng);

        prop_assert!(decision.sizing >= 0.0);
        let cents = decision.sizing * 100.0;
        prop_assert!((cents - cents.round()).abs() < 1e-6);
        prop_assert_eq!(decision.confidence, profile.skill_tier.decision_accuracy);
        prop_assert!(!decision.reasoning.is_empty());
    }

    #[test]
    fn test_noise_cannot_escape_unit_interval(
        id in identifier_strategy(),
        seed in any::<u64>(),
    ) {
        // Extreme strengths with the noisiest tier still produce legal
        // branches; exercised by running the full decision repeatedly.
        let personalities = PersonalityEngine::new();
        let profile = personalities.profile(&id);
        let engine = DecisionEngine::new();
        let mut rng = SeededRandom::new(seed);
        for strength in [0.0, 1.0] {
            let state = GameState {
                hand_strength: strength,
                pot_size: 100.0,
                to_call: 10.0,
                ..GameState::default()
            };
            let _ = engine.decide(&profile, &state, &mut rng);
        }
    }
}

#[test]
fn test_rolls_drawn_match_documented_order() {
    // A raw count check on top of the proptest surface: the decision
    // draws one noise roll plus at most two branch rolls.
    struct CountingSource {
        inner: SeededRandom,
        draws: usize,
    }
    impl RandomSource for CountingSource {
        fn roll(&mut self) -> f64 {
            self.draws += 1;
            self.inner.roll()
        }
    }

    let personalities = PersonalityEngine::new();
    let profile = personalities.profile("draw-count-horse");
    let engine = DecisionEngine::new();
    let state = GameState {
        hand_strength: 0.5,
        pot_size: 100.0,
        to_call: 10.0,
        ..GameState::default()
    };

    let mut rng = CountingSource {
        inner: SeededRandom::new(41),
        draws: 0,
    };
    for i in 1..=200 {
        engine.decide(&profile, &state, &mut rng);
        assert!(rng.draws <= i * 3, "decision drew too many rolls");
    }
}
