/// End-to-end behavioral flows: derive a profile, play a decision point,
/// run the session heuristics, and produce chat — the way a host
/// scheduler would drive the engine for each entity tick.
use chrono::{DateTime, Utc};
use horse_ai::catalog::{ChatSituation, SituationLines};
use horse_ai::social::{self, DEFAULT_FATIGUE_THRESHOLD};
use horse_ai::{
    Catalog, CatalogError, DecisionAction, DecisionEngine, GameState, PersonalityEngine,
    SeededRandom, SessionState, session,
};

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

#[test]
fn test_full_entity_tick() {
    let personalities = PersonalityEngine::new();
    let decisions = DecisionEngine::new();
    let mut rng = SeededRandom::new(99);
    let now = at("2026-03-02T20:00:00Z");

    for i in 0..100 {
        let id = format!("tick-horse-{i}");
        let profile = personalities.profile(&id);

        // Table selection
        let sit = session::should_sit_at_table(&profile, profile.stakes_preference.min, 6, 20);
        if sit.should_sit {
            assert!(sit.stakes_match && sit.hour_match);
        }

        // A decision point
        let state = GameState {
            hand_strength: 0.6,
            pot_size: 80.0,
            to_call: 10.0,
            position: Some(2),
            street: horse_ai::Street::Flop,
            opponent_actions: vec![
                horse_ai::decision::OpponentAction::Check,
                horse_ai::decision::OpponentAction::Bet,
            ],
        };
        let decision = decisions.decide(&profile, &state, &mut rng);
        assert!(matches!(
            decision.action,
            DecisionAction::Fold
                | DecisionAction::Check
                | DecisionAction::Call
                | DecisionAction::Raise
        ));
        // With a bet outstanding the engine never checks
        assert_ne!(decision.action, DecisionAction::Check);

        // Departure check
        let leave = session::should_leave_table(
            &profile,
            &SessionState {
                minutes_played: 10,
                stack_change_bb: 0.0,
                hands_played: 25,
            },
            &mut rng,
        );
        assert_eq!(
            leave.should_leave,
            leave.reason != session::LeaveReason::Continuing
        );

        // Chat is nullable by contract
        let _maybe_line = personalities.table_chat(&id, ChatSituation::Win, now, &mut rng);
    }
}

#[test]
fn test_profiles_survive_json_round_trip() {
    let personalities = PersonalityEngine::new();
    let profile = personalities.profile("round-trip-horse");
    let json = serde_json::to_string(&profile).expect("serialize profile");
    let back: horse_ai::PersonalityProfile = serde_json::from_str(&json).expect("parse profile");
    assert_eq!(profile, back);
}

#[test]
fn test_injected_catalog_changes_the_population() {
    // Force a single play style by giving it all the weight
    let mut catalog = Catalog::default();
    for style in &mut catalog.play_styles {
        style.weight = 0;
    }
    catalog.play_styles[2].weight = 100; // nit
    let engine = PersonalityEngine::with_catalog(catalog).expect("valid catalog");

    for i in 0..50 {
        let id = format!("forced-{i}");
        assert_eq!(
            engine.play_style(&id).key,
            horse_ai::catalog::PlayStyleKey::Nit
        );
    }
}

#[test]
fn test_invalid_catalog_is_rejected_up_front() {
    let mut catalog = Catalog::default();
    catalog.skill_tiers[0].weight = 99;
    let err = PersonalityEngine::with_catalog(catalog).expect_err("bad weight sum");
    assert!(matches!(err, CatalogError::BadWeightSum { .. }));
}

#[test]
fn test_catalog_loaded_from_json_behaves_like_the_default() {
    let json = serde_json::to_string(&Catalog::default()).expect("serialize catalog");
    let loaded = Catalog::from_json_str(&json).expect("parse catalog");
    let from_json = PersonalityEngine::with_catalog(loaded).expect("valid catalog");
    let reference = PersonalityEngine::new();

    for i in 0..50 {
        let id = format!("horse-{i}");
        assert_eq!(from_json.profile(&id), reference.profile(&id));
    }
}

#[test]
fn test_posting_pipeline_respects_gates() {
    let personalities = PersonalityEngine::new();
    let now = at("2026-03-06T20:00:00Z"); // a Friday evening
    let mut rng = SeededRandom::new(7);

    for i in 0..200 {
        let id = format!("poster-{i}");

        // Asleep or superstition-blocked entities skip the tick entirely
        if personalities.is_sleeping(&id, 20) {
            continue;
        }
        if personalities.is_blocked_by_superstition(&id, now) {
            continue;
        }

        // Topic choice honors fatigue
        let recent = ["strategy", "clip", "clip", "clip", "clip"];
        if social::has_content_fatigue("clip", &recent, DEFAULT_FATIGUE_THRESHOLD) {
            let pivot = social::alternative_topic("clip", &mut rng);
            assert_ne!(pivot, "clip");
        }

        // A follow-up, when it fires, carries a delay
        let double = personalities.double_text(&id, &mut rng);
        if double.should_double {
            let pattern = personalities.typing_pattern(&id);
            assert!(double.delay_ms >= pattern.avg_delay_ms);
        } else {
            assert_eq!(double.delay_ms, 0);
        }
    }
}

#[test]
fn test_empty_identifier_is_a_valid_entity() {
    let personalities = PersonalityEngine::new();
    let decisions = DecisionEngine::new();

    let profile = personalities.profile("");
    assert_eq!(profile.entity_id, "");

    let state = GameState {
        hand_strength: 0.9,
        pot_size: 50.0,
        to_call: 5.0,
        ..GameState::default()
    };
    let mut rng = SeededRandom::new(1);
    let decision = decisions.decide(&profile, &state, &mut rng);
    assert!(decision.sizing >= 0.0);

    let sit = session::should_sit_at_table(&profile, 5, 6, 20);
    let _ = sit.should_sit;
}

#[test]
fn test_custom_situation_lines_flow_into_chat() {
    let mut catalog = Catalog::default();
    catalog.situation_lines = vec![SituationLines {
        situation: ChatSituation::Win,
        lines: vec!["custom winner line".to_string()],
    }];
    let engine = PersonalityEngine::with_catalog(catalog).expect("valid catalog");

    // A silent-style entity has no generic lines, so a forced-open gate
    // must produce the custom line.
    let silent_id = (0..10_000)
        .map(|i| format!("horse-{i}"))
        .find(|id| engine.chat_style(id).messages.is_empty())
        .expect("some silent entity exists");

    let mut rng = horse_ai::ReplayRandom::new([0.0]);
    let line = engine
        .table_chat(
            &silent_id,
            ChatSituation::Win,
            at("2026-03-02T12:00:00Z"),
            &mut rng,
        )
        .expect("forced gate with one-line pool");
    assert_eq!(line, "custom winner line");
}
