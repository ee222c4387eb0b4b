/// Distribution fidelity over a large synthetic population.
///
/// The archetype tables are weighted, not uniform; these tests sample
/// 100,000 distinct identifiers and check that the empirical frequencies
/// land within 2 percentage points of the declared weights.
use std::collections::{BTreeSet, HashMap};

use horse_ai::catalog::{PlayStyleKey, SkillTierKey};
use horse_ai::{FriendGroup, PersonalityEngine};
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const POPULATION: usize = 100_000;
const TOLERANCE_PP: f64 = 2.0;

fn population() -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut ids = BTreeSet::new();
    while ids.len() < POPULATION {
        let id: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(16)
            .map(char::from)
            .collect();
        ids.insert(id);
    }
    ids.into_iter().collect()
}

fn assert_share(label: &str, count: usize, expected_percent: f64) {
    let actual = count as f64 * 100.0 / POPULATION as f64;
    assert!(
        (actual - expected_percent).abs() <= TOLERANCE_PP,
        "{label}: {actual:.2}% observed, {expected_percent}% expected"
    );
}

#[test]
fn test_play_style_distribution_matches_weights() {
    let engine = PersonalityEngine::new();
    let mut counts: HashMap<PlayStyleKey, usize> = HashMap::new();
    for id in population() {
        *counts.entry(engine.play_style(&id).key).or_default() += 1;
    }

    assert_share("TAG", counts[&PlayStyleKey::Tag], 35.0);
    assert_share("LAG", counts[&PlayStyleKey::Lag], 25.0);
    assert_share("nit", counts[&PlayStyleKey::Nit], 15.0);
    assert_share(
        "calling_station",
        counts[&PlayStyleKey::CallingStation],
        15.0,
    );
    assert_share("maniac", counts[&PlayStyleKey::Maniac], 10.0);
}

#[test]
fn test_skill_tier_distribution_matches_weights() {
    let engine = PersonalityEngine::new();
    let mut counts: HashMap<SkillTierKey, usize> = HashMap::new();
    for id in population() {
        *counts.entry(engine.skill_tier(&id).key).or_default() += 1;
    }

    assert_share("fish", counts[&SkillTierKey::Fish], 15.0);
    assert_share("recreational", counts[&SkillTierKey::Recreational], 25.0);
    assert_share("grinder", counts[&SkillTierKey::Grinder], 35.0);
    assert_share("reg", counts[&SkillTierKey::Regular], 20.0);
    assert_share("crusher", counts[&SkillTierKey::Crusher], 5.0);
}

#[test]
fn test_salted_mode_preserves_the_weights() {
    let engine = PersonalityEngine::new().with_trait_salting();
    let mut counts: HashMap<PlayStyleKey, usize> = HashMap::new();
    for id in population() {
        *counts.entry(engine.play_style(&id).key).or_default() += 1;
    }

    assert_share("TAG (salted)", counts[&PlayStyleKey::Tag], 35.0);
    assert_share("maniac (salted)", counts[&PlayStyleKey::Maniac], 10.0);
}

#[test]
fn test_friend_groups_split_evenly() {
    let engine = PersonalityEngine::new();
    let mut counts: HashMap<FriendGroup, usize> = HashMap::new();
    for id in population() {
        *counts.entry(engine.friend_group(&id)).or_default() += 1;
    }

    assert_eq!(counts.len(), 10, "every friend group should appear");
    for (group, count) in counts {
        assert_share(&group.to_string(), count, 10.0);
    }
}

#[test]
fn test_superstition_carriers_are_a_minority() {
    let engine = PersonalityEngine::new();
    let carriers = population()
        .iter()
        .filter(|id| engine.superstition(id).is_some())
        .count();
    // Rolls 0-30 of 100 carry one
    assert_share("superstition carriers", carriers, 31.0);
}
