//! Posting behavior helpers: superstition gating, double-texting,
//! content fatigue, follower polish, freshness-biased engagement, and
//! milestone posts.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::DoubleText;
use crate::personality::PersonalityEngine;
use crate::random::RandomSource;

/// Consecutive same-topic posts before the entity pivots.
pub const DEFAULT_FATIGUE_THRESHOLD: usize = 4;

/// Content topics an entity rotates through.
pub const CONTENT_TOPICS: &[&str] = &[
    "tournament",
    "cash_game",
    "strategy",
    "lifestyle",
    "clip",
    "general",
];

impl PersonalityEngine {
    /// Whether the entity's superstition blocks posting at `now`.
    /// Entities without a superstition are never blocked.
    pub fn is_blocked_by_superstition(&self, identifier: &str, now: DateTime<Utc>) -> bool {
        self.superstition(identifier)
            .is_some_and(|s| s.blocks_posting(now))
    }

    /// Roll the entity's typing pattern for a follow-up message.
    pub fn double_text(&self, identifier: &str, rng: &mut impl RandomSource) -> DoubleText {
        self.typing_pattern(identifier).double_text(rng)
    }
}

/// Whether the latest topics form a fatigue streak.
///
/// True iff the last `threshold` entries of `recent_topics` are all
/// `topic` — a streak counter from the most recent entry backward,
/// stopping at the first mismatch.
pub fn has_content_fatigue<S: AsRef<str>>(
    topic: &str,
    recent_topics: &[S],
    threshold: usize,
) -> bool {
    if recent_topics.len() < threshold {
        return false;
    }
    let streak = recent_topics
        .iter()
        .rev()
        .take_while(|t| t.as_ref() == topic)
        .count();
    streak >= threshold
}

/// A different topic to pivot to when fatigued.
pub fn alternative_topic(current: &str, rng: &mut impl RandomSource) -> &'static str {
    let available: Vec<&'static str> = CONTENT_TOPICS
        .iter()
        .copied()
        .filter(|t| *t != current)
        .collect();
    let idx = ((rng.roll() * available.len() as f64) as usize).min(available.len() - 1);
    available[idx]
}

/// Audience-size polish tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolishLevel {
    New,
    Growing,
    Established,
    Influencer,
}

/// Stylistic polish multipliers keyed off follower count. Bigger
/// audiences mean fewer typos and less slang; no learning involved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FollowerPolish {
    /// Multiplier on typo frequency
    pub typo_reduction: f64,
    /// Multiplier on slang frequency
    pub slang_reduction: f64,
    /// Multiplier on emoji usage
    pub emoji_mod: f64,
    pub level: PolishLevel,
}

/// Polish multipliers for a follower count.
pub fn follower_polish(follower_count: u64) -> FollowerPolish {
    if follower_count >= 1000 {
        FollowerPolish {
            typo_reduction: 0.5,
            slang_reduction: 0.7,
            emoji_mod: 0.8,
            level: PolishLevel::Influencer,
        }
    } else if follower_count >= 500 {
        FollowerPolish {
            typo_reduction: 0.7,
            slang_reduction: 0.9,
            emoji_mod: 0.9,
            level: PolishLevel::Established,
        }
    } else if follower_count >= 100 {
        FollowerPolish {
            typo_reduction: 0.9,
            slang_reduction: 1.0,
            emoji_mod: 1.0,
            level: PolishLevel::Growing,
        }
    } else {
        FollowerPolish {
            typo_reduction: 1.0,
            slang_reduction: 1.0,
            emoji_mod: 1.0,
            level: PolishLevel::New,
        }
    }
}

/// Engagement multiplier by post age: fresh posts draw replies, stale
/// ones mostly don't.
pub fn post_age_engagement_mod(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age_minutes = (now - created_at).num_seconds() as f64 / 60.0;
    if age_minutes < 15.0 {
        2.0
    } else if age_minutes < 30.0 {
        1.5
    } else if age_minutes < 60.0 {
        1.0
    } else if age_minutes < 180.0 {
        0.5
    } else {
        0.2
    }
}

/// Whether a post is worth engaging with, freshness-weighted.
pub fn should_engage_with_post(
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
    base_chance: f64,
    rng: &mut impl RandomSource,
) -> bool {
    rng.roll_bool(base_chance * post_age_engagement_mod(created_at, now))
}

/// An account anniversary falling on today's date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anniversary {
    pub years: i32,
    pub template: String,
}

/// Whether `now` is the anniversary of `account_created_at` (same month
/// and day, at least one full year later).
pub fn check_anniversary(
    account_created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<Anniversary> {
    if account_created_at.month() != now.month() || account_created_at.day() != now.day() {
        return None;
    }
    let years = now.year() - account_created_at.year();
    if years < 1 {
        return None;
    }
    let template = if years == 1 {
        "1 year on here 🎉".to_string()
    } else {
        format!("{years} years on this app 🎂")
    };
    Some(Anniversary { years, template })
}

/// Follower counts worth celebrating.
const FOLLOWER_MILESTONES: &[u64] = &[100, 500, 1000, 2500, 5000, 10000];

/// A recently crossed follower milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerMilestone {
    pub milestone: u64,
    pub template: String,
}

/// Whether the follower count just crossed a milestone (within 5 of it).
pub fn check_follower_milestone(follower_count: u64) -> Option<FollowerMilestone> {
    for &milestone in FOLLOWER_MILESTONES {
        if follower_count >= milestone && follower_count < milestone + 5 {
            let template = if milestone >= 1000 {
                let thousands = milestone as f64 / 1000.0;
                if thousands.fract() == 0.0 {
                    format!("{}k followers 🙏", thousands as u64)
                } else {
                    format!("{thousands}k followers 🙏")
                }
            } else {
                format!("{milestone} followers, wild")
            };
            return Some(FollowerMilestone {
                milestone,
                template,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ReplayRandom, SeededRandom};

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    #[test]
    fn test_fatigue_fires_on_a_full_streak() {
        let recent = ["a", "tournament", "tournament", "tournament", "tournament"];
        assert!(has_content_fatigue(
            "tournament",
            &recent,
            DEFAULT_FATIGUE_THRESHOLD
        ));
    }

    #[test]
    fn test_fatigue_needs_consecutive_posts() {
        let recent = ["tournament", "x", "tournament", "tournament"];
        assert!(!has_content_fatigue(
            "tournament",
            &recent,
            DEFAULT_FATIGUE_THRESHOLD
        ));
    }

    #[test]
    fn test_fatigue_needs_enough_history() {
        let recent = ["tournament", "tournament", "tournament"];
        assert!(!has_content_fatigue(
            "tournament",
            &recent,
            DEFAULT_FATIGUE_THRESHOLD
        ));
    }

    #[test]
    fn test_alternative_topic_avoids_the_current_one() {
        let mut rng = SeededRandom::new(31);
        for _ in 0..100 {
            let topic = alternative_topic("tournament", &mut rng);
            assert_ne!(topic, "tournament");
            assert!(CONTENT_TOPICS.contains(&topic));
        }
    }

    #[test]
    fn test_polish_tiers() {
        assert_eq!(follower_polish(0).level, PolishLevel::New);
        assert_eq!(follower_polish(99).level, PolishLevel::New);
        assert_eq!(follower_polish(100).level, PolishLevel::Growing);
        assert_eq!(follower_polish(500).level, PolishLevel::Established);
        assert_eq!(follower_polish(1000).level, PolishLevel::Influencer);
        assert_eq!(follower_polish(50_000).level, PolishLevel::Influencer);

        let influencer = follower_polish(2000);
        assert_eq!(influencer.typo_reduction, 0.5);
        assert_eq!(influencer.emoji_mod, 0.8);
    }

    #[test]
    fn test_engagement_mod_steps_down_with_age() {
        let now = at("2026-03-02T12:00:00Z");
        assert_eq!(post_age_engagement_mod(at("2026-03-02T11:50:00Z"), now), 2.0);
        assert_eq!(post_age_engagement_mod(at("2026-03-02T11:40:00Z"), now), 1.5);
        assert_eq!(post_age_engagement_mod(at("2026-03-02T11:15:00Z"), now), 1.0);
        assert_eq!(post_age_engagement_mod(at("2026-03-02T10:00:00Z"), now), 0.5);
        assert_eq!(post_age_engagement_mod(at("2026-03-02T06:00:00Z"), now), 0.2);
    }

    #[test]
    fn test_engagement_roll_uses_the_scaled_chance() {
        let now = at("2026-03-02T12:00:00Z");
        let fresh = at("2026-03-02T11:55:00Z");
        // base 0.2 * 2.0 = 0.4: a 0.35 roll passes, 0.45 fails
        let mut pass = ReplayRandom::new([0.35]);
        assert!(should_engage_with_post(fresh, now, 0.2, &mut pass));
        let mut fail = ReplayRandom::new([0.45]);
        assert!(!should_engage_with_post(fresh, now, 0.2, &mut fail));
    }

    #[test]
    fn test_anniversary_on_matching_date() {
        let created = at("2023-03-02T09:00:00Z");
        let now = at("2026-03-02T12:00:00Z");
        let anniversary = check_anniversary(created, now).expect("third anniversary");
        assert_eq!(anniversary.years, 3);
        assert_eq!(anniversary.template, "3 years on this app 🎂");

        let first = check_anniversary(at("2025-03-02T09:00:00Z"), now).expect("first");
        assert_eq!(first.template, "1 year on here 🎉");
    }

    #[test]
    fn test_no_anniversary_on_other_dates_or_first_year() {
        let now = at("2026-03-02T12:00:00Z");
        assert!(check_anniversary(at("2023-03-03T09:00:00Z"), now).is_none());
        assert!(check_anniversary(at("2023-04-02T09:00:00Z"), now).is_none());
        assert!(check_anniversary(at("2026-03-02T01:00:00Z"), now).is_none());
    }

    #[test]
    fn test_milestone_window_is_five_wide() {
        assert!(check_follower_milestone(99).is_none());
        assert_eq!(check_follower_milestone(100).expect("hit").milestone, 100);
        assert_eq!(check_follower_milestone(104).expect("hit").milestone, 100);
        assert!(check_follower_milestone(105).is_none());
        assert_eq!(
            check_follower_milestone(1002).expect("hit").template,
            "1k followers 🙏"
        );
        assert_eq!(
            check_follower_milestone(2501).expect("hit").template,
            "2.5k followers 🙏"
        );
        assert_eq!(
            check_follower_milestone(100).expect("hit").template,
            "100 followers, wild"
        );
    }

    #[test]
    fn test_superstition_gate_defaults_open() {
        let engine = PersonalityEngine::new();
        let now = at("2026-03-02T12:00:00Z");
        // "a" hashes to 97: no superstition, never blocked
        assert!(!engine.is_blocked_by_superstition("a", now));
    }
}
