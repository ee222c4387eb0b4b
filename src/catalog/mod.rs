//! Archetype catalogs: the weighted tables every trait is derived from.
//!
//! The tables live in an explicit [`Catalog`] value rather than module
//! globals so alternate catalogs (tuning experiments, tests) can be
//! injected without patching shared state. [`Catalog::default`] reproduces
//! the reference tables; hand-built or JSON-loaded catalogs go through
//! [`Catalog::validate`] before an engine will accept them.

pub mod chat_styles;
pub mod play_styles;
pub mod schedules;
pub mod skill_tiers;
pub mod social;
pub mod stakes;

pub use chat_styles::{ChatSituation, ChatStyle, ChatStyleKey, SituationLines};
pub use play_styles::{PlayStyle, PlayStyleKey};
pub use schedules::{
    DoubleText, HandClass, HourPattern, SleepPattern, SleepPatternKey, TimingPattern,
    TimingPatternKey, TypingPattern, TypingPatternKey,
};
pub use skill_tiers::{SkillTier, SkillTierKey};
pub use social::{
    FriendGroup, InsideJokeSet, RivalryArchetype, RivalryKind, Superstition, SuperstitionKey,
    SuperstitionRule,
};
pub use stakes::{StakesKey, StakesLevel};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog validation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A weighted table's weights don't sum to its roll modulus
    #[error("{table} weights sum to {actual}, expected {expected}")]
    BadWeightSum {
        table: &'static str,
        expected: u32,
        actual: u32,
    },

    /// A table that traits index into has no entries
    #[error("{table} table is empty")]
    EmptyTable { table: &'static str },

    /// An hour value outside 0-23
    #[error("{table} contains hour {hour}, must be 0-23")]
    HourOutOfRange { table: &'static str, hour: u32 },

    /// A probability outside [0, 1]
    #[error("{table} contains frequency {value}, must be within [0, 1]")]
    FrequencyOutOfRange { table: &'static str, value: f64 },

    /// A numeric band with min above max
    #[error("{table} declares inverted range [{min}, {max}]")]
    InvertedRange {
        table: &'static str,
        min: f64,
        max: f64,
    },

    /// Catalog JSON failed to parse
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The full set of archetype tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub play_styles: Vec<PlayStyle>,
    pub skill_tiers: Vec<SkillTier>,
    pub chat_styles: Vec<ChatStyle>,
    pub situation_lines: Vec<SituationLines>,
    pub stakes_levels: Vec<StakesLevel>,
    pub hour_patterns: Vec<HourPattern>,
    pub sleep_patterns: Vec<SleepPattern>,
    pub typing_patterns: Vec<TypingPattern>,
    pub timing_patterns: Vec<TimingPattern>,
    pub superstitions: Vec<Superstition>,
    pub rivalry_types: Vec<RivalryArchetype>,
    pub inside_jokes: Vec<InsideJokeSet>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            play_styles: play_styles::default_play_styles(),
            skill_tiers: skill_tiers::default_skill_tiers(),
            chat_styles: chat_styles::default_chat_styles(),
            situation_lines: chat_styles::default_situation_lines(),
            stakes_levels: stakes::default_stakes_levels(),
            hour_patterns: schedules::default_hour_patterns(),
            sleep_patterns: schedules::default_sleep_patterns(),
            typing_patterns: schedules::default_typing_patterns(),
            timing_patterns: schedules::default_timing_patterns(),
            superstitions: social::default_superstitions(),
            rivalry_types: social::default_rivalry_types(),
            inside_jokes: social::default_inside_jokes(),
        }
    }
}

/// Play style and skill tier rolls are taken mod 100.
const PERCENT_WEIGHT_SUM: u32 = 100;

/// The rivalry sub-roll is taken mod 10.
const RIVALRY_WEIGHT_SUM: u32 = 10;

impl Catalog {
    /// Load a catalog from JSON. The result still needs [`validate`] (the
    /// engine constructors call it) before trait derivation trusts it.
    ///
    /// [`validate`]: Catalog::validate
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the structural invariants trait derivation relies on:
    /// weighted tables sum to their roll modulus, indexed tables are
    /// non-empty, and hours/frequencies/bands are in range.
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.check_non_empty()?;

        let style_sum: u32 = self.play_styles.iter().map(|s| s.weight).sum();
        if style_sum != PERCENT_WEIGHT_SUM {
            return Err(CatalogError::BadWeightSum {
                table: "play_styles",
                expected: PERCENT_WEIGHT_SUM,
                actual: style_sum,
            });
        }

        let tier_sum: u32 = self.skill_tiers.iter().map(|t| t.weight).sum();
        if tier_sum != PERCENT_WEIGHT_SUM {
            return Err(CatalogError::BadWeightSum {
                table: "skill_tiers",
                expected: PERCENT_WEIGHT_SUM,
                actual: tier_sum,
            });
        }

        let rivalry_sum: u32 = self.rivalry_types.iter().map(|r| r.weight).sum();
        if rivalry_sum != RIVALRY_WEIGHT_SUM {
            return Err(CatalogError::BadWeightSum {
                table: "rivalry_types",
                expected: RIVALRY_WEIGHT_SUM,
                actual: rivalry_sum,
            });
        }

        for style in &self.play_styles {
            for band in [
                style.vpip_range,
                style.pfr_range,
                style.three_bet_range,
                style.cbet_range,
                style.aggression_range,
            ] {
                if band[0] > band[1] {
                    return Err(CatalogError::InvertedRange {
                        table: "play_styles",
                        min: band[0],
                        max: band[1],
                    });
                }
            }
        }

        for chat in &self.chat_styles {
            if !(0.0..=1.0).contains(&chat.chat_frequency) {
                return Err(CatalogError::FrequencyOutOfRange {
                    table: "chat_styles",
                    value: chat.chat_frequency,
                });
            }
        }

        for typing in &self.typing_patterns {
            if !(0.0..=1.0).contains(&typing.double_text_chance) {
                return Err(CatalogError::FrequencyOutOfRange {
                    table: "typing_patterns",
                    value: typing.double_text_chance,
                });
            }
        }

        for pattern in &self.hour_patterns {
            if let Some(&hour) = pattern.hours.iter().find(|h| **h > 23) {
                return Err(CatalogError::HourOutOfRange {
                    table: "hour_patterns",
                    hour,
                });
            }
        }

        for sleep in &self.sleep_patterns {
            for hour in [sleep.sleep_start, sleep.sleep_end] {
                if hour > 23 {
                    return Err(CatalogError::HourOutOfRange {
                        table: "sleep_patterns",
                        hour,
                    });
                }
            }
        }

        Ok(())
    }

    fn check_non_empty(&self) -> Result<(), CatalogError> {
        let tables: [(&'static str, bool); 10] = [
            ("play_styles", self.play_styles.is_empty()),
            ("skill_tiers", self.skill_tiers.is_empty()),
            ("chat_styles", self.chat_styles.is_empty()),
            ("stakes_levels", self.stakes_levels.is_empty()),
            ("hour_patterns", self.hour_patterns.is_empty()),
            ("sleep_patterns", self.sleep_patterns.is_empty()),
            ("typing_patterns", self.typing_patterns.is_empty()),
            ("timing_patterns", self.timing_patterns.is_empty()),
            ("rivalry_types", self.rivalry_types.is_empty()),
            ("inside_jokes", self.inside_jokes.is_empty()),
        ];
        for (table, empty) in tables {
            if empty {
                return Err(CatalogError::EmptyTable { table });
            }
        }
        Ok(())
    }

    /// Lines for one table situation; empty when the situation has none.
    pub fn lines_for(&self, situation: ChatSituation) -> &[String] {
        self.situation_lines
            .iter()
            .find(|s| s.situation == situation)
            .map(|s| s.lines.as_slice())
            .unwrap_or(&[])
    }
}

/// Walk a cumulative-weight table. `roll` must already be reduced modulo
/// the table's weight sum; validation guarantees the walk lands in a
/// bucket for every in-range roll.
pub(crate) fn pick_weighted<T>(items: &[T], roll: u64, weight: impl Fn(&T) -> u32) -> &T {
    let mut cumulative = 0u64;
    for item in items {
        cumulative += u64::from(weight(item));
        if roll < cumulative {
            return item;
        }
    }
    unreachable!("weighted tables are validated: weights sum to the roll modulus")
}
