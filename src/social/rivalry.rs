//! Pairwise relations: rivalries and friend groups.
//!
//! Both relations are pure functions of two identifiers, computed on
//! demand — there is no relation table to maintain. Rivalry combines the
//! two hashes by addition, so the relation is symmetric by construction.

use crate::catalog::{RivalryArchetype, pick_weighted};
use crate::personality::PersonalityEngine;
use crate::random::RandomSource;

/// Probability a rivalry actually colors a reply.
const RIVALRY_REPLY_CHANCE: f64 = 0.3;

/// Bluff/value damping applied when soft-playing a friend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftplayModifier {
    /// Multiplier on bluff frequency
    pub bluff_reduction: f64,
    /// Multiplier on thin-value frequency
    pub value_reduction: f64,
    pub is_softplaying: bool,
}

impl PersonalityEngine {
    /// The rivalry between two entities, if one exists.
    ///
    /// `(hash(a) + hash(b)) % 100` above 15 means no rivalry (roughly
    /// 85% of pairs); the remainder buckets into friendly/competitive/
    /// heated at 7/2/1. Symmetric: swapping the arguments never changes
    /// the result.
    pub fn check_rivalry(&self, a: &str, b: &str) -> Option<&RivalryArchetype> {
        let combined = (self.trait_hash(a, "rivalry") + self.trait_hash(b, "rivalry")) % 100;
        if combined > 15 {
            return None;
        }
        let roll = combined % 10;
        Some(pick_weighted(&self.catalog.rivalry_types, roll, |r| {
            r.weight
        }))
    }

    /// Whether two entities are rivals.
    pub fn are_rivals(&self, a: &str, b: &str) -> bool {
        self.check_rivalry(a, b).is_some()
    }

    /// A rivalry-flavored reply from `a` to `b`'s post.
    ///
    /// Fires only 30% of the time even when a rivalry exists; callers
    /// must treat `None` as "use ordinary chat instead".
    pub fn rivalry_reply(
        &self,
        a: &str,
        b: &str,
        rng: &mut impl RandomSource,
    ) -> Option<String> {
        let rivalry = self.check_rivalry(a, b)?;
        if rivalry.templates.is_empty() || !rng.roll_bool(RIVALRY_REPLY_CHANCE) {
            return None;
        }
        let hash = self.trait_hash(a, "rivalry");
        let idx = (hash % rivalry.templates.len() as u64) as usize;
        Some(rivalry.templates[idx].clone())
    }

    /// Whether two entities share a friend group.
    pub fn are_friends(&self, a: &str, b: &str) -> bool {
        self.friend_group(a) == self.friend_group(b)
    }

    /// Aggression adjusted for the opponent: rivals get 50% extra heat.
    pub fn rivalry_aggression(&self, a: &str, b: &str, base_aggression: f64) -> f64 {
        if self.are_rivals(a, b) {
            base_aggression * 1.5
        } else {
            base_aggression
        }
    }

    /// Soft-play damping against the opponent. Neutral against
    /// non-friends; against friends, bluffs halve and thin value thins.
    pub fn softplay(&self, a: &str, b: &str) -> SoftplayModifier {
        if self.are_friends(a, b) {
            SoftplayModifier {
                bluff_reduction: 0.5,
                value_reduction: 0.85,
                is_softplaying: true,
            }
        } else {
            SoftplayModifier {
                bluff_reduction: 1.0,
                value_reduction: 1.0,
                is_softplaying: false,
            }
        }
    }
}
