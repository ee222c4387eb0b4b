//! Table chat and inside jokes.

use chrono::{DateTime, Utc};

use crate::catalog::{ChatSituation, FriendGroup};
use crate::personality::PersonalityEngine;
use crate::random::RandomSource;

/// Probability an inside joke gets worked into a post.
const INSIDE_JOKE_CHANCE: f64 = 0.10;

/// Whether to lean on an inside joke this time.
pub fn should_use_inside_joke(rng: &mut impl RandomSource) -> bool {
    rng.roll_bool(INSIDE_JOKE_CHANCE)
}

impl PersonalityEngine {
    /// A chat line for a table situation, or `None` when the entity
    /// stays quiet.
    ///
    /// The chat style's frequency gates the attempt (a silent entity
    /// speaks ~2% of the time, a trash talker ~25%). When it fires, one
    /// line is drawn from the style's generic lines plus the situation's
    /// lines, indexed by hash plus wall-clock millis — repeated calls in
    /// the same instant don't collide across entities, but an entity's
    /// hash doesn't bias which line of the pool it favors over time.
    pub fn table_chat(
        &self,
        identifier: &str,
        situation: ChatSituation,
        now: DateTime<Utc>,
        rng: &mut impl RandomSource,
    ) -> Option<String> {
        let style = self.chat_style(identifier);
        if !rng.roll_bool(style.chat_frequency) {
            return None;
        }

        let situation_lines = self.catalog.lines_for(situation);
        let pool_len = style.messages.len() + situation_lines.len();
        if pool_len == 0 {
            return None;
        }

        let hash = self.trait_hash(identifier, "chat_style");
        let millis = now.timestamp_millis().max(0) as u64;
        let idx = ((hash.wrapping_add(millis)) % pool_len as u64) as usize;

        let line = if idx < style.messages.len() {
            &style.messages[idx]
        } else {
            &situation_lines[idx - style.messages.len()]
        };
        Some(line.clone())
    }

    /// An inside-joke phrase for a friend group, varied per entity.
    ///
    /// Unknown groups fall back to the grinders' set, then to the first
    /// set in the catalog. `None` only when the resolved set is empty.
    pub fn inside_joke(&self, group: FriendGroup, identifier: &str) -> Option<&str> {
        let jokes = &self.catalog.inside_jokes;
        let set = jokes
            .iter()
            .find(|s| s.group == group)
            .or_else(|| jokes.iter().find(|s| s.group == FriendGroup::Grinders))
            .or_else(|| jokes.first())?;
        if set.phrases.is_empty() {
            return None;
        }
        let hash = self.trait_hash(identifier, "friend_group");
        let idx = (hash % set.phrases.len() as u64) as usize;
        Some(&set.phrases[idx])
    }
}
