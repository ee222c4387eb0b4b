//! Trait derivation: identifier in, archetype out.
//!
//! Each derivation method hashes the identifier, reduces the hash to a
//! roll sized to its table, and walks the table's weights (or indexes it
//! directly for uniform tables). Calling the same method twice with the
//! same identifier always returns the same bucket.

use crate::catalog::{
    Catalog, CatalogError, ChatStyle, FriendGroup, PlayStyle, SkillTier, SleepPattern,
    StakesLevel, Superstition, TimingPattern, TypingPattern, pick_weighted,
};
use crate::hash::{entity_hash, salted_hash};
use crate::personality::models::{PersonalityProfile, PokerStats, SessionProfile};

fn lerp(range: [f64; 2], t: f64) -> f64 {
    range[0] + (range[1] - range[0]) * t
}

/// Derives personality traits from entity identifiers against a catalog.
///
/// By default every trait draws from the *same* identifier hash, which
/// reproduces the reference bucket assignments exactly — including their
/// cross-trait correlation (a hash bucket always co-occurs with the same
/// skill tier). [`with_trait_salting`] switches to per-trait salted
/// hashes, decorrelating the draws at the cost of different bucket
/// assignments; never mix the two modes for the same population.
///
/// [`with_trait_salting`]: PersonalityEngine::with_trait_salting
#[derive(Debug, Clone)]
pub struct PersonalityEngine {
    pub(crate) catalog: Catalog,
    trait_salting: bool,
}

impl Default for PersonalityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonalityEngine {
    /// Engine over the reference catalog, legacy (shared-hash) bucketing.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::default(),
            trait_salting: false,
        }
    }

    /// Engine over a caller-supplied catalog; the catalog is validated
    /// before derivation will trust its weights and table sizes.
    pub fn with_catalog(catalog: Catalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self {
            catalog,
            trait_salting: false,
        })
    }

    /// Switch to per-trait salted hashing (decorrelated draws).
    pub fn with_trait_salting(mut self) -> Self {
        self.trait_salting = true;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn trait_hash(&self, identifier: &str, salt: &str) -> u64 {
        if self.trait_salting {
            salted_hash(identifier, salt)
        } else {
            entity_hash(identifier)
        }
    }

    /// The entity's play style archetype (weighted 35/25/15/15/10).
    pub fn play_style(&self, identifier: &str) -> &PlayStyle {
        let roll = self.trait_hash(identifier, "play_style") % 100;
        pick_weighted(&self.catalog.play_styles, roll, |s| s.weight)
    }

    /// The entity's skill tier (weighted 15/25/35/20/5).
    pub fn skill_tier(&self, identifier: &str) -> &SkillTier {
        let roll = self.trait_hash(identifier, "skill_tier") % 100;
        pick_weighted(&self.catalog.skill_tiers, roll, |t| t.weight)
    }

    /// Continuous stats interpolated inside the play style's bands.
    ///
    /// A single parameter `t = (hash % 1000) / 1000` positions every
    /// band-interpolated stat, so stats move together within a style.
    pub fn stats(&self, identifier: &str) -> PokerStats {
        let hash = self.trait_hash(identifier, "stats");
        let style = self.play_style(identifier);
        let t = (hash % 1000) as f64 / 1000.0;

        PokerStats {
            vpip: lerp(style.vpip_range, t),
            pfr: lerp(style.pfr_range, t),
            three_bet: lerp(style.three_bet_range, t),
            cbet: lerp(style.cbet_range, t),
            aggression: lerp(style.aggression_range, t),
            wtsd: 25.0 + (hash % 15) as f64,
            won_at_showdown: 48.0 + (hash % 8) as f64,
        }
    }

    /// The entity's table chat style (uniform over the table).
    pub fn chat_style(&self, identifier: &str) -> &ChatStyle {
        let hash = self.trait_hash(identifier, "chat_style");
        let idx = (hash % self.catalog.chat_styles.len() as u64) as usize;
        &self.catalog.chat_styles[idx]
    }

    /// Preferred stakes band. Higher skill pulls toward higher stakes:
    /// the band index is the tier level plus a one-step hash nudge,
    /// capped at the top of the table.
    pub fn stakes_preference(&self, identifier: &str) -> &StakesLevel {
        let hash = self.trait_hash(identifier, "stakes");
        let tier = self.skill_tier(identifier);
        let idx = usize::from(tier.level.saturating_sub(1)) + (hash % 2) as usize;
        let idx = idx.min(self.catalog.stakes_levels.len() - 1);
        &self.catalog.stakes_levels[idx]
    }

    /// When the entity plays and for how long.
    pub fn session_profile(&self, identifier: &str) -> SessionProfile {
        let hash = self.trait_hash(identifier, "session");
        let pattern_idx = (hash % self.catalog.hour_patterns.len() as u64) as usize;

        SessionProfile {
            preferred_hours: self.catalog.hour_patterns[pattern_idx].hours.clone(),
            avg_session_minutes: 30 + (hash % 90) as u32,
            tables_per_session: 1 + (hash % 4) as u32,
            days_active_per_week: 2 + (hash % 5) as u32,
            break_frequency: 0.1 + (hash % 20) as f64 / 100.0,
        }
    }

    /// Tilt tendency, 0-0.8. Lower skill tilts harder.
    pub fn tilt_factor(&self, identifier: &str) -> f64 {
        let hash = self.trait_hash(identifier, "tilt");
        let tier = self.skill_tier(identifier);
        let base = f64::from(5u8.saturating_sub(tier.level)) * 0.15;
        let variance = (hash % 20) as f64 / 100.0;
        (base + variance).min(0.8)
    }

    /// How quickly the entity adjusts to opponents; the skill tier's
    /// adapt speed verbatim.
    pub fn adaptation_rate(&self, identifier: &str) -> f64 {
        self.skill_tier(identifier).adapt_speed
    }

    /// The entity's sleep window (uniform over the table).
    pub fn sleep_pattern(&self, identifier: &str) -> &SleepPattern {
        let hash = self.trait_hash(identifier, "sleep");
        let idx = (hash % self.catalog.sleep_patterns.len() as u64) as usize;
        &self.catalog.sleep_patterns[idx]
    }

    /// Whether the entity is asleep at `hour` (0-23).
    pub fn is_sleeping(&self, identifier: &str, hour: u32) -> bool {
        self.sleep_pattern(identifier).covers(hour)
    }

    /// Activity multiplier at `hour`: 0 asleep, 1 awake.
    pub fn sleep_activity_mod(&self, identifier: &str, hour: u32) -> f64 {
        if self.is_sleeping(identifier, hour) {
            0.0
        } else {
            1.0
        }
    }

    /// The entity's typing pattern (uniform over the table).
    pub fn typing_pattern(&self, identifier: &str) -> &TypingPattern {
        let hash = self.trait_hash(identifier, "typing");
        let idx = (hash % self.catalog.typing_patterns.len() as u64) as usize;
        &self.catalog.typing_patterns[idx]
    }

    /// The entity's action-timing pattern (uniform over the table).
    pub fn timing_pattern(&self, identifier: &str) -> &TimingPattern {
        let hash = self.trait_hash(identifier, "timing");
        let idx = (hash % self.catalog.timing_patterns.len() as u64) as usize;
        &self.catalog.timing_patterns[idx]
    }

    /// The entity's superstition, if it carries one (rolls 0-30 of 100).
    pub fn superstition(&self, identifier: &str) -> Option<&Superstition> {
        let hash = self.trait_hash(identifier, "superstition");
        if hash % 100 > 30 {
            return None;
        }
        let idx = (hash % self.catalog.superstitions.len() as u64) as usize;
        Some(&self.catalog.superstitions[idx])
    }

    /// The friend group the entity belongs to (uniform over the joke
    /// sets, one group per set).
    pub fn friend_group(&self, identifier: &str) -> FriendGroup {
        let hash = self.trait_hash(identifier, "friend_group");
        let idx = (hash % self.catalog.inside_jokes.len() as u64) as usize;
        self.catalog.inside_jokes[idx].group
    }

    /// Aggregate every derived trait into one profile.
    pub fn profile(&self, identifier: &str) -> PersonalityProfile {
        PersonalityProfile {
            entity_id: identifier.to_string(),
            play_style: self.play_style(identifier).clone(),
            skill_tier: self.skill_tier(identifier).clone(),
            stats: self.stats(identifier),
            chat_style: self.chat_style(identifier).clone(),
            stakes_preference: self.stakes_preference(identifier).clone(),
            session_profile: self.session_profile(identifier),
            tilt_factor: self.tilt_factor(identifier),
            adaptation_rate: self.adaptation_rate(identifier),
        }
    }
}
