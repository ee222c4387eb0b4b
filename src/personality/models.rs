//! Derived personality records.
//!
//! Nothing here is persisted. Every record is reconstructed from the
//! entity identifier on each call and discarded after use.

use serde::{Deserialize, Serialize};

use crate::catalog::{ChatStyle, PlayStyle, SkillTier, StakesLevel};

/// Continuous poker statistics, interpolated inside the play style's
/// declared bands.
///
/// Percentages are expressed 0-100 (VPIP 22.0 means 22%); `aggression`
/// is a plain ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PokerStats {
    /// Voluntarily put money in pot, %
    pub vpip: f64,
    /// Pre-flop raise, %
    pub pfr: f64,
    /// 3-bet, %
    pub three_bet: f64,
    /// Continuation bet, %
    pub cbet: f64,
    /// Aggression factor (bets+raises per call)
    pub aggression: f64,
    /// Went to showdown, %
    pub wtsd: f64,
    /// Won at showdown, %
    pub won_at_showdown: f64,
}

/// When the entity plays and for how long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionProfile {
    /// Hours of day (0-23) the entity prefers to play
    pub preferred_hours: Vec<u32>,
    /// Preferred session length in minutes
    pub avg_session_minutes: u32,
    /// Tables played simultaneously
    pub tables_per_session: u32,
    /// Days active per week
    pub days_active_per_week: u32,
    /// Break tendency scalar; consumed divided by 100 at the roll site
    pub break_frequency: f64,
}

/// The complete derived personality for one entity.
///
/// Bit-for-bit reproducible for a fixed identifier: derivation consumes
/// no external state and no randomness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub entity_id: String,
    pub play_style: PlayStyle,
    pub skill_tier: SkillTier,
    pub stats: PokerStats,
    pub chat_style: ChatStyle,
    pub stakes_preference: StakesLevel,
    pub session_profile: SessionProfile,
    /// Tendency to abandon a session after a sustained loss (0-0.8)
    pub tilt_factor: f64,
    /// How quickly play adjusts to opponents; tied to skill tier
    pub adaptation_rate: f64,
}
