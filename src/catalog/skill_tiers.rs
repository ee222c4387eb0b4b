//! Skill tier archetypes.

use serde::{Deserialize, Serialize};

/// Skill tier keys, weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillTierKey {
    Fish,
    Recreational,
    Grinder,
    #[serde(rename = "reg")]
    Regular,
    Crusher,
}

impl std::fmt::Display for SkillTierKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillTierKey::Fish => write!(f, "fish"),
            SkillTierKey::Recreational => write!(f, "recreational"),
            SkillTierKey::Grinder => write!(f, "grinder"),
            SkillTierKey::Regular => write!(f, "reg"),
            SkillTierKey::Crusher => write!(f, "crusher"),
        }
    }
}

/// A skill tier with its selection weight and decision constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTier {
    pub key: SkillTierKey,
    /// Level 1 (fish) through 5 (crusher)
    pub level: u8,
    pub name: String,
    /// Selection weight out of 100
    pub weight: u32,
    /// How often decisions land on the "correct" side (0-1); also the
    /// inverse of the noise applied to hand strength reads
    pub decision_accuracy: f64,
    /// How often weak hands turn into bluffs
    pub bluff_frequency: f64,
    /// How often value is extracted when ahead
    pub value_frequency: f64,
    /// How often aggression forces a fold
    pub fold_to_aggression: f64,
    /// How quickly play adjusts to opponents (0-1)
    pub adapt_speed: f64,
}

/// Reference skill tier table.
///
/// Weighted 15% fish, 25% recreational, 35% grinder, 20% regular,
/// 5% crusher.
pub(super) fn default_skill_tiers() -> Vec<SkillTier> {
    vec![
        SkillTier {
            key: SkillTierKey::Fish,
            level: 1,
            name: "Fish".to_string(),
            weight: 15,
            decision_accuracy: 0.35,
            bluff_frequency: 0.40,
            value_frequency: 0.50,
            fold_to_aggression: 0.25,
            adapt_speed: 0.0,
        },
        SkillTier {
            key: SkillTierKey::Recreational,
            level: 2,
            name: "Recreational".to_string(),
            weight: 25,
            decision_accuracy: 0.50,
            bluff_frequency: 0.30,
            value_frequency: 0.60,
            fold_to_aggression: 0.35,
            adapt_speed: 0.1,
        },
        SkillTier {
            key: SkillTierKey::Grinder,
            level: 3,
            name: "Grinder".to_string(),
            weight: 35,
            decision_accuracy: 0.70,
            bluff_frequency: 0.25,
            value_frequency: 0.75,
            fold_to_aggression: 0.45,
            adapt_speed: 0.3,
        },
        SkillTier {
            key: SkillTierKey::Regular,
            level: 4,
            name: "Regular".to_string(),
            weight: 20,
            decision_accuracy: 0.85,
            bluff_frequency: 0.22,
            value_frequency: 0.85,
            fold_to_aggression: 0.50,
            adapt_speed: 0.5,
        },
        SkillTier {
            key: SkillTierKey::Crusher,
            level: 5,
            name: "Crusher".to_string(),
            weight: 5,
            decision_accuracy: 0.95,
            bluff_frequency: 0.20,
            value_frequency: 0.92,
            fold_to_aggression: 0.55,
            adapt_speed: 0.8,
        },
    ]
}
