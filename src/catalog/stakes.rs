//! Stakes bands.

use serde::{Deserialize, Serialize};

/// Stakes band keys, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StakesKey {
    Micro,
    Low,
    Mid,
    High,
    Nosebleed,
}

impl std::fmt::Display for StakesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StakesKey::Micro => write!(f, "micro"),
            StakesKey::Low => write!(f, "low"),
            StakesKey::Mid => write!(f, "mid"),
            StakesKey::High => write!(f, "high"),
            StakesKey::Nosebleed => write!(f, "nosebleed"),
        }
    }
}

/// A stakes band in big-blind units, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakesLevel {
    pub key: StakesKey,
    pub name: String,
    /// Smallest big blind this band covers
    pub min: i64,
    /// Largest big blind this band covers
    pub max: i64,
}

impl StakesLevel {
    /// Whether a table's big blind falls inside this band.
    pub fn covers(&self, big_blind: i64) -> bool {
        big_blind >= self.min && big_blind <= self.max
    }
}

/// Reference stakes table, ordered so that index tracks skill level.
pub(super) fn default_stakes_levels() -> Vec<StakesLevel> {
    vec![
        StakesLevel {
            key: StakesKey::Micro,
            name: "Micro Stakes".to_string(),
            min: 1,
            max: 10,
        },
        StakesLevel {
            key: StakesKey::Low,
            name: "Low Stakes".to_string(),
            min: 10,
            max: 50,
        },
        StakesLevel {
            key: StakesKey::Mid,
            name: "Mid Stakes".to_string(),
            min: 50,
            max: 200,
        },
        StakesLevel {
            key: StakesKey::High,
            name: "High Stakes".to_string(),
            min: 200,
            max: 1000,
        },
        StakesLevel {
            key: StakesKey::Nosebleed,
            name: "Nosebleeds".to_string(),
            min: 1000,
            max: 10000,
        },
    ]
}
