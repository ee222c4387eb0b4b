//! Play style archetypes.

use serde::{Deserialize, Serialize};

/// Play style archetype keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayStyleKey {
    /// Tight-aggressive: few hands, bets and raises often
    #[serde(rename = "TAG")]
    Tag,
    /// Loose-aggressive: many hands, constant pressure
    #[serde(rename = "LAG")]
    Lag,
    /// Only plays premium hands
    #[serde(rename = "nit")]
    Nit,
    /// Calls too much, rarely folds
    #[serde(rename = "calling_station")]
    CallingStation,
    /// Extremely aggressive, bets and raises constantly
    #[serde(rename = "maniac")]
    Maniac,
}

impl std::fmt::Display for PlayStyleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayStyleKey::Tag => write!(f, "TAG"),
            PlayStyleKey::Lag => write!(f, "LAG"),
            PlayStyleKey::Nit => write!(f, "nit"),
            PlayStyleKey::CallingStation => write!(f, "calling_station"),
            PlayStyleKey::Maniac => write!(f, "maniac"),
        }
    }
}

/// A play style archetype with its selection weight and stat bands.
///
/// Stat bands are inclusive `[min, max]` ranges; every derived stat is
/// interpolated inside its band, so a profile can never leave the bands
/// its archetype declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayStyle {
    pub key: PlayStyleKey,
    pub name: String,
    pub description: String,
    /// Selection weight out of 100
    pub weight: u32,
    /// Voluntarily-put-in-pot percentage band
    pub vpip_range: [f64; 2],
    /// Pre-flop raise percentage band
    pub pfr_range: [f64; 2],
    /// 3-bet percentage band
    pub three_bet_range: [f64; 2],
    /// Continuation-bet percentage band
    pub cbet_range: [f64; 2],
    /// Aggression factor band (bets+raises vs. calls)
    pub aggression_range: [f64; 2],
}

/// Reference play style table.
///
/// Weighted 35% TAG, 25% LAG, 15% nit, 15% calling station, 10% maniac.
pub(super) fn default_play_styles() -> Vec<PlayStyle> {
    vec![
        PlayStyle {
            key: PlayStyleKey::Tag,
            name: "Tight-Aggressive".to_string(),
            description: "Plays few hands but bets/raises often".to_string(),
            weight: 35,
            vpip_range: [15.0, 22.0],
            pfr_range: [12.0, 18.0],
            three_bet_range: [5.0, 9.0],
            cbet_range: [65.0, 80.0],
            aggression_range: [2.5, 4.0],
        },
        PlayStyle {
            key: PlayStyleKey::Lag,
            name: "Loose-Aggressive".to_string(),
            description: "Plays many hands and applies pressure".to_string(),
            weight: 25,
            vpip_range: [28.0, 38.0],
            pfr_range: [22.0, 32.0],
            three_bet_range: [8.0, 14.0],
            cbet_range: [70.0, 85.0],
            aggression_range: [3.0, 5.0],
        },
        PlayStyle {
            key: PlayStyleKey::Nit,
            name: "Nit".to_string(),
            description: "Only plays premium hands".to_string(),
            weight: 15,
            vpip_range: [8.0, 14.0],
            pfr_range: [6.0, 12.0],
            three_bet_range: [3.0, 5.0],
            cbet_range: [75.0, 90.0],
            aggression_range: [1.5, 2.5],
        },
        PlayStyle {
            key: PlayStyleKey::CallingStation,
            name: "Calling Station".to_string(),
            description: "Calls too much, rarely folds".to_string(),
            weight: 15,
            vpip_range: [35.0, 50.0],
            pfr_range: [8.0, 15.0],
            three_bet_range: [2.0, 5.0],
            cbet_range: [40.0, 55.0],
            aggression_range: [0.5, 1.2],
        },
        PlayStyle {
            key: PlayStyleKey::Maniac,
            name: "Maniac".to_string(),
            description: "Extremely aggressive, bets/raises constantly".to_string(),
            weight: 10,
            vpip_range: [45.0, 65.0],
            pfr_range: [35.0, 50.0],
            three_bet_range: [12.0, 20.0],
            cbet_range: [80.0, 95.0],
            aggression_range: [4.0, 7.0],
        },
    ]
}
