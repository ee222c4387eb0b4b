//! Social archetypes: rivalry types, friend groups with inside jokes, and
//! superstitions.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Rivalry kinds, mildest to hottest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RivalryKind {
    Friendly,
    Competitive,
    Heated,
}

impl std::fmt::Display for RivalryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RivalryKind::Friendly => write!(f, "friendly"),
            RivalryKind::Competitive => write!(f, "competitive"),
            RivalryKind::Heated => write!(f, "heated"),
        }
    }
}

/// A rivalry flavor: reply templates and an intensity scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RivalryArchetype {
    pub kind: RivalryKind,
    /// Selection weight out of 10 (the rivalry sub-roll is mod 10)
    pub weight: u32,
    pub templates: Vec<String>,
    /// 1 (friendly banter) through 3 (heated)
    pub intensity: u8,
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Reference rivalry table: 70/20/10 over friendly/competitive/heated.
pub(super) fn default_rivalry_types() -> Vec<RivalryArchetype> {
    vec![
        RivalryArchetype {
            kind: RivalryKind::Friendly,
            weight: 7,
            templates: lines(&["👀", "sure buddy", "if you say so", "lol ok", "debatable"]),
            intensity: 1,
        },
        RivalryArchetype {
            kind: RivalryKind::Competitive,
            weight: 2,
            templates: lines(&["cap", "nah", "doubt", "hmm", "🤔"]),
            intensity: 2,
        },
        RivalryArchetype {
            kind: RivalryKind::Heated,
            weight: 1,
            templates: lines(&["wrong", "bad take", "respectfully disagree", "uh no"]),
            intensity: 3,
        },
    ]
}

/// Friend group keys; each entity belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FriendGroup {
    HighRollers,
    Grinders,
    RecPlayers,
    StudyGroup,
    DegenCrew,
    OldSchool,
    YoungGuns,
    ContentCreators,
    TournamentRegs,
    CashGamePros,
}

impl std::fmt::Display for FriendGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FriendGroup::HighRollers => write!(f, "high_rollers"),
            FriendGroup::Grinders => write!(f, "grinders"),
            FriendGroup::RecPlayers => write!(f, "rec_players"),
            FriendGroup::StudyGroup => write!(f, "study_group"),
            FriendGroup::DegenCrew => write!(f, "degen_crew"),
            FriendGroup::OldSchool => write!(f, "old_school"),
            FriendGroup::YoungGuns => write!(f, "young_guns"),
            FriendGroup::ContentCreators => write!(f, "content_creators"),
            FriendGroup::TournamentRegs => write!(f, "tournament_regs"),
            FriendGroup::CashGamePros => write!(f, "cash_game_pros"),
        }
    }
}

/// Inside-joke phrases for one friend group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsideJokeSet {
    pub group: FriendGroup,
    pub phrases: Vec<String>,
}

/// Reference inside jokes, one set per friend group.
pub(super) fn default_inside_jokes() -> Vec<InsideJokeSet> {
    vec![
        InsideJokeSet {
            group: FriendGroup::HighRollers,
            phrases: lines(&["the nosebleeds call", "big game energy", "high roller problems"]),
        },
        InsideJokeSet {
            group: FriendGroup::Grinders,
            phrases: lines(&["volume > everything", "rakeback warriors", "the grind never stops"]),
        },
        InsideJokeSet {
            group: FriendGroup::RecPlayers,
            phrases: lines(&["just for fun", "gamble gamble", "recreational right"]),
        },
        InsideJokeSet {
            group: FriendGroup::StudyGroup,
            phrases: lines(&["solver says", "gto approved", "EV+"]),
        },
        InsideJokeSet {
            group: FriendGroup::DegenCrew,
            phrases: lines(&["one more bullet", "sleep is for the weak", "im good for it"]),
        },
        InsideJokeSet {
            group: FriendGroup::OldSchool,
            phrases: lines(&["back in my day", "reads > math", "soul read"]),
        },
        InsideJokeSet {
            group: FriendGroup::YoungGuns,
            phrases: lines(&["shipped it", "future wsop champ", "next up"]),
        },
        InsideJokeSet {
            group: FriendGroup::ContentCreators,
            phrases: lines(&["like and subscribe", "content is content", "for the vlog"]),
        },
        InsideJokeSet {
            group: FriendGroup::TournamentRegs,
            phrases: lines(&["icm torture", "another day 2", "reg battle"]),
        },
        InsideJokeSet {
            group: FriendGroup::CashGamePros,
            phrases: lines(&["deep stacked vibes", "rake is real", "exploitative line"]),
        },
    ]
}

/// Superstition keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuperstitionKey {
    NoFridayPosts,
    QuietPeakHours,
    LuckyHours,
    MorningOnly,
}

/// The time condition a superstition keys on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuperstitionRule {
    /// Triggered on a given weekday
    WeekdayIs(chrono::Weekday),
    /// Triggered when the hour falls in `start..=end`
    HourBetween { start: u32, end: u32 },
    /// Triggered when the hour is one of the listed values
    HourOneOf(Vec<u32>),
}

/// A posting superstition. Normally the trigger blocks posting; inverted
/// superstitions post *only* while triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Superstition {
    pub key: SuperstitionKey,
    pub name: String,
    pub rule: SuperstitionRule,
    pub invert: bool,
}

impl Superstition {
    /// Whether the rule's time condition holds at `now`.
    pub fn is_triggered(&self, now: DateTime<Utc>) -> bool {
        let hour = now.hour();
        match &self.rule {
            SuperstitionRule::WeekdayIs(day) => now.weekday() == *day,
            SuperstitionRule::HourBetween { start, end } => hour >= *start && hour <= *end,
            SuperstitionRule::HourOneOf(hours) => hours.contains(&hour),
        }
    }

    /// Whether the superstition prevents posting at `now`.
    pub fn blocks_posting(&self, now: DateTime<Utc>) -> bool {
        let triggered = self.is_triggered(now);
        if self.invert { !triggered } else { triggered }
    }
}

/// Reference superstition table. Selection is uniform over the table, and
/// only roughly a third of entities carry one at all.
pub(super) fn default_superstitions() -> Vec<Superstition> {
    vec![
        Superstition {
            key: SuperstitionKey::NoFridayPosts,
            name: "Never posts on Fridays".to_string(),
            rule: SuperstitionRule::WeekdayIs(chrono::Weekday::Fri),
            invert: false,
        },
        Superstition {
            key: SuperstitionKey::QuietPeakHours,
            name: "Quiet during peak session hours".to_string(),
            rule: SuperstitionRule::HourBetween { start: 18, end: 23 },
            invert: false,
        },
        Superstition {
            key: SuperstitionKey::LuckyHours,
            name: "Only posts at lucky hours".to_string(),
            rule: SuperstitionRule::HourOneOf(vec![11, 22]),
            invert: true,
        },
        Superstition {
            key: SuperstitionKey::MorningOnly,
            name: "Morning poster only".to_string(),
            rule: SuperstitionRule::HourBetween { start: 6, end: 12 },
            invert: true,
        },
    ]
}
