//! Daily-rhythm archetypes: preferred hours, sleep, typing, and action
//! timing.

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// A named set of preferred playing hours (0-23).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourPattern {
    pub name: String,
    pub hours: Vec<u32>,
}

/// Reference hour patterns. Selection is uniform over the table.
pub(super) fn default_hour_patterns() -> Vec<HourPattern> {
    vec![
        HourPattern {
            name: "evening".to_string(),
            hours: vec![18, 19, 20, 21, 22, 23],
        },
        HourPattern {
            name: "late_night".to_string(),
            hours: vec![20, 21, 22, 23, 0, 1, 2],
        },
        HourPattern {
            name: "daytime".to_string(),
            hours: vec![9, 10, 11, 12, 13, 14],
        },
        HourPattern {
            name: "commuter".to_string(),
            hours: vec![6, 7, 8, 17, 18, 19],
        },
        HourPattern {
            name: "always_on".to_string(),
            hours: (0..24).collect(),
        },
    ]
}

/// Sleep pattern keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepPatternKey {
    EarlyBird,
    Normal,
    NightOwl,
    Degen,
    Irregular,
}

/// A sleep window in hours of day. `sleep_start > sleep_end` means the
/// window wraps past midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepPattern {
    pub key: SleepPatternKey,
    pub name: String,
    pub sleep_start: u32,
    pub sleep_end: u32,
}

impl SleepPattern {
    /// Whether the entity is asleep at `hour` (0-23). The start hour is
    /// inside the window, the end hour is not.
    pub fn covers(&self, hour: u32) -> bool {
        if self.sleep_start > self.sleep_end {
            hour >= self.sleep_start || hour < self.sleep_end
        } else {
            hour >= self.sleep_start && hour < self.sleep_end
        }
    }
}

/// Reference sleep patterns. Selection is uniform over the table.
pub(super) fn default_sleep_patterns() -> Vec<SleepPattern> {
    vec![
        SleepPattern {
            key: SleepPatternKey::EarlyBird,
            name: "Early Bird".to_string(),
            sleep_start: 22,
            sleep_end: 6,
        },
        SleepPattern {
            key: SleepPatternKey::Normal,
            name: "Normal".to_string(),
            sleep_start: 0,
            sleep_end: 8,
        },
        SleepPattern {
            key: SleepPatternKey::NightOwl,
            name: "Night Owl".to_string(),
            sleep_start: 4,
            sleep_end: 12,
        },
        SleepPattern {
            key: SleepPatternKey::Degen,
            name: "Degen".to_string(),
            sleep_start: 6,
            sleep_end: 14,
        },
        SleepPattern {
            key: SleepPatternKey::Irregular,
            name: "Irregular".to_string(),
            sleep_start: 3,
            sleep_end: 10,
        },
    ]
}

/// Typing pattern keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypingPatternKey {
    SinglePoster,
    DoubleTexter,
    StreamOfConsciousness,
    Deliberate,
}

/// How an entity posts: single messages or rapid follow-ups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingPattern {
    pub key: TypingPatternKey,
    pub description: String,
    /// Probability of sending a follow-up message (0-1)
    pub double_text_chance: f64,
    /// Base delay before the follow-up, in milliseconds
    pub avg_delay_ms: u64,
}

/// Outcome of a double-text roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoubleText {
    pub should_double: bool,
    /// Delay before the follow-up; 0 when no follow-up fires
    pub delay_ms: u64,
}

impl TypingPattern {
    /// Roll whether a follow-up message should be sent, and after how
    /// long. The delay gets up to 10s of jitter on top of the base.
    pub fn double_text(&self, rng: &mut impl RandomSource) -> DoubleText {
        let should_double = rng.roll_bool(self.double_text_chance);
        let delay_ms = if should_double {
            self.avg_delay_ms + (rng.roll() * 10_000.0) as u64
        } else {
            0
        };
        DoubleText {
            should_double,
            delay_ms,
        }
    }
}

/// Reference typing patterns. Selection is uniform over the table.
pub(super) fn default_typing_patterns() -> Vec<TypingPattern> {
    vec![
        TypingPattern {
            key: TypingPatternKey::SinglePoster,
            description: "Always single posts".to_string(),
            double_text_chance: 0.05,
            avg_delay_ms: 0,
        },
        TypingPattern {
            key: TypingPatternKey::DoubleTexter,
            description: "Frequently adds follow-up".to_string(),
            double_text_chance: 0.35,
            avg_delay_ms: 30_000,
        },
        TypingPattern {
            key: TypingPatternKey::StreamOfConsciousness,
            description: "Often multi-posts rapidly".to_string(),
            double_text_chance: 0.5,
            avg_delay_ms: 10_000,
        },
        TypingPattern {
            key: TypingPatternKey::Deliberate,
            description: "Occasional thoughtful follow-up".to_string(),
            double_text_chance: 0.15,
            avg_delay_ms: 60_000,
        },
    ]
}

/// Hand classes for action-timing purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandClass {
    Strong,
    Weak,
    Bluff,
}

/// Timing pattern keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingPatternKey {
    Standard,
    FastStrong,
    SlowStrong,
    BluffTank,
    InstantFold,
}

/// Think-time ranges per hand class. Patterns other than `Standard` leak
/// a timing tell that observant opponents could read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingPattern {
    pub key: TimingPatternKey,
    /// Delay range in milliseconds when holding a strong hand
    pub strong_hand_delay_ms: [u64; 2],
    /// Delay range when holding a weak hand
    pub weak_hand_delay_ms: [u64; 2],
    /// Delay range when bluffing
    pub bluff_delay_ms: [u64; 2],
    pub has_tell: bool,
}

impl TimingPattern {
    /// Draw an action delay for a hand class, uniform inside the class's
    /// range.
    pub fn action_delay_ms(&self, class: HandClass, rng: &mut impl RandomSource) -> u64 {
        let [min, max] = match class {
            HandClass::Strong => self.strong_hand_delay_ms,
            HandClass::Weak => self.weak_hand_delay_ms,
            HandClass::Bluff => self.bluff_delay_ms,
        };
        min + (rng.roll() * (max - min) as f64) as u64
    }
}

/// Reference timing patterns. Selection is uniform over the table.
pub(super) fn default_timing_patterns() -> Vec<TimingPattern> {
    vec![
        TimingPattern {
            key: TimingPatternKey::Standard,
            strong_hand_delay_ms: [2000, 4000],
            weak_hand_delay_ms: [2000, 4000],
            bluff_delay_ms: [2000, 4000],
            has_tell: false,
        },
        TimingPattern {
            key: TimingPatternKey::FastStrong,
            strong_hand_delay_ms: [500, 1500],
            weak_hand_delay_ms: [3000, 5000],
            bluff_delay_ms: [2500, 4500],
            has_tell: true,
        },
        TimingPattern {
            key: TimingPatternKey::SlowStrong,
            strong_hand_delay_ms: [4000, 7000],
            weak_hand_delay_ms: [1000, 2000],
            bluff_delay_ms: [3000, 5000],
            has_tell: true,
        },
        TimingPattern {
            key: TimingPatternKey::BluffTank,
            strong_hand_delay_ms: [1500, 3000],
            weak_hand_delay_ms: [1500, 3000],
            bluff_delay_ms: [5000, 8000],
            has_tell: true,
        },
        TimingPattern {
            key: TimingPatternKey::InstantFold,
            strong_hand_delay_ms: [2000, 3500],
            weak_hand_delay_ms: [200, 800],
            bluff_delay_ms: [3000, 5000],
            has_tell: true,
        },
    ]
}
