//! Table chat styles and situation line sets.

use serde::{Deserialize, Serialize};

/// Chat style keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatStyleKey {
    Silent,
    Minimal,
    Friendly,
    Analytical,
    TrashTalker,
    Supportive,
}

impl std::fmt::Display for ChatStyleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatStyleKey::Silent => write!(f, "silent"),
            ChatStyleKey::Minimal => write!(f, "minimal"),
            ChatStyleKey::Friendly => write!(f, "friendly"),
            ChatStyleKey::Analytical => write!(f, "analytical"),
            ChatStyleKey::TrashTalker => write!(f, "trash_talker"),
            ChatStyleKey::Supportive => write!(f, "supportive"),
        }
    }
}

/// A chat style: how often the entity talks and its generic lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatStyle {
    pub key: ChatStyleKey,
    pub name: String,
    /// Probability a chat opportunity produces a line (0-1)
    pub chat_frequency: f64,
    pub messages: Vec<String>,
}

/// Table situations that can trigger chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatSituation {
    Win,
    Lose,
    BadBeat,
    BigPot,
    Sit,
    Leave,
}

/// Lines tied to one table situation, mixed with a style's generic lines
/// when chat fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SituationLines {
    pub situation: ChatSituation,
    pub lines: Vec<String>,
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Reference chat style table. Selection is uniform over the table.
pub(super) fn default_chat_styles() -> Vec<ChatStyle> {
    vec![
        ChatStyle {
            key: ChatStyleKey::Silent,
            name: "Silent".to_string(),
            chat_frequency: 0.02,
            messages: vec![],
        },
        ChatStyle {
            key: ChatStyleKey::Minimal,
            name: "Minimal".to_string(),
            chat_frequency: 0.08,
            messages: lines(&["gg", "nh", "ty", "gl"]),
        },
        ChatStyle {
            key: ChatStyleKey::Friendly,
            name: "Friendly".to_string(),
            chat_frequency: 0.15,
            messages: lines(&[
                "nice hand!",
                "well played",
                "good luck everyone",
                "gg wp",
                "fun table",
            ]),
        },
        ChatStyle {
            key: ChatStyleKey::Analytical,
            name: "Analytical".to_string(),
            chat_frequency: 0.12,
            messages: lines(&["interesting line", "std", "close spot", "tough river", "wp"]),
        },
        ChatStyle {
            key: ChatStyleKey::TrashTalker,
            name: "Trash Talker".to_string(),
            chat_frequency: 0.25,
            messages: lines(&["lol", "really?", "ok buddy", "sure", "nice call 🙄", "wow"]),
        },
        ChatStyle {
            key: ChatStyleKey::Supportive,
            name: "Supportive".to_string(),
            chat_frequency: 0.18,
            messages: lines(&[
                "unlucky",
                "variance",
                "itll come back",
                "good fold",
                "tough spot",
            ]),
        },
    ]
}

/// Reference per-situation lines.
pub(super) fn default_situation_lines() -> Vec<SituationLines> {
    vec![
        SituationLines {
            situation: ChatSituation::Win,
            lines: lines(&["gg", "ty", "nh (to myself)", ":)"]),
        },
        SituationLines {
            situation: ChatSituation::Lose,
            lines: lines(&["nh", "gg", "wp"]),
        },
        SituationLines {
            situation: ChatSituation::BadBeat,
            lines: lines(&["wow", "sick", "variance", "lol ok"]),
        },
        SituationLines {
            situation: ChatSituation::BigPot,
            lines: lines(&["biggie", "ship it", "lets go"]),
        },
        SituationLines {
            situation: ChatSituation::Sit,
            lines: lines(&["gl all", "hi", "glgl"]),
        },
        SituationLines {
            situation: ChatSituation::Leave,
            lines: lines(&["gg all", "cya", "gn", "ty for the game"]),
        },
    ]
}
