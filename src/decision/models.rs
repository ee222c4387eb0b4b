//! Decision inputs and outputs.

use serde::{Deserialize, Serialize};

/// Betting streets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    #[default]
    Preflop,
    Flop,
    Turn,
    River,
}

/// Opponent actions observed so far in the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentAction {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

/// A snapshot of the game state at one decision point.
///
/// Supplied by the caller; the hand strength comes from whatever rules
/// engine the host runs, pre-computed to a 0-1 scalar. Missing fields
/// take their defaults — in particular an absent `to_call` is 0, which
/// resolves weak-hand decisions to check instead of call/fold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    /// Pre-computed hand strength, 0-1
    pub hand_strength: f64,
    /// Current pot size
    pub pot_size: f64,
    /// Outstanding bet to call; 0 means the entity can check
    pub to_call: f64,
    /// Seat position, if the host tracks one
    pub position: Option<u8>,
    pub street: Street,
    pub opponent_actions: Vec<OpponentAction>,
}

/// Poker actions this engine can choose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionAction {
    Fold,
    Check,
    Call,
    Raise,
}

impl std::fmt::Display for DecisionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionAction::Fold => write!(f, "fold"),
            DecisionAction::Check => write!(f, "check"),
            DecisionAction::Call => write!(f, "call"),
            DecisionAction::Raise => write!(f, "raise"),
        }
    }
}

/// The engine's chosen action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: DecisionAction,
    /// Chips committed by the action, rounded to 2 decimals; 0 for
    /// fold/check
    pub sizing: f64,
    /// The profile's decision accuracy, echoed for observability
    pub confidence: f64,
    /// Human-readable style/skill label; debugging aid, never behavior
    pub reasoning: String,
}
