//! Decision engine: consumes a personality profile and a game-state
//! snapshot, returns an action with sizing and confidence.

pub mod engine;
pub mod models;

pub use engine::{DecisionConfig, DecisionEngine, StyleThresholds};
pub use models::{Decision, DecisionAction, GameState, OpponentAction, Street};
