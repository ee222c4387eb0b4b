//! # Horse AI
//!
//! A deterministic personality and decision engine for a population of
//! autonomous poker players ("horses"). Each entity is named by an
//! opaque string identifier; its entire personality — play style, skill,
//! risk tolerance, social habits — is re-derived from that identifier on
//! every call. Nothing is persisted and nothing is cached: the hash *is*
//! the personality record.
//!
//! ## Architecture
//!
//! - [`hash`]: identifier → non-negative integer, the root of all
//!   derivation
//! - [`catalog`]: the weighted archetype tables (play styles, skill
//!   tiers, chat styles, stakes bands, sleep/typing/timing patterns,
//!   superstitions, rivalry types, inside jokes), injectable and
//!   validated
//! - [`personality`]: trait derivation and the aggregated
//!   [`PersonalityProfile`]
//! - [`decision`]: profile + game state → poker action with sizing and
//!   confidence
//! - [`session`]: table join/leave heuristics (tilt, stakes fit,
//!   time-of-day fit)
//! - [`social`]: rivalries, table chat, content fatigue, milestones, and
//!   other posting behavior
//! - [`random`]: the injectable random source behind every
//!   non-deterministic gate
//!
//! Derivation is pure: for a fixed identifier every trait is bit-for-bit
//! reproducible across calls and processes. The only randomness lives in
//! explicitly flagged behavioral gates (decision noise, bluff and
//! slow-play rolls, chat/break/rivalry-reply gating), each of which
//! takes a [`RandomSource`] parameter. Evaluating many entities is
//! embarrassingly parallel: there is no shared mutable state.
//!
//! ## Example
//!
//! ```
//! use horse_ai::{DecisionEngine, GameState, PersonalityEngine, ThreadRandom};
//!
//! let personalities = PersonalityEngine::new();
//! let profile = personalities.profile("9b2f1c44-a0d3-4f6e-b1aa-5c7d8e9f0a1b");
//!
//! let engine = DecisionEngine::new();
//! let state = GameState {
//!     hand_strength: 0.82,
//!     pot_size: 120.0,
//!     to_call: 20.0,
//!     ..GameState::default()
//! };
//! let decision = engine.decide(&profile, &state, &mut ThreadRandom);
//! println!("{} ({})", decision.action, decision.reasoning);
//! ```

/// Identity hashing.
pub mod hash;
pub use hash::{entity_hash, salted_hash};

/// Injectable random sources.
pub mod random;
pub use random::{RandomSource, ReplayRandom, SeededRandom, ThreadRandom};

/// Archetype catalogs.
pub mod catalog;
pub use catalog::{Catalog, CatalogError, ChatSituation, FriendGroup, HandClass};

/// Personality derivation.
pub mod personality;
pub use personality::{PersonalityEngine, PersonalityProfile, PokerStats, SessionProfile};

/// Poker decision making.
pub mod decision;
pub use decision::{Decision, DecisionAction, DecisionConfig, DecisionEngine, GameState, Street};

/// Session join/leave behavior.
pub mod session;
pub use session::{
    LeaveDecision, LeaveReason, SessionState, SitDecision, SitReason, should_leave_table,
    should_sit_at_table,
};

/// Social behavior.
pub mod social;
