//! Personality-biased decision making.
//!
//! Decisions are heuristic by design, not game-theoretically optimal:
//! the point is that a nit folds hands a maniac shoves, and a fish
//! misreads spots a crusher nails. The only non-determinism in the whole
//! crate's behavioral surface enters here (and in the session/social
//! gates) through the injected [`RandomSource`].

use crate::catalog::PlayStyleKey;
use crate::decision::models::{Decision, DecisionAction, GameState};
use crate::personality::PersonalityProfile;
use crate::random::RandomSource;

/// Hand-strength thresholds for one play style.
///
/// `fold` < `call` < `raise`; adjusted strength below `fold` folds (or
/// bluffs), below `call` calls, below `raise` raises with occasional
/// slow-plays, and at or above `raise` always value-raises.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleThresholds {
    pub fold: f64,
    pub call: f64,
    pub raise: f64,
}

/// Tunables for the decision engine.
///
/// Defaults reproduce the reference behavior; hosts running tuning
/// experiments can construct their own.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionConfig {
    /// Nit thresholds: the tightest table (folds almost everything).
    pub nit: StyleThresholds,

    /// TAG thresholds: balanced tight-aggressive play.
    pub tag: StyleThresholds,

    /// LAG thresholds: wide, pressure-heavy play.
    pub lag: StyleThresholds,

    /// Calling-station thresholds. The unusually high call threshold
    /// models "rarely raises, rarely folds".
    pub calling_station: StyleThresholds,

    /// Maniac thresholds: the loosest table (raises half its range).
    pub maniac: StyleThresholds,

    /// Divisor applied to the aggression stat when computing bluff
    /// probability: `bluff_frequency * (aggression / divisor)`.
    pub bluff_aggression_divisor: f64,

    /// Bluff sizing as a fraction of pot, `[min, max)`
    pub bluff_size_range: [f64; 2],

    /// Probability of slow-playing a medium-strong hand instead of
    /// raising it
    pub slow_play_chance: f64,

    /// Medium-strength raise sizing as a fraction of pot, `[min, max)`
    pub raise_size_range: [f64; 2],

    /// Value raise sizing as a fraction of pot, `[min, max)`
    pub value_size_range: [f64; 2],
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            nit: StyleThresholds {
                fold: 0.7,
                call: 0.85,
                raise: 0.92,
            },
            tag: StyleThresholds {
                fold: 0.5,
                call: 0.7,
                raise: 0.85,
            },
            lag: StyleThresholds {
                fold: 0.35,
                call: 0.55,
                raise: 0.70,
            },
            calling_station: StyleThresholds {
                fold: 0.15,
                call: 0.9,
                raise: 0.95,
            },
            maniac: StyleThresholds {
                fold: 0.2,
                call: 0.4,
                raise: 0.5,
            },
            bluff_aggression_divisor: 3.0,
            bluff_size_range: [0.5, 1.0],
            slow_play_chance: 0.4,
            raise_size_range: [0.5, 0.8],
            value_size_range: [0.6, 1.2],
        }
    }
}

impl DecisionConfig {
    /// Thresholds for a play style archetype.
    pub fn thresholds_for(&self, style: PlayStyleKey) -> StyleThresholds {
        match style {
            PlayStyleKey::Nit => self.nit,
            PlayStyleKey::Tag => self.tag,
            PlayStyleKey::Lag => self.lag,
            PlayStyleKey::CallingStation => self.calling_station,
            PlayStyleKey::Maniac => self.maniac,
        }
    }
}

/// Decision engine: profile + game state in, action out.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    config: DecisionConfig,
}

impl DecisionEngine {
    pub fn new() -> Self {
        Self {
            config: DecisionConfig::default(),
        }
    }

    pub fn with_config(config: DecisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Decide an action for one decision point.
    ///
    /// Skill-based noise perturbs the hand strength read — lower skill,
    /// wider noise — then the style's thresholds pick the branch. All
    /// randomness comes from `rng`; a scripted source makes the outcome
    /// exact (rolls are drawn lazily in branch order: noise first, then
    /// the active branch's gate and sizing rolls).
    ///
    /// `pot_size` and `to_call` are a caller contract: both must be
    /// non-negative.
    pub fn decide(
        &self,
        profile: &PersonalityProfile,
        state: &GameState,
        rng: &mut impl RandomSource,
    ) -> Decision {
        debug_assert!(state.pot_size >= 0.0, "pot_size must be non-negative");
        debug_assert!(state.to_call >= 0.0, "to_call must be non-negative");

        let tier = &profile.skill_tier;
        let noise = (1.0 - tier.decision_accuracy) * (rng.roll() - 0.5);
        let adjusted = (state.hand_strength + noise).clamp(0.0, 1.0);
        let thresholds = self.config.thresholds_for(profile.play_style.key);

        let (action, sizing) = if adjusted < thresholds.fold {
            let bluff_chance =
                tier.bluff_frequency * (profile.stats.aggression / self.config.bluff_aggression_divisor);
            if rng.roll_bool(bluff_chance) {
                let [min, max] = self.config.bluff_size_range;
                (DecisionAction::Raise, state.pot_size * rng.roll_range(min, max))
            } else if state.to_call > 0.0 {
                (DecisionAction::Fold, 0.0)
            } else {
                (DecisionAction::Check, 0.0)
            }
        } else if adjusted < thresholds.call {
            if state.to_call > 0.0 {
                (DecisionAction::Call, state.to_call)
            } else {
                (DecisionAction::Check, state.to_call)
            }
        } else if adjusted < thresholds.raise {
            if rng.roll_bool(self.config.slow_play_chance) {
                if state.to_call > 0.0 {
                    (DecisionAction::Call, state.to_call)
                } else {
                    (DecisionAction::Check, state.to_call)
                }
            } else {
                let [min, max] = self.config.raise_size_range;
                (DecisionAction::Raise, state.pot_size * rng.roll_range(min, max))
            }
        } else {
            let [min, max] = self.config.value_size_range;
            (DecisionAction::Raise, state.pot_size * rng.roll_range(min, max))
        };

        let sizing = (sizing * 100.0).round() / 100.0;

        log::debug!(
            "{}: {} {:.2} (strength {:.2} -> {:.2}, street {:?}, position {:?})",
            profile.entity_id,
            action,
            sizing,
            state.hand_strength,
            adjusted,
            state.street,
            state.position,
        );

        Decision {
            action,
            sizing,
            confidence: tier.decision_accuracy,
            reasoning: format!("{} {}", profile.play_style.name, tier.name),
        }
    }
}
