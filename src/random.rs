//! Injectable randomness for the behavioral functions.
//!
//! Personality derivation is fully deterministic, but a handful of
//! behaviors draw randomness: decision noise and bluff rolls, chat
//! frequency gating, break/tilt rolls, and rivalry-reply gating. Those
//! draws go through [`RandomSource`] instead of an ambient generator so
//! that determinism tests can fix the rolls and behavioral tests can
//! sample distributions.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A uniform random source over `[0, 1)`.
///
/// Implementations must be safe to drive from a single thread; hosts that
/// evaluate many entities concurrently should give each worker its own
/// source (there is no shared state inside this crate to protect).
pub trait RandomSource {
    /// Draw a uniform value in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// Bernoulli trial: true with probability `p`.
    fn roll_bool(&mut self, p: f64) -> bool {
        self.roll() < p
    }

    /// Draw a uniform value in `[min, max)`.
    fn roll_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.roll() * (max - min)
    }
}

/// Thread-local generator, the default for production hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn roll(&mut self) -> f64 {
        rand::rng().random()
    }
}

/// Seeded generator for reproducible sampling in tests and simulations.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn roll(&mut self) -> f64 {
        self.rng.random()
    }
}

/// Scripted rolls for exact-output tests.
///
/// # Panics
///
/// Panics when the script runs out. Silent defaulting here would mask
/// non-determinism bugs (an unexpected extra draw), so exhaustion is fatal.
#[derive(Debug, Clone)]
pub struct ReplayRandom {
    rolls: VecDeque<f64>,
}

impl ReplayRandom {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Rolls remaining in the script.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ReplayRandom {
    fn roll(&mut self) -> f64 {
        self.rolls
            .pop_front()
            .expect("replay random source exhausted: a behavior drew more rolls than scripted")
    }
}
