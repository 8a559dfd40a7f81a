//! Random number sources for the simulation
//!
//! Gameplay randomness (spawn positions, velocities, fragment jitter) flows
//! through [`RandomSource`] so tests can substitute a fixed sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Upper bound on rejection draws before falling back to the range edge
const MAX_REJECTIONS: u32 = 1000;

/// A source of uniform draws in [0, 1)
pub trait RandomSource {
    /// Next uniform value in [0, 1)
    fn next_unit(&mut self) -> f32;

    /// Uniform value in [min, max)
    fn between(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_unit() * (max - min)
    }

    /// Uniform value in [min, max) that does not fall strictly inside
    /// (ex_min, ex_max). Rejected draws are resampled, never clamped.
    fn between_excluding(&mut self, min: f32, max: f32, ex_min: f32, ex_max: f32) -> f32 {
        let excluded = |v: f32| v > ex_min && v < ex_max;

        // Window swallows the whole range, nothing to sample
        if ex_min < min && ex_max >= max {
            return fallback_edge(min, max, ex_min, ex_max);
        }

        for _ in 0..MAX_REJECTIONS {
            let value = self.between(min, max);
            if !excluded(value) {
                return value;
            }
        }
        log::warn!(
            "between_excluding: gave up after {} draws in [{}, {}) excluding ({}, {})",
            MAX_REJECTIONS,
            min,
            max,
            ex_min,
            ex_max
        );
        fallback_edge(min, max, ex_min, ex_max)
    }
}

/// Range edge farthest from the exclusion window centre
fn fallback_edge(min: f32, max: f32, ex_min: f32, ex_max: f32) -> f32 {
    let center = (ex_min + ex_max) * 0.5;
    if (center - min).abs() >= (max - center).abs() {
        min
    } else {
        max
    }
}

/// Production RNG: PCG32, entropy-seeded unless a seed is given
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: Pcg32,
}

impl GameRng {
    /// Seed from the thread-local entropy source
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible stream for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for GameRng {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed list of unit values, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        debug_assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
        Self { values, cursor: 0 }
    }

    /// Always returns the same value
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn next_unit(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
