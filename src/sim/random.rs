//! Injectable randomness
//!
//! Every random draw in the simulation (spawn lane, walking speed, spawn
//! jitter, launch angle, spark direction) goes through [`RandomSource`], so a
//! seeded PCG stream gives reproducible runs and tests can script exact values.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;

    /// Uniform sample in `[lo, hi)`
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_unit() * (hi - lo)
    }
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded PCG stream used by default
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed sequence of unit samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Values are clamped into `[0, 1)`; an empty script always yields 0
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// A source that always returns the same value
    pub fn constant(value: f32) -> Self {
        Self::new([value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_streams_repeat() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..16 {
            let x = a.next_unit();
            assert_eq!(x, b.next_unit());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRandom::new([0.1, 0.5]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.5);
        assert_eq!(rng.next_unit(), 0.1);
    }

    #[test]
    fn test_range() {
        let mut rng = ScriptedRandom::constant(0.5);
        assert!((rng.range(0.8, 1.5) - 1.15).abs() < 1e-6);
    }
}
