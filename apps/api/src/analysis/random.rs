//! Random sources for fallback synthesis and score jitter.
//!
//! Every analysis owns exactly one source. Seed it to make the whole pipeline reproducible, or
//! use `FixedRandom` to pin every draw in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource: Send {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform integer in `min..=max`.
    fn int_in(&mut self, min: i32, max: i32) -> i32;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

/// Picks one element of a non-empty candidate table.
pub fn choose<'a>(rng: &mut dyn RandomSource, candidates: &[&'a str]) -> &'a str {
    candidates[rng.index(candidates.len())]
}

/// `StdRng`-backed source, seeded explicitly or from OS entropy.
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn int_in(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Returns the same configured draw every time. Out-of-range values are clamped.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom {
    pub index: usize,
    pub int: i32,
    pub unit: f64,
}

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn index(&mut self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    fn int_in(&mut self, min: i32, max: i32) -> i32 {
        self.int.clamp(min, max)
    }

    fn unit(&mut self) -> f64 {
        self.unit.clamp(0.0, 0.999_999)
    }
}
