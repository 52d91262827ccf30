use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;

/// Source of uniform draws in `[0, 1)` used by the match simulator.
pub trait RandomSource {
    fn next_float(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_float() * len as f64) as usize;
        index.min(len - 1)
    }

    /// Uniform integer in `min..=max`.
    fn next_range(&mut self, min: u32, max: u32) -> u32 {
        let span = (max - min + 1) as usize;
        min + self.next_index(span) as u32
    }
}

/// Thread-local generator, not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_float(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_float(&mut self) -> f64 {
        StandardUniform.sample(&mut self.rng)
    }
}
