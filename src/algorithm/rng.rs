//! Seeded draw sources for part selection
//!
//! Callers reduce each draw modulo a small bound to pick an index, so only
//! the low-order distribution of the draws matters.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{DEFAULT_SEED, SINE_AMPLITUDE};

/// Source of non-negative integer draws
pub trait RandomSource {
    /// Produce the next draw and advance the state
    fn next_draw(&mut self) -> u64;

    /// Draw an index in `0..bound`
    ///
    /// Returns `None` without consuming a draw when `bound` is zero.
    fn pick_index(&mut self, bound: usize) -> Option<usize> {
        if bound == 0 {
            return None;
        }
        Some((self.next_draw() % bound as u64) as usize)
    }
}

/// Sine-hash generator: `floor(|sin(seed) * 10000|)`, then `seed += 1`
///
/// Low quality but fully reproducible, which is what replaying a walk needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SineRng {
    seed: i64,
}

impl SineRng {
    /// Create a generator starting at `seed`
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// Seed that the next draw will use
    pub const fn seed(&self) -> i64 {
        self.seed
    }
}

impl Default for SineRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for SineRng {
    fn next_draw(&mut self) -> u64 {
        let value = ((self.seed as f64).sin() * SINE_AMPLITUDE).abs().floor();
        self.seed = self.seed.wrapping_add(1);
        value as u64
    }
}

/// Draws backed by the standard seeded generator
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// Create a deterministic source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn next_draw(&mut self) -> u64 {
        self.rng.random::<u64>()
    }

    fn pick_index(&mut self, bound: usize) -> Option<usize> {
        (bound > 0).then(|| self.rng.random_range(0..bound))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_draw(&mut self) -> u64 {
        (**self).next_draw()
    }

    fn pick_index(&mut self, bound: usize) -> Option<usize> {
        (**self).pick_index(bound)
    }
}
