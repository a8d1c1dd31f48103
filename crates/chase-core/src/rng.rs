//! The simulation's single deterministic random source.
//!
//! Every random draw (initial placement, each grazing step) goes through one
//! `SimRng` owned by the engine.  Draws are strictly sequential within a
//! round, so a fixed seed reproduces a run exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded simulation-level RNG.  Not `Clone`: the stream has one consumer.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a non-empty slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
