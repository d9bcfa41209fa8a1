//! Deterministic RNG wrapper used by hosts to pick random endpoints.
//!
//! The same seed always yields the same endpoint sequence, which keeps
//! scenario tests reproducible.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seeded `SmallRng` wrapper.
///
/// Owned by the host; the agent itself never draws random numbers.
pub struct EmpireRng(SmallRng);

impl EmpireRng {
    pub fn new(seed: u64) -> Self {
        EmpireRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.  `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
