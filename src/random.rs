//! Explicit random sources.
//!
//! Every stochastic operation in this crate takes `&mut R: Rng` as an
//! argument. There is no process-wide generator: a run owns exactly one
//! RNG, created here from its seed, and threads it through initialization,
//! selection, crossover, and mutation in a fixed order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a seeded RNG.
///
/// The same seed always yields the same stream on the same platform and
/// `rand` version.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shuffles a slice in place (Fisher-Yates, every ordering equally likely).
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
