//! Randomized pool ordering.
//!
//! The search keeps the first best ordering it finds, so without a shuffle
//! the same people would win the front slots every day.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Shuffle `pool` in place with a uniform random permutation.
pub fn shuffle<T, R: Rng + ?Sized>(pool: &mut [T], rng: &mut R) {
    pool.shuffle(rng);
}

/// Random source for a run: seeded when a seed is given, entropy otherwise.
pub fn run_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
