//! Test fixtures for integration tests.
//!
//! Provides helpers for:
//! - Building participants from compact profiles
//! - Generating random pools from a seed
//! - Brute-force ground truth over all orderings

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mockpair::core::{Difficulty, PairingDifficulty, Participant};
use mockpair::is_compatible;

pub use Difficulty::{Easy, Hard, Medium};

/// Build a participant signed up for tomorrow.
pub fn participant(id: &str, experience: Difficulty, levels: &[Difficulty]) -> Participant {
    Participant::new(
        id,
        experience,
        PairingDifficulty::new(levels.iter().copied()).expect("non-empty levels"),
    )
}

/// The six profiles shared by the scenario tests.
pub fn roster() -> Vec<Participant> {
    vec![
        participant("A", Easy, &[Easy]),
        participant("B", Medium, &[Easy, Medium]),
        participant("C", Medium, &[Easy, Medium]),
        participant("D", Medium, &[Medium]),
        participant("E", Hard, &[Hard]),
        participant("F", Hard, &[Medium, Hard]),
    ]
}

/// Random pool of `n` participants with unique ids.
pub fn random_pool(rng: &mut StdRng, n: usize) -> Vec<Participant> {
    (0..n)
        .map(|i| {
            let experience = Difficulty::ALL[rng.gen_range(0..3)];
            let mut levels: Vec<Difficulty> = Difficulty::ALL
                .iter()
                .copied()
                .filter(|_| rng.gen_bool(0.5))
                .collect();
            if levels.is_empty() {
                levels.push(Difficulty::ALL[rng.gen_range(0..3)]);
            }
            participant(&format!("P{}", i), experience, &levels)
        })
        .collect()
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn score(order: &[usize], pool: &[Participant]) -> usize {
    order
        .chunks_exact(2)
        .filter(|w| is_compatible(&pool[w[0]], &pool[w[1]]))
        .count()
}

fn permute(
    pool: &[Participant],
    order: &mut Vec<usize>,
    used: &mut Vec<bool>,
    best: &mut usize,
) {
    if order.len() == pool.len() {
        *best = (*best).max(score(order, pool));
        return;
    }
    for i in 0..pool.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        order.push(i);
        permute(pool, order, used, best);
        order.pop();
        used[i] = false;
    }
}

/// Most compatible adjacent pairs over every ordering of `pool`.
pub fn brute_force_best(pool: &[Participant]) -> usize {
    let mut best = 0;
    permute(
        pool,
        &mut Vec::with_capacity(pool.len()),
        &mut vec![false; pool.len()],
        &mut best,
    );
    best
}

/// Sorted ids, for comparing partitions regardless of order.
pub fn sorted_ids(list: &[Participant]) -> Vec<String> {
    let mut ids: Vec<String> = list.iter().map(|p| p.id.to_string()).collect();
    ids.sort();
    ids
}
