//! Partition invariants over randomly generated pools.

use std::collections::HashSet;

use mockpair::engine::{run_rng, EngineConfig, Partition, SearchStrategy};
use mockpair::{compute_daily_pairing_with, is_compatible, Participant};

use crate::fixtures::{brute_force_best, random_pool, seeded_rng};

fn check_invariants(pool: &[Participant], partition: &Partition) {
    assert_eq!(partition.len(), pool.len());
    assert_eq!(partition.paired.len() % 2, 0);

    let mut seen = HashSet::new();
    for p in partition.paired.iter().chain(&partition.unpaired) {
        assert!(seen.insert(p.id.clone()), "{} appears twice", p.id);
    }
    assert!(pool.iter().all(|p| seen.contains(&p.id)));

    for (a, b) in partition.pairs() {
        assert!(is_compatible(a, b), "{} and {} are not compatible", a.id, b.id);
    }
}

#[test]
fn test_invariants_hold_for_random_pools() {
    let mut rng = seeded_rng(2024);
    for n in 1..=9 {
        for _ in 0..10 {
            let pool = random_pool(&mut rng, n);
            let config = EngineConfig::default().with_workers(1 + n % 3);
            let partition = compute_daily_pairing_with(&pool, &mut rng, &config).unwrap();
            check_invariants(&pool, &partition);
        }
    }
}

#[test]
fn test_permutation_search_is_maximal() {
    let mut rng = seeded_rng(17);
    for n in 2..=6 {
        for _ in 0..25 {
            let pool = random_pool(&mut rng, n);
            let want = brute_force_best(&pool);
            let config = EngineConfig::default().with_workers(2);
            let partition = compute_daily_pairing_with(&pool, &mut rng, &config).unwrap();
            assert_eq!(
                partition.pair_count(),
                want,
                "pool of {} ids {:?}",
                n,
                pool.iter().map(|p| p.id.as_str()).collect::<Vec<_>>()
            );
        }
    }
}

#[test]
fn test_matching_strategy_is_maximal() {
    let mut rng = seeded_rng(99);
    let config = EngineConfig::default().with_strategy(SearchStrategy::Matching);
    for n in 2..=6 {
        for _ in 0..25 {
            let pool = random_pool(&mut rng, n);
            let partition = compute_daily_pairing_with(&pool, &mut rng, &config).unwrap();
            check_invariants(&pool, &partition);
            assert_eq!(partition.pair_count(), brute_force_best(&pool));
        }
    }
}

#[test]
fn test_worker_count_does_not_change_pair_count() {
    let mut rng = seeded_rng(5);
    for _ in 0..10 {
        let pool = random_pool(&mut rng, 7);
        let counts: Vec<usize> = [1, 2, 4, 8]
            .iter()
            .map(|&workers| {
                let config = EngineConfig::default().with_workers(workers);
                compute_daily_pairing_with(&pool, &mut run_rng(Some(1)), &config)
                    .unwrap()
                    .pair_count()
            })
            .collect();
        assert!(counts.windows(2).all(|w| w[0] == w[1]), "{:?}", counts);
    }
}
