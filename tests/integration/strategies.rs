//! Permutation search against maximum matching.

use std::time::{Duration, Instant};

use mockpair::engine::{run_rng, EngineConfig, SearchStrategy};
use mockpair::{compute_daily_pairing_async, compute_daily_pairing_with, Error, Participant};

use crate::fixtures::{participant, random_pool, seeded_rng, Easy, Hard};

#[test]
fn test_strategies_agree_on_pair_count() {
    let mut rng = seeded_rng(31);
    for n in [4, 6, 8, 9] {
        let pool = random_pool(&mut rng, n);
        let permutation = EngineConfig::default().with_strategy(SearchStrategy::Permutation);
        let matching = EngineConfig::default().with_strategy(SearchStrategy::Matching);

        let a = compute_daily_pairing_with(&pool, &mut run_rng(Some(1)), &permutation).unwrap();
        let b = compute_daily_pairing_with(&pool, &mut run_rng(Some(1)), &matching).unwrap();
        assert_eq!(a.pair_count(), b.pair_count(), "pool size {}", n);
        assert_eq!(a.strategy, SearchStrategy::Permutation);
        assert_eq!(b.strategy, SearchStrategy::Matching);
    }
}

#[test]
fn test_auto_switches_to_matching_for_large_pools() {
    let mut rng = seeded_rng(8);
    let pool = random_pool(&mut rng, 40);
    let config = EngineConfig::default().with_strategy(SearchStrategy::Auto);
    let partition = compute_daily_pairing_with(&pool, &mut rng, &config).unwrap();
    assert_eq!(partition.strategy, SearchStrategy::Matching);
    assert_eq!(partition.len(), 40);
}

#[tokio::test]
async fn test_async_run_with_timeout_completes() {
    let mut rng = seeded_rng(12);
    let pool = random_pool(&mut rng, 8);
    let config = EngineConfig::default()
        .with_seed(4)
        .with_timeout(Duration::from_secs(30));
    let partition = compute_daily_pairing_async(pool, config).await.unwrap();
    assert_eq!(partition.len(), 8);
}

/// Two groups of seven with no compatible pair across them.
fn slow_pool() -> Vec<Participant> {
    (0..7)
        .map(|i| participant(&format!("H{}", i), Hard, &[Hard]))
        .chain((0..7).map(|i| participant(&format!("E{}", i), Easy, &[Easy])))
        .collect()
}

#[test]
fn test_timed_out_run_releases_runtime() {
    let config = EngineConfig::default()
        .with_strategy(SearchStrategy::Permutation)
        .with_workers(2)
        .with_seed(1)
        .with_timeout(Duration::from_millis(200));

    let start = Instant::now();
    let rt = tokio::runtime::Runtime::new().unwrap();
    let result = rt.block_on(compute_daily_pairing_async(slow_pool(), config));
    // Dropping the runtime waits for the blocking search to return.
    drop(rt);

    assert!(matches!(result, Err(Error::Timeout(_))), "{:?}", result.map(|p| p.len()));
    assert!(
        start.elapsed() < Duration::from_secs(5),
        "runtime held for {:?}",
        start.elapsed()
    );
}
