//! Maximum-matching strategy.
//!
//! Runs in polynomial time on the compatibility graph instead of enumerating
//! orderings. The result is laid out as an ordering so the extractor handles
//! it exactly like a permutation-search result: matched pairs first, each
//! occupying one window, then everyone left over.

use crate::core::graph::CompatibilityGraph;
use crate::core::participant::Participant;
use crate::engine::config::SearchStrategy;
use crate::engine::search::{Path, SearchResult, SearchStatistics};
use crate::plog_debug;
use std::time::Instant;

pub(crate) fn matching_search(pool: &[Participant]) -> SearchResult {
    let start = Instant::now();
    let graph = CompatibilityGraph::build(pool);
    let pairs = graph.maximum_pairs();

    let mut matched = vec![false; pool.len()];
    let mut order = Vec::with_capacity(pool.len());
    for &(a, b) in &pairs {
        matched[a] = true;
        matched[b] = true;
        order.push(pool[a].clone());
        order.push(pool[b].clone());
    }
    order.extend(
        pool.iter()
            .zip(&matched)
            .filter(|&(_, &m)| !m)
            .map(|(p, _)| p.clone()),
    );

    let statistics = SearchStatistics {
        elapsed: start.elapsed(),
        nodes_visited: graph.edge_count() as u64,
        complete_orderings: 1,
        pruned: 0,
        workers: 1,
    };
    plog_debug!(
        "matching search n={} edges={} isolated={} pairs={} in {:?}",
        pool.len(),
        graph.edge_count(),
        graph.isolated().len(),
        pairs.len(),
        statistics.elapsed
    );

    SearchResult {
        path: Path::new(order, pairs.len()),
        strategy: SearchStrategy::Matching,
        statistics,
    }
}
