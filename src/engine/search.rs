//! Best-ordering search.
//!
//! The permutation search enumerates orderings of the pool depth-first and
//! scores each complete ordering by the number of compatible pairs at
//! positions (0,1), (2,3), ... . Top-level branches, one per first
//! participant, are queued on a channel and drained by a bounded pool of
//! worker threads. Every worker keeps its own best ordering; the results are
//! reduced after all workers have joined. The only shared mutable state is the
//! best pair count, used as a pruning bound, and a [`StopSignal`] that lets a
//! caller abandon the search.

use crate::core::compat::is_compatible;
use crate::core::participant::Participant;
use crate::engine::config::{EngineConfig, SearchStrategy};
use crate::engine::matching::matching_search;
use crate::error::{Error, Result};
use crate::{plog_debug, plog_trace};
use crossbeam_channel::unbounded;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// An ordering of participants and the valid pairs it realizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub order: Vec<Participant>,
    pub valid_pairs: usize,
}

impl Path {
    pub fn new(order: Vec<Participant>, valid_pairs: usize) -> Self {
        Self { order, valid_pairs }
    }
}

/// Cooperative stop request shared between a caller and a running search.
///
/// Clones share the same flag. Workers check it at every node, so a stopped
/// search unwinds within one node expansion per worker.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    pub elapsed: Duration,
    /// Partial orderings expanded.
    pub nodes_visited: u64,
    /// Full-length orderings scored.
    pub complete_orderings: u64,
    /// Branches cut because they could not beat the best count.
    pub pruned: u64,
    pub workers: usize,
}

impl SearchStatistics {
    fn absorb(&mut self, other: &SearchStatistics) {
        self.nodes_visited += other.nodes_visited;
        self.complete_orderings += other.complete_orderings;
        self.pruned += other.pruned;
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub path: Path,
    /// Strategy that produced `path`, after resolving `Auto`.
    pub strategy: SearchStrategy,
    pub statistics: SearchStatistics,
}

impl SearchResult {
    /// Most pairs any ordering of `n` participants can realize.
    pub fn max_possible(n: usize) -> usize {
        n / 2
    }
}

/// Find the ordering of `pool` with the most compatible adjacent pairs.
///
/// # Errors
///
/// `Error::EmptyPool` for an empty pool, `Error::TaskJoin` if a search worker
/// panicked.
pub fn find_best_path(pool: &[Participant], config: &EngineConfig) -> Result<SearchResult> {
    find_best_path_until(pool, config, &StopSignal::new())
}

/// [`find_best_path`] that gives up once `stop` is raised.
///
/// # Errors
///
/// As [`find_best_path`], plus `Error::Cancelled` when `stop` was raised
/// before the search finished.
pub fn find_best_path_until(
    pool: &[Participant],
    config: &EngineConfig,
    stop: &StopSignal,
) -> Result<SearchResult> {
    if pool.is_empty() {
        return Err(Error::EmptyPool);
    }

    let strategy = config
        .strategy
        .resolve(pool.len(), config.max_permutation_pool);
    plog_debug!(
        "find_best_path n={} strategy={} (configured {})",
        pool.len(),
        strategy,
        config.strategy
    );

    match strategy {
        SearchStrategy::Matching => Ok(matching_search(pool)),
        _ => permutation_search(pool, config.effective_workers(), stop),
    }
}

/// Ordering of pool indices with its pair count.
#[derive(Debug, Clone)]
struct Candidate {
    order: Vec<usize>,
    valid_pairs: usize,
}

/// Per-pool state shared read-only by all workers, plus the best-count bound.
struct SearchSpace {
    n: usize,
    max_pairs: usize,
    /// `compatible[i * n + j]` caches the predicate for pool indices i, j.
    compatible: Vec<bool>,
    best_count: AtomicUsize,
    stop: StopSignal,
}

impl SearchSpace {
    fn new(pool: &[Participant], stop: &StopSignal) -> Self {
        let n = pool.len();
        let mut compatible = vec![false; n * n];
        for i in 0..n {
            for j in 0..n {
                compatible[i * n + j] = i != j && is_compatible(&pool[i], &pool[j]);
            }
        }
        Self {
            n,
            max_pairs: SearchResult::max_possible(n),
            compatible,
            best_count: AtomicUsize::new(0),
            stop: stop.clone(),
        }
    }

    fn compatible(&self, a: usize, b: usize) -> bool {
        self.compatible[a * self.n + b]
    }

    fn best(&self) -> usize {
        self.best_count.load(Ordering::Acquire)
    }

    fn is_saturated(&self) -> bool {
        self.best() == self.max_pairs
    }

    /// Nothing left to gain, or the caller gave up.
    fn should_halt(&self) -> bool {
        self.stop.is_stopped() || self.is_saturated()
    }
}

/// Depth-first state of one worker.
struct Walker<'a> {
    space: &'a SearchSpace,
    order: Vec<usize>,
    seen: Vec<bool>,
    best: Option<Candidate>,
    stats: SearchStatistics,
}

impl<'a> Walker<'a> {
    fn new(space: &'a SearchSpace) -> Self {
        Self {
            space,
            order: Vec::with_capacity(space.n),
            seen: vec![false; space.n],
            best: None,
            stats: SearchStatistics::default(),
        }
    }

    fn best_known(&self) -> usize {
        let local = self.best.as_ref().map_or(0, |c| c.valid_pairs);
        local.max(self.space.best())
    }

    /// Explore every ordering that starts with `first`.
    fn explore_from(&mut self, first: usize) {
        self.order.clear();
        self.seen.iter_mut().for_each(|s| *s = false);
        self.order.push(first);
        self.seen[first] = true;
        self.descend(0);
    }

    fn descend(&mut self, valid_pairs: usize) {
        self.stats.nodes_visited += 1;
        let space = self.space;
        let len = self.order.len();

        if space.stop.is_stopped() {
            return;
        }

        if len == space.n {
            self.stats.complete_orderings += 1;
            self.complete(valid_pairs);
            return;
        }

        // Windows not yet closed can add at most one pair each.
        let upper = valid_pairs + space.max_pairs - len / 2;
        if upper <= self.best_known() {
            self.stats.pruned += 1;
            return;
        }

        for next in 0..space.n {
            if self.seen[next] {
                continue;
            }
            if space.should_halt() {
                self.stats.pruned += 1;
                return;
            }

            let closes_pair = (len + 1) % 2 == 0;
            let gained = closes_pair && space.compatible(self.order[len - 1], next);

            self.order.push(next);
            self.seen[next] = true;
            self.descend(valid_pairs + usize::from(gained));
            self.seen[next] = false;
            self.order.pop();
        }
    }

    fn complete(&mut self, valid_pairs: usize) {
        if valid_pairs <= self.best_known() {
            return;
        }
        plog_trace!("worker improved best to {} pairs", valid_pairs);
        self.best = Some(Candidate {
            order: self.order.clone(),
            valid_pairs,
        });
        self.space.best_count.fetch_max(valid_pairs, Ordering::AcqRel);
    }
}

fn permutation_search(
    pool: &[Participant],
    workers: usize,
    stop: &StopSignal,
) -> Result<SearchResult> {
    let start = Instant::now();
    let n = pool.len();

    if n == 1 {
        return Ok(SearchResult {
            path: Path::new(pool.to_vec(), 0),
            strategy: SearchStrategy::Permutation,
            statistics: SearchStatistics {
                elapsed: start.elapsed(),
                nodes_visited: 1,
                complete_orderings: 1,
                workers: 0,
                ..Default::default()
            },
        });
    }

    let space = SearchSpace::new(pool, stop);
    let workers = workers.min(n).max(1);

    let (tx, rx) = unbounded::<usize>();
    for first in 0..n {
        // Receiver is alive until the scope below ends.
        let _ = tx.send(first);
    }
    drop(tx);

    let outcomes = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let rx = rx.clone();
                let space = &space;
                scope.spawn(move || {
                    let mut walker = Walker::new(space);
                    while let Ok(first) = rx.recv() {
                        if space.should_halt() {
                            walker.stats.pruned += 1;
                            continue;
                        }
                        walker.explore_from(first);
                    }
                    (walker.best, walker.stats)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join())
            .collect::<Vec<_>>()
    });

    let mut statistics = SearchStatistics {
        workers,
        ..Default::default()
    };
    let mut best: Option<Candidate> = None;
    for outcome in outcomes {
        let (candidate, stats) =
            outcome.map_err(|_| Error::TaskJoin("permutation search worker panicked".into()))?;
        statistics.absorb(&stats);
        if let Some(candidate) = candidate {
            if best
                .as_ref()
                .map_or(true, |b| candidate.valid_pairs > b.valid_pairs)
            {
                best = Some(candidate);
            }
        }
    }
    statistics.elapsed = start.elapsed();

    if stop.is_stopped() {
        plog_debug!(
            "permutation search n={} stopped after {} nodes in {:?}",
            n,
            statistics.nodes_visited,
            statistics.elapsed
        );
        return Err(Error::Cancelled);
    }

    // No ordering beat zero pairs: keep the input order.
    let path = match best {
        Some(candidate) => Path::new(
            candidate.order.iter().map(|&i| pool[i].clone()).collect(),
            candidate.valid_pairs,
        ),
        None => Path::new(pool.to_vec(), 0),
    };

    plog_debug!(
        "permutation search n={} pairs={} nodes={} complete={} pruned={} workers={} in {:?}",
        n,
        path.valid_pairs,
        statistics.nodes_visited,
        statistics.complete_orderings,
        statistics.pruned,
        statistics.workers,
        statistics.elapsed
    );

    Ok(SearchResult {
        path,
        strategy: SearchStrategy::Permutation,
        statistics,
    })
}
