//! Engine tuning: search strategy, worker count, seed and timeout.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pool size up to which `Auto` still uses permutation search.
pub const DEFAULT_MAX_PERMUTATION_POOL: usize = 12;

/// How the best ordering is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Parallel backtracking over orderings, scoring adjacent even/odd pairs.
    #[default]
    Permutation,
    /// Maximum-cardinality matching on the compatibility graph.
    Matching,
    /// Permutation search for small pools, matching above the threshold.
    Auto,
}

impl SearchStrategy {
    /// Resolve `Auto` against a concrete pool size.
    pub fn resolve(self, pool_size: usize, max_permutation_pool: usize) -> SearchStrategy {
        match self {
            SearchStrategy::Auto if pool_size <= max_permutation_pool => {
                SearchStrategy::Permutation
            }
            SearchStrategy::Auto => SearchStrategy::Matching,
            other => other,
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Permutation => write!(f, "permutation"),
            SearchStrategy::Matching => write!(f, "matching"),
            SearchStrategy::Auto => write!(f, "auto"),
        }
    }
}

impl std::str::FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "permutation" => Ok(SearchStrategy::Permutation),
            "matching" => Ok(SearchStrategy::Matching),
            "auto" => Ok(SearchStrategy::Auto),
            other => Err(format!("unknown search strategy '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub strategy: SearchStrategy,
    /// Worker threads for permutation search. `None` uses available parallelism.
    pub workers: Option<usize>,
    pub max_permutation_pool: usize,
    /// Fixed shuffle seed for reproducible runs.
    pub seed: Option<u64>,
    /// Limit for the async entry point, in milliseconds.
    pub timeout_ms: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            workers: None,
            max_permutation_pool: DEFAULT_MAX_PERMUTATION_POOL,
            seed: None,
            timeout_ms: None,
        }
    }
}

impl EngineConfig {
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Worker count actually used, never zero.
    pub fn effective_workers(&self) -> usize {
        self.workers
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
