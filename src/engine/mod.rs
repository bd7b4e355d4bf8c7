//! The pairing engine.
//!
//! Pool → shuffle → best-ordering search → pair extraction. Two search
//! strategies are available:
//! - Permutation: parallel backtracking over orderings (default)
//! - Matching: maximum matching on the compatibility graph, for larger pools

pub mod config;
pub mod extract;
mod matching;
pub mod pairing;
pub mod search;
pub mod shuffle;

pub use config::{EngineConfig, SearchStrategy};
pub use extract::extract_pairs;
pub use pairing::{
    compute_daily_pairing, compute_daily_pairing_async, compute_daily_pairing_with, Partition,
    RunId, Session,
};
pub use search::{
    find_best_path, find_best_path_until, Path, SearchResult, SearchStatistics, StopSignal,
};
pub use shuffle::{run_rng, shuffle};
