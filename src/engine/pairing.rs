//! Daily pairing entry points.
//!
//! `compute_daily_pairing` validates the pool, shuffles it, searches for the
//! best ordering and splits it into pairs. It has no side effects beyond
//! logging, and every failure comes back as an `Error` so a scheduled caller
//! can skip the day instead of crashing.

use crate::core::participant::{Participant, ParticipantId};
use crate::engine::config::{EngineConfig, SearchStrategy};
use crate::engine::extract::extract_pairs;
use crate::engine::search::{find_best_path_until, SearchStatistics, StopSignal};
use crate::engine::shuffle::{run_rng, shuffle};
use crate::error::{Error, Result};
use crate::util::run_blocking;
use crate::{plog, plog_debug, plog_warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Identifier of one pairing computation, for correlating log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First 8 characters of the UUID.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One direction of a pair: `interviewer` prepares a question for `interviewee`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session<'a> {
    pub interviewer: &'a Participant,
    pub interviewee: &'a Participant,
}

/// Final split of a pool.
#[derive(Debug, Clone, Serialize)]
pub struct Partition {
    pub run_id: RunId,
    pub strategy: SearchStrategy,
    /// Even length; `paired[2k]` and `paired[2k + 1]` are partners.
    pub paired: Vec<Participant>,
    pub unpaired: Vec<Participant>,
    #[serde(skip)]
    pub statistics: SearchStatistics,
}

impl Partition {
    pub fn pair_count(&self) -> usize {
        self.paired.len() / 2
    }

    pub fn len(&self) -> usize {
        self.paired.len() + self.unpaired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Partners in window order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Participant, &Participant)> + '_ {
        self.paired.chunks_exact(2).map(|w| (&w[0], &w[1]))
    }

    /// Interview sessions, two per pair with roles swapped.
    ///
    /// `paired[i]` interviews `paired[i + 1]` when `i` is even and
    /// `paired[i - 1]` when `i` is odd.
    pub fn sessions(&self) -> Vec<Session<'_>> {
        self.paired
            .iter()
            .enumerate()
            .map(|(i, interviewer)| {
                let partner = if i % 2 == 0 { i + 1 } else { i - 1 };
                Session {
                    interviewer,
                    interviewee: &self.paired[partner],
                }
            })
            .collect()
    }
}

fn validate_pool(pool: &[Participant]) -> Result<()> {
    if pool.is_empty() {
        return Err(Error::EmptyPool);
    }
    let mut seen: HashSet<&ParticipantId> = HashSet::with_capacity(pool.len());
    for participant in pool {
        if !seen.insert(&participant.id) {
            return Err(Error::DuplicateParticipant(participant.id.to_string()));
        }
    }
    Ok(())
}

/// Pair today's pool with default settings and a fresh random order.
pub fn compute_daily_pairing(pool: &[Participant]) -> Result<Partition> {
    let config = EngineConfig::default();
    compute_daily_pairing_with(pool, &mut run_rng(None), &config)
}

/// Pair `pool` using an explicit random source and engine settings.
///
/// `config.seed` is ignored here; the caller owns `rng`.
pub fn compute_daily_pairing_with<R: Rng + ?Sized>(
    pool: &[Participant],
    rng: &mut R,
    config: &EngineConfig,
) -> Result<Partition> {
    pair_until(pool, rng, config, &StopSignal::new())
}

fn pair_until<R: Rng + ?Sized>(
    pool: &[Participant],
    rng: &mut R,
    config: &EngineConfig,
    stop: &StopSignal,
) -> Result<Partition> {
    validate_pool(pool)?;
    let run_id = RunId::new();
    plog!(
        "pairing run {} started: {} participants, strategy={}",
        run_id.short(),
        pool.len(),
        config.strategy
    );

    let mut shuffled = pool.to_vec();
    shuffle(&mut shuffled, rng);
    plog_debug!(
        "run {} shuffled order: {:?}",
        run_id.short(),
        shuffled.iter().map(|p| p.id.as_str()).collect::<Vec<_>>()
    );

    let result = find_best_path_until(&shuffled, config, stop)?;
    let (paired, unpaired) = extract_pairs(&result.path)?;

    let partition = Partition {
        run_id,
        strategy: result.strategy,
        paired,
        unpaired,
        statistics: result.statistics,
    };

    plog!(
        "pairing run {} finished: {} pairs, {} unpaired ({})",
        run_id.short(),
        partition.pair_count(),
        partition.unpaired.len(),
        partition.strategy
    );
    for participant in &partition.unpaired {
        plog_debug!("run {}: {} was not paired", run_id.short(), participant.label());
    }

    Ok(partition)
}

/// Async wrapper that runs the computation on the blocking pool.
///
/// Uses `config.seed` for the shuffle when set. When `config.timeout()`
/// elapses the search is told to stop and `Error::Timeout` is returned; the
/// blocking worker unwinds shortly after instead of running to completion.
pub async fn compute_daily_pairing_async(
    pool: Vec<Participant>,
    config: EngineConfig,
) -> Result<Partition> {
    let limit = config.timeout();
    let stop = StopSignal::new();
    let worker_stop = stop.clone();
    let result = run_blocking(limit, move || {
        let mut rng = run_rng(config.seed);
        pair_until(&pool, &mut rng, &config, &worker_stop)
    })
    .await;

    if let Err(Error::Timeout(d)) = &result {
        stop.stop();
        plog_warn!("pairing run abandoned after {:?}, search stopped", d);
    }
    result
}
