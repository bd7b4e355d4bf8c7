use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mockpair::config::Config;
use mockpair::core::{eligible_pool, parse_participants};
use mockpair::engine::{compute_daily_pairing_async, EngineConfig, Partition, SearchStrategy};
use mockpair::{plog, plog_error, Result};

/// mockpair - daily 1:1 mock interview pairing
#[derive(Parser, Debug)]
#[command(name = "mockpair")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    MOCKPAIR_DEBUG=1     Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.mockpair/mockpair.log)
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Pair the participants listed in a JSON file
    Pair {
        /// JSON array of participant records
        pool: PathBuf,

        /// Shuffle seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Search strategy: permutation, matching or auto
        #[arg(long)]
        strategy: Option<SearchStrategy>,

        /// Worker threads for permutation search
        #[arg(long)]
        workers: Option<usize>,

        /// Give up waiting after this many seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Include participants that are not signed up for tomorrow
        #[arg(long)]
        all: bool,

        /// Print the partition as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    mockpair::log::init_with_debug(cli.debug);

    match cli.command {
        Command::Pair {
            pool,
            seed,
            strategy,
            workers,
            timeout,
            all,
            json,
        } => {
            let mut engine = Config::load()?.engine;
            apply_overrides(&mut engine, seed, strategy, workers, timeout);
            run_pair(pool, engine, all, json)
        }
        Command::Config => run_config(),
    }
}

fn apply_overrides(
    engine: &mut EngineConfig,
    seed: Option<u64>,
    strategy: Option<SearchStrategy>,
    workers: Option<usize>,
    timeout: Option<u64>,
) {
    if seed.is_some() {
        engine.seed = seed;
    }
    if let Some(strategy) = strategy {
        engine.strategy = strategy;
    }
    if workers.is_some() {
        engine.workers = workers;
    }
    if let Some(secs) = timeout {
        engine.timeout_ms = Some(secs.saturating_mul(1000));
    }
}

fn run_pair(path: PathBuf, engine: EngineConfig, all: bool, json: bool) -> Result<()> {
    plog!("Pair command: pool={} all={}", path.display(), all);

    let records = parse_participants(&fs::read_to_string(&path)?)?;
    let pool = if all {
        records
    } else {
        eligible_pool(&records)
    };

    if pool.is_empty() {
        plog!("No one was signed up to pair, nothing to do");
        println!("No participants signed up; no pairs today.");
        return Ok(());
    }

    let rt = tokio::runtime::Runtime::new()?;
    let outcome = rt.block_on(compute_daily_pairing_async(pool, engine));
    // A timed-out search has been told to stop; don't wait on it here.
    rt.shutdown_background();
    let partition = outcome.inspect_err(|e| plog_error!("Pairing failed: {}", e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&partition)?);
    } else {
        print_partition(&partition);
    }
    Ok(())
}

fn print_partition(partition: &Partition) {
    println!(
        "Run {} ({}): {} pairs, {} unpaired",
        partition.run_id.short(),
        partition.strategy,
        partition.pair_count(),
        partition.unpaired.len()
    );
    for (a, b) in partition.pairs() {
        println!("  {} <-> {}", a.label(), b.label());
    }
    if !partition.unpaired.is_empty() {
        println!("Not paired:");
        for participant in &partition.unpaired {
            println!("  {}", participant.label());
        }
    }
}

fn run_config() -> Result<()> {
    let config = Config::load()?;
    println!("# {}", Config::config_path()?.display());
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
