//! Merchant Gym - Main binary
//!
//! Evaluates buying strategies in a simulated single-item market and
//! prints a tab-separated table of cross-seed average balances, one row
//! per day, one column per strategy.
//!
//! The table goes to stdout; the banner and all logging go to stderr, so
//! the report can be piped or redirected cleanly.

mod config;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sim_core::SimError;
use simulation::{
    RunConfig, Simulation, evaluate_learning, evaluate_no_learning, read_instances, write_table,
};
use types::MarketOdds;

pub use config::{Mode, MarketPreset, learning_roster, no_learning_roster};

/// Merchant Gym - strategy evaluation in a single-item market
#[derive(Parser, Debug)]
#[command(name = "merchant-gym")]
#[command(about = "Evaluate buying strategies in a simulated product market")]
#[command(version)]
struct Args {
    /// Evaluation harness to run
    #[arg(long, value_enum, default_value_t = Mode::NoLearning, env = "GYM_MODE")]
    mode: Mode,

    /// Labeled product data file (required in learning mode)
    #[arg(long, env = "GYM_DATA", required_if_eq("mode", "learning"))]
    data: Option<PathBuf>,

    /// Market quality preset
    #[arg(long, value_enum, default_value_t = MarketPreset::Favorable, env = "GYM_MARKET")]
    market: MarketPreset,

    /// Custom Beta alpha shape (use together with --beta)
    #[arg(long, requires = "beta")]
    alpha: Option<f64>,

    /// Custom Beta beta shape (use together with --alpha)
    #[arg(long, requires = "alpha")]
    beta: Option<f64>,

    /// Days per run (no-learning mode)
    #[arg(long, env = "GYM_DAYS")]
    days: Option<usize>,

    /// Starting balance for every run
    #[arg(long)]
    initial_balance: Option<f64>,

    /// Daily deposit from outside the market
    #[arg(long)]
    stipend: Option<f64>,

    /// Override the product value cap
    #[arg(long)]
    value_cap: Option<f64>,

    /// Seeds, one trial per seed (learning mode folds the pool per seed)
    #[arg(long, value_delimiter = ',', default_value = "0,1,2,3,4,5,6,7,8")]
    seeds: Vec<u64>,

    /// Seed for shuffling the instance pool (learning mode)
    #[arg(long, default_value_t = 0, env = "GYM_SHUFFLE_SEED")]
    shuffle_seed: u64,

    /// Emit the per-day trace
    #[arg(long, env = "GYM_DEBUG")]
    debug: bool,
}

impl Args {
    /// Resolve the market odds: a custom (alpha, beta) pair wins over the
    /// preset.
    fn odds(&self) -> MarketOdds {
        match (self.alpha, self.beta) {
            (Some(alpha), Some(beta)) => MarketOdds::new(alpha, beta),
            _ => self.market.odds(),
        }
    }

    /// Assemble the run configuration from the mode defaults plus
    /// overrides.
    fn run_config(&self) -> RunConfig {
        let mut config = match self.mode {
            Mode::NoLearning => RunConfig::new(self.odds()),
            Mode::Learning => RunConfig::for_learning(self.odds()),
        }
        .with_verbose(self.debug);

        if let Some(days) = self.days {
            config = config.with_num_days(days);
        }
        if let Some(balance) = self.initial_balance {
            config = config.with_initial_balance(balance);
        }
        if let Some(stipend) = self.stipend {
            config = config.with_daily_stipend(stipend);
        }
        if let Some(cap) = self.value_cap {
            config = config.with_value_cap(cap);
        }
        config
    }
}

/// Top-level failures surfaced to the user.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Engine-level failure (configuration or input).
    #[error("simulation failed: {0}")]
    Engine(#[from] SimError),

    /// File or stream failure.
    #[error("i/o failed: {0}")]
    Io(#[from] io::Error),

    /// Learning mode without a data file (normally caught by clap).
    #[error("learning mode needs --data")]
    MissingData,
}

/// Print the run summary to stderr, leaving stdout to the report.
fn banner(args: &Args, config: &RunConfig) {
    eprintln!("── merchant-gym ────────────────────────────────");
    eprintln!("  mode:    {}", args.mode.label());
    eprintln!("  market:  {}", config.odds);
    eprintln!(
        "  balance: {}  stipend: {}  value cap: {}",
        config.initial_balance, config.daily_stipend, config.value_cap
    );
    match args.mode {
        Mode::NoLearning => eprintln!(
            "  days:    {}  seeds: {:?}",
            config.num_days, args.seeds
        ),
        Mode::Learning => eprintln!("  folds:   {} (one per seed)", args.seeds.len()),
    }
    eprintln!("────────────────────────────────────────────────");
}

fn run(args: Args) -> Result<(), CliError> {
    let config = args.run_config();
    banner(&args, &config);

    let sim = Simulation::new(config)?;
    let report = match args.mode {
        Mode::NoLearning => evaluate_no_learning(&sim, &args.seeds, no_learning_roster)?,
        Mode::Learning => {
            let path = args.data.as_ref().ok_or(CliError::MissingData)?;
            let file = File::open(path)?;
            let mut pool = read_instances(BufReader::new(file))?;
            info!(instances = pool.len(), "loaded labeled pool");

            pool.shuffle(&mut StdRng::seed_from_u64(args.shuffle_seed));
            evaluate_learning(&sim, &pool, &args.seeds, learning_roster)?
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&report, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
