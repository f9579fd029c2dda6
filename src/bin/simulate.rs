//! Simulate Binary
//!
//! Runs one game and prints the full result, or a batch of games and prints
//! the summary. Output is JSON on stdout; logs go to stderr (`RUST_LOG`).

use clap::Parser;
use property_sim::{GameConfig, LogObserver, Runner, SimulationSummary};

#[derive(Parser)]
#[command(author, version, about = "Simulate property-trading games", long_about = None)]
struct Args {
    /// Number of games to play.
    #[arg(short, long, default_value_t = 1)]
    games: usize,

    /// Starting balance for every player.
    #[arg(long, default_value_t = property_sim::core::INITIAL_BALANCE)]
    initial_balance: i64,

    /// Turn cap per game.
    #[arg(long, default_value_t = property_sim::core::MAX_TURNS)]
    max_turns: u32,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Run batches on all cores.
    #[cfg(feature = "parallel")]
    #[arg(long)]
    parallel: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GameConfig::new()
        .with_initial_balance(args.initial_balance)
        .with_max_turns(args.max_turns);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let json = if args.games == 1 {
        let result = Runner::with_observer(config, LogObserver)?.run()?;
        serde_json::to_string_pretty(&result)?
    } else {
        let summary = batch(&args, &config)?;
        log::info!(
            "{} games, {} timeouts, {:.2} turns on average",
            summary.total_simulations,
            summary.timeout_count,
            summary.average_turns
        );
        serde_json::to_string_pretty(&summary)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(feature = "parallel")]
fn batch(args: &Args, config: &GameConfig) -> Result<SimulationSummary, property_sim::GameError> {
    if args.parallel {
        SimulationSummary::run_parallel(args.games, config)
    } else {
        SimulationSummary::run(args.games, config)
    }
}

#[cfg(not(feature = "parallel"))]
fn batch(args: &Args, config: &GameConfig) -> Result<SimulationSummary, property_sim::GameError> {
    SimulationSummary::run(args.games, config)
}
