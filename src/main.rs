//! Run a game of Sushi Go between registered strategies.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use sushi_arena::cards::{MAX_PLAYERS, MIN_PLAYERS};
use sushi_arena::{GameConfig, StrategyRegistry, SushiGameBuilder};

#[derive(Parser)]
#[command(name = "sushi-arena")]
#[command(about = "Run a game of Sushi Go between a set of AIs")]
struct Args {
    /// Strategy for each seat, in seating order (2-5 players)
    #[arg(short, long, num_args = MIN_PLAYERS..=MAX_PLAYERS, required = true)]
    players: Vec<String>,

    /// Game seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// JSON game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<GameConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            serde_json::from_str(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(msg) => {
            error!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let registry = StrategyRegistry::with_builtins();
    let outcome = SushiGameBuilder::new(config)
        .build_from_registry(&registry, args.players.as_slice())
        .and_then(|game| game.play());

    match outcome {
        Ok(outcome) => {
            print!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, available = ?registry.names(), "game aborted");
            ExitCode::FAILURE
        }
    }
}
