use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;
use taboo_autoplay::{run_batch, write_json, AutoplayConfig, BatchSummary};
use taboo_core::{EventBus, Game, RngState, SessionConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod command;
mod shell;
mod view;

use shell::Shell;

#[derive(Debug, Parser)]
#[command(name = "taboo", about = "Play Taboo against the computer")]
struct Args {
    /// Seed for the shuffle; drawn from entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON session config (player names, seed).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Play N games with the scripted policy instead of opening the shell.
    #[arg(long, value_name = "N")]
    auto: Option<u32>,

    /// Stop an autoplayed game after this many turns.
    #[arg(long, default_value_t = 400)]
    max_turns: u32,

    /// Write autoplay records, with per-step traces, to this JSON file.
    #[arg(long, value_name = "PATH")]
    trace: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_session(args: &Args) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SessionConfig::from_json_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SessionConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;
    Ok(config)
}

fn run_auto(args: &Args, games: u32, session: &SessionConfig) -> Result<()> {
    let config = AutoplayConfig {
        seed: session
            .seed
            .unwrap_or_else(|| RngState::from_entropy().seed()),
        games,
        max_turns: args.max_turns,
        record_steps: args.trace.is_some(),
    };
    println!("seed: {}", config.seed);
    info!(games, seed = config.seed, "starting autoplay batch");
    let records = run_batch(&config, session)?;
    println!("{}", BatchSummary::from_records(&records).to_text_report());
    if let Some(path) = &args.trace {
        write_json(path, &records)
            .with_context(|| format!("writing trace {}", path.display()))?;
        println!("trace written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    let session = load_session(&args)?;
    if let Some(games) = args.auto {
        return run_auto(&args, games, &session);
    }
    let mut events = EventBus::default();
    let game = Game::from_config(session, &mut events);
    let mut shell = Shell::new(game, events);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout)
}
