//! Play tic-tac-toe against the computer in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_bot::config::GameConfig;
use tictactoe_bot::console;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Play tic-tac-toe against the computer", long_about = None)]
struct Cli {
    /// Difficulty level (easy, medium, hard). Asked interactively when omitted.
    #[arg(short, long, env = "TICTACTOE_DIFFICULTY")]
    difficulty: Option<String>,

    /// Seed for the random generator used by the easy and medium levels
    #[arg(short, long, env = "TICTACTOE_SEED")]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            difficulty: self.difficulty.clone(),
            seed: self.seed,
        }
    }
}

/// Log level used when `RUST_LOG` is not set.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    console::run(&cli.config(), &mut input, &mut output).context("game aborted")?;
    Ok(())
}
