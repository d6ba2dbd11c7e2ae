//! Tic-tac-toe terminal binary.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_play::{Cli, Command, PlayArgs, PlayConfig, Terminal};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play(args) => run_play(args),
        Command::ShowConfig(args) => show_config(args),
    }
}

/// Play in this terminal until the player quits.
#[instrument(skip(args))]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = PlayConfig::resolve(&args).context("Failed to load configuration")?;
    info!(player = %config.name(), opponent = ?config.opponent(), "Starting game");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut terminal = Terminal::new(config, args.json_events, stdin, stdout);
    terminal.run()
}

/// Print the effective configuration.
fn show_config(args: PlayArgs) -> Result<()> {
    let config = PlayConfig::resolve(&args).context("Failed to load configuration")?;
    print!("{}", config.to_toml()?);
    Ok(())
}
