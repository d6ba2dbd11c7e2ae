//! Command-line interface for the tic-tac-toe terminal.

use crate::config::OpponentKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{Difficulty, Marker};

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend or an unbeatable computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in this terminal
    Play(PlayArgs),

    /// Print the effective configuration as TOML and exit
    ShowConfig(PlayArgs),
}

/// Settings shared by every command. Flags override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First player's name
    #[arg(short, long)]
    pub name: Option<String>,

    /// First player's marker (X or O)
    #[arg(short, long)]
    pub marker: Option<Marker>,

    /// Who plays the second seat
    #[arg(short, long, value_enum)]
    pub opponent: Option<OpponentKind>,

    /// Second player's name (human opponent only)
    #[arg(long)]
    pub second_name: Option<String>,

    /// Computer strength: easy (random) or hard (minimax)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the easy computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print engine events as JSON lines instead of messages
    #[arg(long)]
    pub json_events: bool,
}
