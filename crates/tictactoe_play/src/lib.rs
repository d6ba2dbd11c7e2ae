//! Terminal front end for the tic-tac-toe engine.
//!
//! - **cli**: command-line flags
//! - **config**: TOML configuration with flag overrides
//! - **terminal**: the line-oriented play loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod terminal;

pub use cli::{Cli, Command, PlayArgs};
pub use config::{ConfigError, OpponentKind, PlayConfig};
pub use terminal::Terminal;
