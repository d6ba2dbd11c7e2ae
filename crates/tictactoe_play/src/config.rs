//! Game configuration for the terminal front end.

use crate::cli::PlayArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{Difficulty, Marker, Opponent};
use tracing::{debug, info, instrument};

/// Who sits in the second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    /// Another person at the same keyboard.
    Human,
    /// The engine's computer player.
    #[default]
    Computer,
}

/// Settings for one session of play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// First player's name.
    #[serde(default = "default_name")]
    name: String,

    /// First player's marker. The second seat gets the other one.
    #[serde(default = "default_marker")]
    marker: Marker,

    /// Human or computer opponent.
    #[serde(default)]
    opponent: OpponentKind,

    /// Second player's name when the opponent is human.
    #[serde(default = "default_second_name")]
    second_name: String,

    /// Computer strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// Seed for the easy computer's random choices.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_name() -> String {
    "Player 1".to_string()
}

fn default_second_name() -> String {
    "Player 2".to_string()
}

fn default_marker() -> Marker {
    Marker::X
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            marker: default_marker(),
            opponent: OpponentKind::default(),
            second_name: default_second_name(),
            difficulty: Difficulty::default(),
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player = %config.name, opponent = ?config.opponent, "Config loaded successfully");
        Ok(config)
    }

    /// Builds the effective configuration: the file named by `--config` (or
    /// defaults), then any flags given on the command line.
    #[instrument(skip(args))]
    pub fn resolve(args: &PlayArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(name) = &args.name {
            config.name = name.clone();
        }
        if let Some(marker) = args.marker {
            config.marker = marker;
        }
        if let Some(opponent) = args.opponent {
            config.opponent = opponent;
        }
        if let Some(second_name) = &args.second_name {
            config.second_name = second_name.clone();
        }
        if let Some(difficulty) = args.difficulty {
            config.difficulty = difficulty;
        }
        if args.seed.is_some() {
            config.seed = args.seed;
        }

        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// The second seat as the engine expects it.
    pub fn to_opponent(&self) -> Opponent {
        match self.opponent {
            OpponentKind::Human => Opponent::Human {
                name: self.second_name.clone(),
            },
            OpponentKind::Computer => Opponent::computer_against(self.marker, self.difficulty),
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
