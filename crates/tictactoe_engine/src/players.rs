//! Player records and opponent selection.

use crate::types::Marker;
use serde::{Deserialize, Serialize};

/// How strong the computer plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Easy,
    /// Full minimax search. Never loses.
    Hard,
}

/// Who controls a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves arrive from the presentation layer.
    Human,
    /// Moves are chosen by the engine.
    Computer(Difficulty),
}

/// A participant in one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    marker: Marker,
    kind: PlayerKind,
}

impl Player {
    /// Creates a human player.
    pub fn human(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
            kind: PlayerKind::Human,
        }
    }

    /// Creates a computer player.
    pub fn computer(name: impl Into<String>, marker: Marker, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            marker,
            kind: PlayerKind::Computer(difficulty),
        }
    }

    /// Player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marker this player places.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Human or computer.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Difficulty for computer players, `None` for humans.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self.kind {
            PlayerKind::Human => None,
            PlayerKind::Computer(difficulty) => Some(difficulty),
        }
    }

    /// True when the engine picks this player's moves.
    pub fn is_computer(&self) -> bool {
        matches!(self.kind, PlayerKind::Computer(_))
    }
}

/// The second seat, chosen at setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    /// Another human, who plays the other marker.
    Human {
        /// Second player's name.
        name: String,
    },
    /// The computer, with its own marker and strength.
    Computer {
        /// Marker the computer places. Must differ from the human's.
        marker: Marker,
        /// Strategy selector.
        difficulty: Difficulty,
    },
}

impl Opponent {
    /// A computer opponent that takes the marker the human did not pick.
    pub fn computer_against(human: Marker, difficulty: Difficulty) -> Self {
        Opponent::Computer {
            marker: human.opponent(),
            difficulty,
        }
    }
}

/// Name given to computer-controlled players.
pub const COMPUTER_NAME: &str = "Computer";
