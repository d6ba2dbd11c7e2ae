//! Move records.

use crate::position::Position;
use crate::types::Marker;
use serde::{Deserialize, Serialize};

/// A marker placed at a cell index.
///
/// Kept in the engine's history once the board accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Board index (0-8).
    pub index: usize,
    /// The marker placed.
    pub marker: Marker,
}

impl Move {
    /// Creates a new move.
    pub fn new(index: usize, marker: Marker) -> Self {
        Self { index, marker }
    }

    /// Named position of this move, `None` for an off-board index.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.index)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(pos) => write!(f, "{} -> {}", self.marker, pos.label()),
            None => write!(f, "{} -> #{}", self.marker, self.index),
        }
    }
}
