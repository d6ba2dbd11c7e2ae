//! The 3x3 playing surface.

use crate::error::RejectReason;
use crate::types::{Marker, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order, index 0 is the top-left corner.
/// Once a cell is marked it stays marked until [`Board::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a cell array.
    pub fn from_cells(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index, `None` when off the board.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Off-board indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Places `marker` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RejectReason::OutOfRange`] for an index outside `0..9` and
    /// [`RejectReason::Occupied`] when the cell already holds a marker.
    /// The board is untouched on error.
    #[instrument(skip(self), level = "trace")]
    pub fn apply_move(&mut self, index: usize, marker: Marker) -> Result<(), RejectReason> {
        match self.squares.get_mut(index) {
            None => Err(RejectReason::OutOfRange(index)),
            Some(Square::Occupied(_)) => Err(RejectReason::Occupied(index)),
            Some(cell) => {
                *cell = Square::Occupied(marker);
                Ok(())
            }
        }
    }

    /// Clears a cell. Only the minimax scratch board undoes moves.
    pub(crate) fn clear(&mut self, index: usize) {
        if let Some(cell) = self.squares.get_mut(index) {
            *cell = Square::Empty;
        }
    }

    /// True when every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Indices of all empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Read-only snapshot of all nine cells.
    pub fn cells(&self) -> [Square; CELL_COUNT] {
        self.squares
    }

    /// Borrows the nine cells in row-major order.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Clears every cell in place.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELL_COUNT];
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(marker) => marker.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
