//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates state, so the
//! minimax search can call them on its scratch board freely.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::board::Board;
use crate::types::Marker;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// No line is complete and at least one cell is empty.
    Undecided,
    /// A marker owns a full line.
    Win(Marker),
    /// Every cell is filled and nobody owns a line.
    Tie,
}

impl Evaluation {
    /// True for a win or a tie.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Evaluation::Undecided)
    }
}

/// Evaluates boards for a win or a tie.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinDetector;

impl WinDetector {
    /// Evaluates the board. A win takes precedence over a full board.
    #[instrument(skip(board), level = "trace")]
    pub fn evaluate(board: &Board) -> Evaluation {
        if let Some(marker) = check_winner(board) {
            Evaluation::Win(marker)
        } else if board.is_full() {
            Evaluation::Tie
        } else {
            Evaluation::Undecided
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn board_from(cells: [&str; 9]) -> Board {
        let mut squares = [Square::Empty; 9];
        for (i, c) in cells.iter().enumerate() {
            squares[i] = match *c {
                "X" => Square::Occupied(Marker::X),
                "O" => Square::Occupied(Marker::O),
                _ => Square::Empty,
            };
        }
        Board::from_cells(squares)
    }

    #[test]
    fn test_row_win() {
        let board = board_from(["X", "X", "X", "O", "O", "", "", "", ""]);
        assert_eq!(WinDetector::evaluate(&board), Evaluation::Win(Marker::X));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = board_from(["X", "O", "X", "O", "X", "O", "O", "X", "O"]);
        assert_eq!(WinDetector::evaluate(&board), Evaluation::Tie);
    }

    #[test]
    fn test_win_on_full_board_is_not_tie() {
        let board = board_from(["X", "O", "X", "O", "X", "O", "O", "X", "X"]);
        assert_eq!(WinDetector::evaluate(&board), Evaluation::Win(Marker::X));
    }

    #[test]
    fn test_empty_board_undecided() {
        assert_eq!(WinDetector::evaluate(&Board::new()), Evaluation::Undecided);
        assert!(!Evaluation::Undecided.is_terminal());
        assert!(Evaluation::Tie.is_terminal());
    }
}
