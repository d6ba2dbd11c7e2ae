//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Marker, Square};

/// The eight winning triples.
#[rustfmt::skip]
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(marker)` for the first line holding three equal markers,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Marker> {
    let squares = board.squares();
    LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(marker) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(marker)
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        for i in [1, 4, 7] {
            board.apply_move(i, Marker::O).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Marker::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        for i in [2, 4, 6] {
            board.apply_move(i, Marker::X).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Marker::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.apply_move(0, Marker::X).unwrap();
        board.apply_move(1, Marker::X).unwrap();
        board.apply_move(2, Marker::O).unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
