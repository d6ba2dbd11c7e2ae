//! Draw detection logic for tic-tac-toe.

use crate::board::Board;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw. Same as [`Board::is_full`].
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::types::Marker;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.apply_move(4, Marker::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        #[rustfmt::skip]
        let layout = [
            Marker::X, Marker::O, Marker::X,
            Marker::O, Marker::X, Marker::X,
            Marker::O, Marker::X, Marker::O,
        ];
        for (i, marker) in layout.into_iter().enumerate() {
            board.apply_move(i, marker).unwrap();
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for i in [0, 1, 2] {
            board.apply_move(i, Marker::X).unwrap();
        }
        board.apply_move(3, Marker::O).unwrap();
        board.apply_move(4, Marker::O).unwrap();
        assert!(!is_draw(&board));
    }
}
