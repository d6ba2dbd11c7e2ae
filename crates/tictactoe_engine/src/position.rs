//! Named board positions.

use crate::board::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses player input: a 1-based cell number as shown by
    /// [`Board::display`], or a label such as `center` or `top-left`.
    #[instrument(level = "trace")]
    pub fn parse_input(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        Self::iter().find(|pos| normalize(pos.label()) == wanted)
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Filters positions by board state - returns only empty squares.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::iter()
            .filter(|pos| board.is_empty(pos.to_index()))
            .collect()
    }
}

/// Lowercases and drops separators so "Top Left", "top-left" and
/// "topleft" compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Marker;

    #[test]
    fn test_position_to_index() {
        assert_eq!(Position::TopLeft.to_index(), 0);
        assert_eq!(Position::Center.to_index(), 4);
        assert_eq!(Position::BottomRight.to_index(), 8);
    }

    #[test]
    fn test_position_from_index() {
        assert_eq!(Position::from_index(0), Some(Position::TopLeft));
        assert_eq!(Position::from_index(4), Some(Position::Center));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_input_numbers_are_one_based() {
        assert_eq!(Position::parse_input("1"), Some(Position::TopLeft));
        assert_eq!(Position::parse_input(" 9 "), Some(Position::BottomRight));
        assert_eq!(Position::parse_input("0"), None);
        assert_eq!(Position::parse_input("10"), None);
    }

    #[test]
    fn test_parse_input_labels() {
        assert_eq!(Position::parse_input("center"), Some(Position::Center));
        assert_eq!(Position::parse_input("Top Left"), Some(Position::TopLeft));
        assert_eq!(Position::parse_input("bottom-center"), Some(Position::BottomCenter));
        assert_eq!(Position::parse_input("middle"), None);
        assert_eq!(Position::parse_input(""), None);
    }

    #[test]
    fn test_valid_moves_filters_occupied() {
        let mut board = Board::new();
        board.apply_move(0, Marker::X).unwrap();
        board.apply_move(4, Marker::O).unwrap();

        let valid = Position::valid_moves(&board);
        assert_eq!(valid.len(), 7);
        assert!(!valid.contains(&Position::TopLeft));
        assert!(!valid.contains(&Position::Center));
        assert!(valid.contains(&Position::BottomRight));
    }
}
