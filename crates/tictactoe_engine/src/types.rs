//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Symbol a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// The X symbol.
    X,
    /// The O symbol.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }

    /// True when the cell holds no marker.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_marker_opponent() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent(), Marker::X);
    }

    #[test]
    fn test_marker_parse_case_insensitive() {
        assert_eq!(Marker::from_str("x").unwrap(), Marker::X);
        assert_eq!(Marker::from_str("O").unwrap(), Marker::O);
        assert!(Marker::from_str("z").is_err());
    }

    #[test]
    fn test_square_marker() {
        assert_eq!(Square::Empty.marker(), None);
        assert_eq!(Square::Occupied(Marker::O).marker(), Some(Marker::O));
        assert!(Square::default().is_empty());
    }
}
