//! Error types for the game engine.

use serde::{Deserialize, Serialize};

/// Why a move was turned away.
///
/// A rejected move never mutates the board or the turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// Cell index is not in `0..9`.
    #[display("cell {} is off the board", _0)]
    OutOfRange(usize),

    /// Cell already holds a marker.
    #[display("cell {} is already occupied", _0)]
    Occupied(usize),

    /// The game has ended; restart to play again.
    #[display("the game is already over")]
    GameOver,

    /// Players have not been set up yet.
    #[display("the game has not started")]
    NotStarted,

    /// The player to move is computer-controlled.
    #[display("it is not a human player's turn")]
    NotHumanTurn,
}

/// Errors returned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Player setup was refused; the game did not start.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),

    /// A move was refused without changing any state.
    #[display("Move rejected: {}", _0)]
    RejectedMove(RejectReason),

    /// The computer was asked to move on a full board.
    #[display("No legal move available")]
    NoLegalMove,
}

impl std::error::Error for GameError {}

impl From<RejectReason> for GameError {
    fn from(reason: RejectReason) -> Self {
        GameError::RejectedMove(reason)
    }
}

/// Convenience result type for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::from(RejectReason::Occupied(4));
        assert_eq!(err.to_string(), "Move rejected: cell 4 is already occupied");

        let err = GameError::InvalidConfiguration("markers must differ".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: markers must differ");
    }
}
