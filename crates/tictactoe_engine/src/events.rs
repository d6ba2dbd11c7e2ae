//! Notifications sent from the engine to the presentation layer.

use crate::types::Marker;
use serde::{Deserialize, Serialize};

/// Receiving end of the engine's notification channel.
pub type EventReceiver = tokio::sync::mpsc::UnboundedReceiver<GameEvent>;

/// Public view of how the game stands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Moves are still being played (or players are not yet seated).
    InProgress,
    /// A player completed a line.
    Win {
        /// Winner's name.
        name: String,
        /// Winner's marker.
        marker: Marker,
    },
    /// Board filled with no line.
    Tie,
}

impl Outcome {
    /// True once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Winner's name, if there is one.
    pub fn winner(&self) -> Option<&str> {
        match self {
            Outcome::Win { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "Game in progress"),
            Outcome::Win { name, .. } => write!(f, "{} wins!", name),
            Outcome::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Messages sent from engine to UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Both seats are filled and play can begin.
    PlayersReady {
        /// Seat A, who moves first.
        first: String,
        /// Seat B.
        second: String,
    },
    /// A marker landed on the board.
    MoveApplied {
        /// Who moved.
        name: String,
        /// Marker placed.
        marker: Marker,
        /// Board index (0-8).
        index: usize,
    },
    /// The outcome changed (the game ended).
    OutcomeChanged {
        /// New outcome.
        outcome: Outcome,
    },
    /// Board and players were cleared.
    Restarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        let win = Outcome::Win {
            name: "Ada".to_string(),
            marker: Marker::X,
        };
        assert_eq!(win.to_string(), "Ada wins!");
        assert_eq!(win.winner(), Some("Ada"));
        assert!(win.is_over());
        assert_eq!(Outcome::Tie.to_string(), "It's a tie!");
        assert!(!Outcome::InProgress.is_over());
    }
}
