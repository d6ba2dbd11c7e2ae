//! Turn order and game phase.
//!
//! The [`TurnManager`] is a small state machine:
//!
//! ```text
//! Setup --initialize_players--> InProgress --set_game_over--> Over
//!   ^                                                          |
//!   +------------------------- restart ------------------------+
//! ```
//!
//! It owns the two [`Player`] records for the session. Everyone else borrows
//! them through [`TurnManager::current_player`] or
//! [`TurnManager::player_with_marker`].

use crate::error::{GameError, RejectReason, Result};
use crate::players::{COMPUTER_NAME, Opponent, Player};
use crate::types::Marker;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The marker completed a line.
    Won(Marker),
    /// Board filled with no line.
    Tied,
}

/// Phase of the game.
///
/// `Over` always carries its verdict; there is no finished game without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for players.
    Setup,
    /// Moves are accepted.
    InProgress,
    /// Game ended.
    Over(Verdict),
}

/// Seat index. Seat A moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seat {
    A,
    B,
}

impl Seat {
    fn other(self) -> Self {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::A => 0,
            Seat::B => 1,
        }
    }
}

/// Tracks the players, whose turn it is, and whether the game is over.
#[derive(Debug, Clone)]
pub struct TurnManager {
    players: Option<[Player; 2]>,
    current: Seat,
    phase: TurnPhase,
}

impl TurnManager {
    /// Creates a manager in the setup phase.
    pub fn new() -> Self {
        Self {
            players: None,
            current: Seat::A,
            phase: TurnPhase::Setup,
        }
    }

    /// Seats the players and starts the game.
    ///
    /// The human named `name` takes seat A and moves first.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidConfiguration`] when a name is blank or is the
    /// computer's reserved name, when the computer's marker equals the
    /// human's, or when players are already seated. The manager stays in `Setup` on error.
    #[instrument(skip_all, fields(marker = %marker))]
    pub fn initialize_players(
        &mut self,
        name: &str,
        marker: Marker,
        opponent: Opponent,
    ) -> Result<()> {
        if self.phase != TurnPhase::Setup {
            return Err(invalid("players are already seated; restart first"));
        }

        let name = human_name(name, "player name")?;
        let second = match opponent {
            Opponent::Human { name: other } => {
                let other = human_name(&other, "second player name")?;
                Player::human(other, marker.opponent())
            }
            Opponent::Computer {
                marker: computer_marker,
                difficulty,
            } => {
                if computer_marker == marker {
                    warn!(%marker, "Computer marker equals player marker");
                    return Err(invalid(format!(
                        "player and computer cannot both use {}",
                        marker
                    )));
                }
                Player::computer(COMPUTER_NAME, computer_marker, difficulty)
            }
        };

        info!(
            first = %name,
            second = %second.name(),
            second_kind = ?second.kind(),
            "Players seated"
        );
        self.players = Some([Player::human(name, marker), second]);
        self.current = Seat::A;
        self.phase = TurnPhase::InProgress;
        Ok(())
    }

    /// Current phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// True while moves are accepted.
    pub fn is_in_progress(&self) -> bool {
        self.phase == TurnPhase::InProgress
    }

    /// Both players, seat A first. `None` during setup.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// The player to move. `None` during setup.
    pub fn current_player(&self) -> Option<&Player> {
        self.players
            .as_ref()
            .map(|players| &players[self.current.index()])
    }

    /// Looks a player up by marker.
    pub fn player_with_marker(&self, marker: Marker) -> Option<&Player> {
        self.players
            .as_ref()
            .and_then(|players| players.iter().find(|p| p.marker() == marker))
    }

    /// Hands the turn to the other seat.
    ///
    /// # Errors
    ///
    /// Refused outside `InProgress`.
    #[instrument(skip(self))]
    pub fn switch_player(&mut self) -> std::result::Result<&Player, RejectReason> {
        self.ensure_in_progress()?;
        self.current = self.current.other();
        let players = self.players.as_ref().ok_or(RejectReason::NotStarted)?;
        let next = &players[self.current.index()];
        debug!(next = %next.name(), marker = %next.marker(), "Turn switched");
        Ok(next)
    }

    /// Ends the game with the given verdict.
    ///
    /// # Errors
    ///
    /// Refused outside `InProgress`.
    #[instrument(skip(self))]
    pub fn set_game_over(&mut self, verdict: Verdict) -> std::result::Result<(), RejectReason> {
        self.ensure_in_progress()?;
        info!(?verdict, "Game over");
        self.phase = TurnPhase::Over(verdict);
        Ok(())
    }

    /// Back to setup: players cleared, seat A to move, verdict dropped.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!(phase = ?self.phase, "Turn manager restarting");
        self.players = None;
        self.current = Seat::A;
        self.phase = TurnPhase::Setup;
    }

    fn ensure_in_progress(&self) -> std::result::Result<(), RejectReason> {
        match self.phase {
            TurnPhase::InProgress => Ok(()),
            TurnPhase::Setup => Err(RejectReason::NotStarted),
            TurnPhase::Over(_) => Err(RejectReason::GameOver),
        }
    }
}

impl Default for TurnManager {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(message: impl Into<String>) -> GameError {
    GameError::InvalidConfiguration(message.into())
}

fn human_name(name: &str, what: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        warn!(field = what, "Blank name rejected");
        return Err(invalid(format!("{} is required", what)));
    }
    if trimmed.eq_ignore_ascii_case(COMPUTER_NAME) {
        warn!(field = what, name = trimmed, "Reserved name rejected");
        return Err(invalid(format!(
            "{} cannot be '{}', that name belongs to the computer",
            what, COMPUTER_NAME
        )));
    }
    Ok(trimmed.to_string())
}
