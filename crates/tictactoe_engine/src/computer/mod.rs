//! Computer opponent.
//!
//! A [`ComputerPlayer`] holds one [`MoveStrategy`] per [`Difficulty`] and
//! dispatches to the right one for the player it is moving for.

mod minimax;
mod random;

pub use minimax::{MinimaxStrategy, WIN_SCORE};
pub use random::RandomStrategy;

use crate::board::Board;
use crate::error::{GameError, RejectReason, Result};
use crate::players::Difficulty;
use crate::types::Marker;
use tracing::{debug, error, instrument};

/// A way of choosing a cell for the computer.
pub trait MoveStrategy: std::fmt::Debug {
    /// Picks an empty cell for `me`.
    ///
    /// Returns `None` only when the board has no empty cell.
    fn select(&mut self, board: &Board, me: Marker) -> Option<usize>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Chooses moves for computer-controlled players.
#[derive(Debug)]
pub struct ComputerPlayer {
    easy: RandomStrategy,
    hard: MinimaxStrategy,
}

impl ComputerPlayer {
    /// Creates a computer player with an OS-seeded random strategy.
    pub fn new() -> Self {
        Self {
            easy: RandomStrategy::new(),
            hard: MinimaxStrategy,
        }
    }

    /// Creates a computer player whose random choices are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            easy: RandomStrategy::seeded(seed),
            hard: MinimaxStrategy,
        }
    }

    fn strategy(&mut self, difficulty: Difficulty) -> &mut dyn MoveStrategy {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Chooses a cell for `marker` on `board`.
    ///
    /// The board is only read. The chosen cell is re-checked before it is
    /// returned so a stale choice can never reach the board.
    ///
    /// # Errors
    ///
    /// [`GameError::NoLegalMove`] on a full board, which callers prevent by
    /// checking the outcome first. [`GameError::RejectedMove`] if the
    /// strategy returned a cell that is not empty.
    #[instrument(skip(self, board))]
    pub fn choose_move(
        &mut self,
        board: &Board,
        marker: Marker,
        difficulty: Difficulty,
    ) -> Result<usize> {
        if board.is_full() {
            error!("Computer asked to move on a full board");
            return Err(GameError::NoLegalMove);
        }

        let strategy = self.strategy(difficulty);
        let name = strategy.name();
        let Some(index) = strategy.select(board, marker) else {
            error!(strategy = name, "Strategy found no move on a non-full board");
            return Err(GameError::NoLegalMove);
        };

        if !board.is_empty(index) {
            error!(strategy = name, index, "Strategy chose an unavailable cell");
            return Err(RejectReason::Occupied(index).into());
        }

        debug!(strategy = name, index, "Computer chose cell");
        Ok(index)
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}
