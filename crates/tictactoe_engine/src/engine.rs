//! Game orchestration.
//!
//! One [`GameEngine`] is one game session. It owns the board, the turn
//! manager and the computer opponent. A human move submitted through
//! [`GameEngine::submit_move`] is applied, scored, and followed by as many
//! computer moves as it takes to hand the turn back to a human or end the
//! game, all within the same call.

use crate::action::Move;
use crate::board::{Board, CELL_COUNT};
use crate::computer::ComputerPlayer;
use crate::error::{GameError, RejectReason, Result};
use crate::events::{EventReceiver, GameEvent, Outcome};
use crate::players::{Opponent, Player};
use crate::rules::{Evaluation, WinDetector};
use crate::turn::{TurnManager, TurnPhase, Verdict};
use crate::types::{Marker, Square};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    turns: TurnManager,
    computer: ComputerPlayer,
    history: Vec<Move>,
    listeners: Vec<mpsc::UnboundedSender<GameEvent>>,
}

impl GameEngine {
    /// Creates an engine in the setup phase.
    pub fn new() -> Self {
        Self::with_computer(ComputerPlayer::new())
    }

    /// Creates an engine with a specific computer opponent, e.g. a seeded one.
    pub fn with_computer(computer: ComputerPlayer) -> Self {
        Self {
            board: Board::new(),
            turns: TurnManager::new(),
            computer,
            history: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Opens a notification channel. Every event from now on is delivered to
    /// the returned receiver. Dropped receivers are forgotten on the next send.
    pub fn subscribe(&mut self) -> EventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.listeners.push(tx);
        rx
    }

    /// Seats the players and starts the game.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidConfiguration`] for blank names, equal markers, or
    /// when players are already seated.
    #[instrument(skip_all, fields(name = %name, marker = %marker))]
    pub fn initialize_players(
        &mut self,
        name: &str,
        marker: Marker,
        opponent: Opponent,
    ) -> Result<()> {
        self.turns.initialize_players(name, marker, opponent)?;
        let names = self
            .turns
            .players()
            .map(|seats| (seats[0].name().to_string(), seats[1].name().to_string()));
        if let Some((first, second)) = names {
            self.emit(GameEvent::PlayersReady { first, second });
        }
        Ok(())
    }

    /// Submits a human move at `index` (0-8).
    ///
    /// On success the board holds the human's marker and any computer replies
    /// that followed; the returned outcome reflects all of them.
    ///
    /// # Errors
    ///
    /// [`GameError::RejectedMove`] when the game is not running, the player to
    /// move is a computer, or the cell is off the board or taken. Nothing
    /// changes in that case. [`GameError::NoLegalMove`] if a computer reply was
    /// requested on a full board.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Result<Outcome> {
        let marker = match self.turns.phase() {
            TurnPhase::Setup => return Err(self.reject(index, RejectReason::NotStarted)),
            TurnPhase::Over(_) => return Err(self.reject(index, RejectReason::GameOver)),
            TurnPhase::InProgress => match self.turns.current_player() {
                None => return Err(self.reject(index, RejectReason::NotStarted)),
                Some(player) if player.is_computer() => {
                    return Err(self.reject(index, RejectReason::NotHumanTurn));
                }
                Some(player) => player.marker(),
            },
        };

        self.play(index, marker)?;
        self.run_computer_turns()?;
        Ok(self.current_outcome())
    }

    /// Clears the board, the players and the history. Seat players again with
    /// [`GameEngine::initialize_players`] to play another game.
    ///
    /// Emits [`GameEvent::Restarted`], followed by an
    /// [`GameEvent::OutcomeChanged`] back to in progress when a finished game
    /// was cleared.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.history.len(), "Restarting game");
        let was_over = self.current_outcome().is_over();
        self.board.reset();
        self.turns.restart();
        self.history.clear();
        self.emit(GameEvent::Restarted);
        if was_over {
            self.emit(GameEvent::OutcomeChanged {
                outcome: Outcome::InProgress,
            });
        }
    }

    /// How the game stands. In progress during setup.
    pub fn current_outcome(&self) -> Outcome {
        match self.turns.phase() {
            TurnPhase::Setup | TurnPhase::InProgress => Outcome::InProgress,
            TurnPhase::Over(Verdict::Tied) => Outcome::Tie,
            TurnPhase::Over(Verdict::Won(marker)) => Outcome::Win {
                name: self.name_for(marker),
                marker,
            },
        }
    }

    /// Snapshot of the nine cells for rendering.
    pub fn board_snapshot(&self) -> [Square; CELL_COUNT] {
        self.board.cells()
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current game phase.
    pub fn phase(&self) -> TurnPhase {
        self.turns.phase()
    }

    /// The player to move, `None` during setup.
    pub fn current_player(&self) -> Option<&Player> {
        self.turns.current_player()
    }

    /// Both players, seat A first.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.turns.players()
    }

    /// Moves applied since the last restart, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies one move and settles its consequences: record, switch turn,
    /// evaluate, and end the game on a win or tie.
    fn play(&mut self, index: usize, marker: Marker) -> Result<()> {
        if let Err(reason) = self.board.apply_move(index, marker) {
            return Err(self.reject(index, reason));
        }
        self.history.push(Move::new(index, marker));

        let name = self.name_for(marker);
        debug!(%name, %marker, index, "Move applied");
        self.emit(GameEvent::MoveApplied {
            name,
            marker,
            index,
        });

        self.turns.switch_player()?;

        let verdict = match WinDetector::evaluate(&self.board) {
            Evaluation::Undecided => return Ok(()),
            Evaluation::Win(winner) => Verdict::Won(winner),
            Evaluation::Tie => Verdict::Tied,
        };
        self.turns.set_game_over(verdict)?;

        let outcome = self.current_outcome();
        info!(%outcome, moves = self.history.len(), "Game finished");
        self.emit(GameEvent::OutcomeChanged { outcome });
        Ok(())
    }

    /// Lets computer players move until a human is up or the game ends.
    fn run_computer_turns(&mut self) -> Result<()> {
        while self.turns.is_in_progress() {
            let Some(player) = self.turns.current_player() else {
                break;
            };
            let Some(difficulty) = player.difficulty() else {
                break;
            };
            let marker = player.marker();

            let index = self.computer.choose_move(&self.board, marker, difficulty)?;
            self.play(index, marker)?;
        }
        Ok(())
    }

    fn name_for(&self, marker: Marker) -> String {
        self.turns
            .player_with_marker(marker)
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| marker.to_string())
    }

    fn reject(&self, index: usize, reason: RejectReason) -> GameError {
        warn!(index, %reason, "Move rejected");
        GameError::RejectedMove(reason)
    }

    fn emit(&mut self, event: GameEvent) {
        self.listeners.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Difficulty;

    fn two_humans() -> GameEngine {
        let mut engine = GameEngine::new();
        engine
            .initialize_players(
                "Ada",
                Marker::X,
                Opponent::Human {
                    name: "Grace".to_string(),
                },
            )
            .unwrap();
        engine
    }

    #[test]
    fn test_move_before_setup_rejected() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.submit_move(0),
            Err(GameError::RejectedMove(RejectReason::NotStarted))
        );
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_humans_alternate() {
        let mut engine = two_humans();
        engine.submit_move(0).unwrap();
        assert_eq!(engine.current_player().unwrap().name(), "Grace");
        engine.submit_move(4).unwrap();
        assert_eq!(engine.current_player().unwrap().name(), "Ada");
        assert_eq!(
            engine.history(),
            &[Move::new(0, Marker::X), Move::new(4, Marker::O)]
        );
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut engine = two_humans();
        engine.submit_move(0).unwrap();
        let snapshot = engine.board_snapshot();

        assert_eq!(
            engine.submit_move(0),
            Err(GameError::RejectedMove(RejectReason::Occupied(0)))
        );
        assert_eq!(
            engine.submit_move(42),
            Err(GameError::RejectedMove(RejectReason::OutOfRange(42)))
        );
        assert_eq!(engine.board_snapshot(), snapshot);
        assert_eq!(engine.current_player().unwrap().name(), "Grace");
    }

    #[test]
    fn test_winner_is_the_mover() {
        let mut engine = two_humans();
        // Ada: 0 1 2, Grace: 3 4
        for index in [0, 3, 1, 4] {
            engine.submit_move(index).unwrap();
        }
        let outcome = engine.submit_move(2).unwrap();
        assert_eq!(
            outcome,
            Outcome::Win {
                name: "Ada".to_string(),
                marker: Marker::X,
            }
        );
        assert_eq!(
            engine.submit_move(5),
            Err(GameError::RejectedMove(RejectReason::GameOver))
        );
    }

    #[test]
    fn test_hard_computer_replies_in_same_call() {
        let mut engine = GameEngine::with_computer(ComputerPlayer::seeded(0));
        engine
            .initialize_players(
                "Ada",
                Marker::X,
                Opponent::computer_against(Marker::X, Difficulty::Hard),
            )
            .unwrap();

        engine.submit_move(0).unwrap();
        assert_eq!(engine.board().get(4), Some(Square::Occupied(Marker::O)));
        assert_eq!(engine.current_player().unwrap().name(), "Ada");
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut engine = two_humans();
        engine.submit_move(4).unwrap();
        engine.restart();

        assert!(engine.board_snapshot().iter().all(|s| s.is_empty()));
        assert_eq!(engine.current_outcome(), Outcome::InProgress);
        assert_eq!(engine.phase(), TurnPhase::Setup);
        assert!(engine.history().is_empty());
        assert!(engine.players().is_none());
    }
}
