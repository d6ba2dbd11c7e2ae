//! Tic-tac-toe game engine.
//!
//! Board state, win and tie detection, turn order, and a computer opponent
//! with a random (easy) and a minimax (hard) strategy. The presentation layer
//! seats the players, submits human moves, and listens for [`GameEvent`]s.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Difficulty, GameEngine, Marker, Opponent, Outcome};
//!
//! let mut engine = GameEngine::new();
//! engine
//!     .initialize_players("Ada", Marker::X, Opponent::computer_against(Marker::X, Difficulty::Hard))
//!     .unwrap();
//!
//! // The computer answers inside the same call.
//! let outcome = engine.submit_move(4).unwrap();
//! assert_eq!(outcome, Outcome::InProgress);
//! assert_eq!(engine.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod computer;
mod engine;
mod error;
mod events;
mod players;
mod position;
mod rules;
mod turn;
mod types;

pub use action::Move;
pub use board::{Board, CELL_COUNT};
pub use computer::{ComputerPlayer, MinimaxStrategy, MoveStrategy, RandomStrategy, WIN_SCORE};
pub use engine::GameEngine;
pub use error::{GameError, RejectReason, Result};
pub use events::{EventReceiver, GameEvent, Outcome};
pub use players::{COMPUTER_NAME, Difficulty, Opponent, Player, PlayerKind};
pub use position::Position;
pub use rules::{Evaluation, LINES, WinDetector, check_winner, is_full};
pub use turn::{TurnManager, TurnPhase, Verdict};
pub use types::{Marker, Square};
