//! Exhaustive minimax search.
//!
//! The search runs on a scratch copy of the board and walks the whole game
//! tree. With at most nine empty cells that is under a million positions, so
//! there is no depth limit and no pruning.

use super::MoveStrategy;
use crate::board::Board;
use crate::rules::{Evaluation, WinDetector};
use crate::types::Marker;
use tracing::trace;

/// Score of an immediate win for the searching side.
///
/// Terminal scores are `WIN_SCORE - depth` for a win and `depth - WIN_SCORE`
/// for a loss, so quicker wins and slower losses rank higher. A game lasts at
/// most nine plies, so the sign never flips.
pub const WIN_SCORE: i32 = 10;

/// Optimal play. Equal scores go to the lowest cell index.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Scores every empty cell for `me`, ascending by index.
    pub fn score_moves(board: &Board, me: Marker) -> Vec<(usize, i32)> {
        let mut scratch = *board;
        let mut scores = Vec::new();
        for index in board.empty_cells() {
            if scratch.apply_move(index, me).is_err() {
                continue;
            }
            let score = minimax(&mut scratch, me, me.opponent(), 1);
            scratch.clear(index);
            trace!(index, score, "Scored root move");
            scores.push((index, score));
        }
        scores
    }
}

impl MoveStrategy for MinimaxStrategy {
    fn select(&mut self, board: &Board, me: Marker) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (index, score) in Self::score_moves(board, me) {
            // Strictly greater keeps the lowest index among equals.
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((index, score));
            }
        }
        best.map(|(index, _)| index)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

fn minimax(board: &mut Board, me: Marker, to_move: Marker, depth: i32) -> i32 {
    match WinDetector::evaluate(board) {
        Evaluation::Win(winner) if winner == me => return WIN_SCORE - depth,
        Evaluation::Win(_) => return depth - WIN_SCORE,
        Evaluation::Tie => return 0,
        Evaluation::Undecided => {}
    }

    let maximizing = to_move == me;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for index in board.empty_cells() {
        if board.apply_move(index, to_move).is_err() {
            continue;
        }
        let score = minimax(board, me, to_move.opponent(), depth + 1);
        board.clear(index);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
