//! Uniform random move selection.

use super::MoveStrategy;
use crate::board::Board;
use crate::types::Marker;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// Picks any empty cell with equal probability. No lookahead.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for RandomStrategy {
    fn select(&mut self, board: &Board, _me: Marker) -> Option<usize> {
        board.empty_cells().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_picks_occupied_cell() {
        let mut board = Board::new();
        for i in [0, 2, 4, 6] {
            board.apply_move(i, Marker::X).unwrap();
        }
        let mut strategy = RandomStrategy::seeded(42);
        for _ in 0..200 {
            let index = strategy.select(&board, Marker::O).unwrap();
            assert!(board.is_empty(index), "picked occupied cell {index}");
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomStrategy::seeded(9);
        let mut b = RandomStrategy::seeded(9);
        for _ in 0..20 {
            assert_eq!(a.select(&board, Marker::X), b.select(&board, Marker::X));
        }
    }

    #[test]
    fn test_reaches_every_empty_cell() {
        let board = Board::new();
        let mut strategy = RandomStrategy::seeded(5);
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[strategy.select(&board, Marker::X).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
