//! Tests that the minimax strategy plays perfectly.

use tictactoe_engine::{
    Board, ComputerPlayer, Difficulty, Evaluation, GameEngine, Marker, MinimaxStrategy,
    MoveStrategy, Opponent, Outcome, WinDetector,
};

/// Walks every line of play the opponent can choose, with minimax answering
/// for `me`, and fails if any of them ends in a loss.
fn assert_never_loses(board: Board, me: Marker, to_move: Marker) {
    match WinDetector::evaluate(&board) {
        Evaluation::Win(winner) => {
            assert_eq!(winner, me, "minimax lost:\n{}", board.display());
            return;
        }
        Evaluation::Tie => return,
        Evaluation::Undecided => {}
    }

    if to_move == me {
        let index = MinimaxStrategy
            .select(&board, me)
            .expect("non-terminal board has a move");
        let mut next = board;
        next.apply_move(index, me).expect("minimax picks an empty cell");
        assert_never_loses(next, me, me.opponent());
    } else {
        for index in board.empty_cells() {
            let mut next = board;
            next.apply_move(index, to_move).unwrap();
            assert_never_loses(next, me, me.opponent());
        }
    }
}

#[test]
fn test_never_loses_moving_second() {
    assert_never_loses(Board::new(), Marker::O, Marker::X);
}

#[test]
fn test_never_loses_moving_first() {
    assert_never_loses(Board::new(), Marker::X, Marker::X);
}

#[test]
fn test_self_play_is_a_tie() {
    let mut board = Board::new();
    let mut to_move = Marker::X;
    while !WinDetector::evaluate(&board).is_terminal() {
        let index = MinimaxStrategy.select(&board, to_move).unwrap();
        board.apply_move(index, to_move).unwrap();
        to_move = to_move.opponent();
    }
    assert_eq!(WinDetector::evaluate(&board), Evaluation::Tie);
}

#[test]
fn test_blocks_two_in_a_row() {
    let mut board = Board::new();
    board.apply_move(0, Marker::X).unwrap();
    board.apply_move(1, Marker::X).unwrap();
    assert_eq!(MinimaxStrategy.select(&board, Marker::O), Some(2));
}

#[test]
fn test_random_humans_never_beat_hard_computer() {
    for seed in 0..25u64 {
        // A second engine's easy computer stands in for a careless human.
        let mut human = ComputerPlayer::seeded(seed);
        let mut engine = GameEngine::with_computer(ComputerPlayer::seeded(seed));
        engine
            .initialize_players(
                "Ada",
                Marker::X,
                Opponent::computer_against(Marker::X, Difficulty::Hard),
            )
            .unwrap();

        let mut outcome = Outcome::InProgress;
        while !outcome.is_over() {
            let index = human
                .choose_move(engine.board(), Marker::X, Difficulty::Easy)
                .unwrap();
            outcome = engine.submit_move(index).unwrap();
        }
        assert_ne!(outcome.winner(), Some("Ada"), "seed {seed}");
    }
}
