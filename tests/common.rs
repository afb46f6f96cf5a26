//! Common test utilities for the qgame test suite.

use qgame::{Board, GameRules};

/// Play a scripted move sequence, asserting every move is accepted.
pub fn play_all(board: &mut Board, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        let outcome = board
            .submit_move(row, col)
            .expect("scripted move must be in bounds");
        assert!(
            outcome.is_accepted(),
            "scripted move ({row}, {col}) was rejected"
        );
    }
}

/// A board with the given turn limit and freezing disabled, X to start.
pub fn unfrozen_board(max_turns: usize) -> Board {
    Board::new(
        GameRules::standard()
            .with_max_turns(max_turns)
            .with_freeze_window(0),
    )
    .expect("rules are valid")
}
