//! Board state: move legality, freeze window, termination, and collapse

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    cell::Cell,
    lines::{self, Verdict},
    player::{Mark, PerPlayer, Player},
    rules::GameRules,
    sample::UniformSource,
    turn::Turn,
};
use crate::{
    fraction::{Amplitude, Fraction},
    types::{BOARD_CELLS, Position},
};

/// An accepted move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub player: Player,
}

/// Why a move request was turned down.
///
/// Rejection is a normal outcome the caller handles by prompting again,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The target cell has already collapsed
    AlreadyResolved,
    /// The active player already holds the full probability on the cell
    FullyOwned,
    /// The cell was played within the trailing freeze window
    Frozen,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::AlreadyResolved => write!(f, "cell has already collapsed"),
            RejectReason::FullyOwned => write!(f, "cell is already fully yours"),
            RejectReason::Frozen => write!(f, "cell is frozen"),
        }
    }
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// The move was applied; carries the display state the UI needs.
    Accepted {
        position: Position,
        probability: PerPlayer<Fraction>,
        amplitude: PerPlayer<Amplitude>,
        to_move: Player,
    },
    /// The move was refused and nothing changed.
    Rejected { reason: RejectReason },
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// A 3x3 grid of nine independently-owned cells plus the move log, the
/// active turn, and the session rules.
///
/// [`submit_move`](Self::submit_move) is the single entry point that
/// mutates game state during play; [`collapse_all`](Self::collapse_all)
/// resolves every cell once the end condition holds and computes the
/// verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
    move_log: Vec<Move>,
    turn: Turn,
    rules: GameRules,
    verdict: Option<Verdict>,
}

impl Board {
    /// Create a fresh board for one game session.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] when the rules fail
    /// validation.
    pub fn new(rules: GameRules) -> Result<Self, crate::Error> {
        rules.validate()?;
        Ok(Board {
            cells: std::array::from_fn(|i| Cell::new(Position::from_index(i))),
            move_log: Vec::new(),
            turn: Turn::starting(rules.starting_player),
            rules,
            verdict: None,
        })
    }

    /// The cell at a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinate`] for out-of-range
    /// coordinates.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, crate::Error> {
        let position = Position::new(row, col)?;
        Ok(&self.cells[position.index()])
    }

    /// All nine cells in row-major order.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// The player whose move it is.
    pub fn active_player(&self) -> Player {
        self.turn.active()
    }

    /// Accepted moves in play order.
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Number of accepted moves so far.
    pub fn moves_played(&self) -> usize {
        self.move_log.len()
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Whether the end-of-play condition holds: the configured move count
    /// in standard games, full grid coverage in hardcore games.
    pub fn is_over(&self) -> bool {
        if self.rules.hardcore {
            self.visited_positions() == BOARD_CELLS
        } else {
            self.move_log.len() >= self.rules.max_turns
        }
    }

    /// Whether [`collapse_all`](Self::collapse_all) has already run.
    pub fn is_collapsed(&self) -> bool {
        self.verdict.is_some()
    }

    /// The verdict, once the board has collapsed.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Submit a move for the active player.
    ///
    /// The move is accepted only when the target cell is unresolved, the
    /// active player's probability on it is below 1, and the cell does not
    /// appear in the trailing freeze window of the move log. On acceptance
    /// the cell's move rule runs, the move is logged, and the turn
    /// switches. On rejection nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinate`] for out-of-range
    /// coordinates and [`crate::Error::GameOver`] once the end condition
    /// has been reached.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, crate::Error> {
        let position = Position::new(row, col)?;
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        let active = self.turn.active();
        let cell = &self.cells[position.index()];
        if cell.is_resolved() {
            return Ok(MoveOutcome::Rejected {
                reason: RejectReason::AlreadyResolved,
            });
        }
        if cell.probability(active).is_one() {
            return Ok(MoveOutcome::Rejected {
                reason: RejectReason::FullyOwned,
            });
        }
        if self.is_frozen(position) {
            return Ok(MoveOutcome::Rejected {
                reason: RejectReason::Frozen,
            });
        }

        let cell = &mut self.cells[position.index()];
        cell.apply_move(active);
        let probability = cell.probabilities();
        let amplitude = cell.amplitudes();

        self.move_log.push(Move {
            position,
            player: active,
        });
        self.turn.switch();

        Ok(MoveOutcome::Accepted {
            position,
            probability,
            amplitude,
            to_move: self.turn.active(),
        })
    }

    /// Collapse every cell in row-major order, then tally the verdict.
    ///
    /// A fixed traversal order means a fixed draw sequence reproduces the
    /// same resolved grid. The first call decides the outcome; later calls
    /// return the stored verdict without drawing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PrematureCollapse`] when the end condition
    /// has not been reached yet.
    pub fn collapse_all(&mut self, source: &mut impl UniformSource) -> Result<Verdict, crate::Error> {
        if let Some(verdict) = self.verdict {
            return Ok(verdict);
        }
        if !self.is_over() {
            return Err(crate::Error::PrematureCollapse {
                moves_played: self.move_log.len(),
            });
        }

        for cell in self.cells.iter_mut() {
            cell.collapse(source);
        }

        let grid = self.resolved_grid()?;
        let verdict = lines::evaluate(&grid);
        self.verdict = Some(verdict);
        Ok(verdict)
    }

    /// The resolved mark of every cell, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IncompleteGrid`] naming the first
    /// unresolved cell if collapse has not run for the whole board.
    pub fn resolved_grid(&self) -> Result<[Mark; BOARD_CELLS], crate::Error> {
        let mut grid = [Mark::Empty; BOARD_CELLS];
        for (idx, cell) in self.cells.iter().enumerate() {
            let position = Position::from_index(idx);
            grid[idx] = cell.resolved().ok_or(crate::Error::IncompleteGrid {
                row: position.row(),
                col: position.col(),
            })?;
        }
        Ok(grid)
    }

    /// Whether the position was played within the trailing freeze window.
    fn is_frozen(&self, position: Position) -> bool {
        if self.rules.freeze_window == 0 {
            return false;
        }
        let start = self.move_log.len().saturating_sub(self.rules.freeze_window);
        self.move_log[start..].iter().any(|m| m.position == position)
    }

    /// Number of distinct positions played so far.
    fn visited_positions(&self) -> usize {
        let mut seen = [false; BOARD_CELLS];
        for m in &self.move_log {
            seen[m.position.index()] = true;
        }
        seen.iter().filter(|&&visited| visited).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(GameRules::standard()).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = board();
        assert_eq!(board.active_player(), Player::X);
        assert_eq!(board.moves_played(), 0);
        assert!(!board.is_over());
        assert!(!board.is_collapsed());
        for cell in board.cells() {
            assert!(cell.total_probability().is_zero());
        }
    }

    #[test]
    fn test_invalid_rules_are_rejected() {
        let result = Board::new(GameRules::standard().with_max_turns(0));
        assert!(matches!(
            result,
            Err(crate::Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_accepted_move_logs_and_switches() {
        let mut board = board();
        let outcome = board.submit_move(1, 1).unwrap();

        match outcome {
            MoveOutcome::Accepted {
                position,
                probability,
                to_move,
                ..
            } => {
                assert_eq!(position, Position::new(1, 1).unwrap());
                assert!(probability.x.is_one());
                assert!(probability.o.is_zero());
                assert_eq!(to_move, Player::O);
            }
            MoveOutcome::Rejected { reason } => panic!("unexpected rejection: {reason}"),
        }

        assert_eq!(board.moves_played(), 1);
        assert_eq!(board.active_player(), Player::O);
        assert_eq!(board.move_log()[0].player, Player::X);
    }

    #[test]
    fn test_out_of_bounds_fails_fast() {
        let mut board = board();
        assert!(matches!(
            board.submit_move(3, 0),
            Err(crate::Error::InvalidCoordinate { row: 3, col: 0 })
        ));
        assert_eq!(board.moves_played(), 0);
    }

    #[test]
    fn test_freeze_window_blocks_replay() {
        let mut board = board();
        assert!(board.submit_move(0, 0).unwrap().is_accepted());

        let outcome = board.submit_move(0, 0).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Rejected {
                reason: RejectReason::Frozen
            }
        );
        // Active player unchanged by the rejection
        assert_eq!(board.active_player(), Player::O);

        // Once thawed, O can contest the cell X claimed
        assert!(board.submit_move(1, 1).unwrap().is_accepted()); // O
        assert!(board.submit_move(2, 2).unwrap().is_accepted()); // X
        let outcome = board.submit_move(0, 0).unwrap(); // O contests
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_zero_freeze_window_allows_immediate_replay() {
        let mut board =
            Board::new(GameRules::standard().with_freeze_window(0)).unwrap();
        assert!(board.submit_move(0, 0).unwrap().is_accepted());
        assert!(board.submit_move(0, 0).unwrap().is_accepted());
    }

    #[test]
    fn test_fully_owned_cell_is_rejected() {
        let mut board =
            Board::new(GameRules::standard().with_freeze_window(0)).unwrap();
        assert!(board.submit_move(0, 0).unwrap().is_accepted()); // X claims
        assert!(board.submit_move(1, 1).unwrap().is_accepted()); // O elsewhere

        // X now fully owns (0, 0)
        let outcome = board.submit_move(0, 0).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Rejected {
                reason: RejectReason::FullyOwned
            }
        );
    }

    #[test]
    fn test_premature_collapse_fails() {
        let mut board = board();
        board.submit_move(0, 0).unwrap();

        let mut rng = crate::engine::sample::FixedDraws::new([]);
        assert!(matches!(
            board.collapse_all(&mut rng),
            Err(crate::Error::PrematureCollapse { moves_played: 1 })
        ));
        assert!(!board.is_collapsed());
    }

    #[test]
    fn test_resolved_grid_before_collapse_fails() {
        let board = board();
        assert!(matches!(
            board.resolved_grid(),
            Err(crate::Error::IncompleteGrid { row: 0, col: 0 })
        ));
    }
}
