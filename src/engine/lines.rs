//! Winning-line tally over a collapsed grid

use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::{Mark, PerPlayer, Player};

/// Winning line indices on the 3x3 board (row-major)
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Final outcome of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Win(Player),
    Tie,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Win(player) => write!(f, "{player} won!"),
            Verdict::Tie => write!(f, "Tie"),
        }
    }
}

/// Completed-line counts per player over the 8 winning lines.
///
/// Every line is credited independently, so one grid can award several
/// lines to the same player, or lines to both players at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTally {
    wins: PerPlayer<usize>,
}

impl LineTally {
    /// Tally completed lines in a fully collapsed grid.
    ///
    /// A line belongs to a player when all three marks on it equal that
    /// player; an `Empty` mark completes a line for nobody.
    pub fn count(grid: &[Mark; 9]) -> Self {
        let mut wins = PerPlayer::both(0usize);

        for line in &WINNING_LINES {
            for player in [Player::X, Player::O] {
                if line.iter().all(|&idx| grid[idx] == player.to_mark()) {
                    *wins.get_mut(player) += 1;
                }
            }
        }

        LineTally { wins }
    }

    /// Lines completed by the given player.
    pub fn wins(&self, player: Player) -> usize {
        *self.wins.get(player)
    }

    /// Compare the two counts: more lines wins, equal counts tie.
    pub fn verdict(&self) -> Verdict {
        match self.wins.x.cmp(&self.wins.o) {
            std::cmp::Ordering::Greater => Verdict::Win(Player::X),
            std::cmp::Ordering::Less => Verdict::Win(Player::O),
            std::cmp::Ordering::Equal => Verdict::Tie,
        }
    }
}

/// Evaluate a fully collapsed grid to its verdict.
pub fn evaluate(grid: &[Mark; 9]) -> Verdict {
    LineTally::count(grid).verdict()
}
