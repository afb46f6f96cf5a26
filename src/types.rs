//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Number of rows and columns on the board.
pub const GRID_SIZE: usize = 3;

/// A validated `(row, col)` coordinate on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Create a new position, validating both coordinates are within board
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinate`] if either coordinate
    /// is >= 3.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Ok(Position { row, col })
        } else {
            Err(crate::Error::InvalidCoordinate { row, col })
        }
    }

    /// Position of a row-major linear index (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < BOARD_CELLS, "linear index {index} out of bounds");
        Position {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major linear index (0-8).
    pub fn index(&self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// All nine positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_CELLS).map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_validation() {
        assert!(Position::new(0, 0).is_ok());
        assert!(Position::new(2, 2).is_ok());
        assert!(Position::new(3, 0).is_err());
        assert!(Position::new(0, 3).is_err());
        assert!(Position::new(100, 100).is_err());
    }

    #[test]
    fn test_row_major_index() {
        assert_eq!(Position::new(0, 0).unwrap().index(), 0);
        assert_eq!(Position::new(1, 2).unwrap().index(), 5);
        assert_eq!(Position::new(2, 2).unwrap().index(), 8);
        assert_eq!(Position::from_index(5), Position::new(1, 2).unwrap());
    }

    #[test]
    fn test_all_positions_are_row_major() {
        let positions: Vec<Position> = Position::all().collect();
        assert_eq!(positions.len(), 9);
        for (i, pos) in positions.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(1, 2).unwrap().to_string(), "(1, 2)");
    }
}
