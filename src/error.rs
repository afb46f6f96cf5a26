//! Error types for the qgame crate

use thiserror::Error;

/// Main error type for the qgame crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("coordinate ({row}, {col}) is out of bounds (rows and columns span 0-2)")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("collapse requested after {moves_played} moves, before the end condition was reached")]
    PrematureCollapse { moves_played: usize },

    #[error("cell ({row}, {col}) has not collapsed yet")]
    IncompleteGrid { row: usize, col: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
