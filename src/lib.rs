//! Quantum Tic-Tac-Toe engine
//!
//! This crate provides:
//! - Exact per-cell superposition state (rational probabilities, surd
//!   amplitudes) with the half-power move rule
//! - Move legality with freeze windows and two termination modes
//! - Wavefunction collapse behind an injectable uniform-random source
//! - Line-count win evaluation over the collapsed grid
//!
//! The engine is single-threaded and synchronous; a front end drives it
//! through [`Board::submit_move`] and [`Board::collapse_all`] and reads
//! cell state back for display.

pub mod engine;
pub mod error;
pub mod fraction;
pub mod types;

pub use engine::{
    Board, Cell, FixedDraws, GameRules, LineTally, Mark, Move, MoveOutcome, PerPlayer, Player,
    RejectReason, Turn, UniformSource, Verdict, WINNING_LINES,
};
pub use error::{Error, Result};
pub use fraction::{Amplitude, Fraction};
pub use types::Position;
