//! Injectable uniform-random source for the collapse rule

use rand::{Rng, distr::StandardUniform};

/// Source of uniform draws in `[0, 1)` consumed by wavefunction collapse.
///
/// Collapse is the engine's only nondeterministic operation, so the draw
/// source is threaded through explicitly: production code passes any
/// [`rand::Rng`], tests and replays pass a [`FixedDraws`] sequence.
pub trait UniformSource {
    /// Draw one uniform sample in `[0, 1)`.
    fn draw_unit(&mut self) -> f64;
}

impl<R: Rng> UniformSource for R {
    fn draw_unit(&mut self) -> f64 {
        self.sample(StandardUniform)
    }
}

/// A scripted draw sequence, consumed front to back.
///
/// Reproduces a recorded collapse exactly: feeding the same draws to the
/// same board yields the same resolved grid.
#[derive(Debug, Clone)]
pub struct FixedDraws {
    draws: Vec<f64>,
    next: usize,
}

impl FixedDraws {
    /// Create a source that yields the given draws in order.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws.into();
        debug_assert!(
            draws.iter().all(|d| (0.0..1.0).contains(d)),
            "draws must lie in [0, 1)"
        );
        FixedDraws { draws, next: 0 }
    }

    /// Number of draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len() - self.next
    }
}

impl UniformSource for FixedDraws {
    /// # Panics
    ///
    /// Panics when the scripted sequence is exhausted.
    fn draw_unit(&mut self) -> f64 {
        let draw = self.draws[self.next];
        self.next += 1;
        draw
    }
}
