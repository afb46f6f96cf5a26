//! Per-cell superposition state: the move rule and the collapse rule

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    player::{Mark, PerPlayer, Player},
    sample::UniformSource,
};
use crate::{
    fraction::{Amplitude, Fraction},
    types::Position,
};

/// One grid position's quantum-like state.
///
/// A cell owns an exact probability per player (summing to 0 before any
/// move, 1 afterwards), the derived display amplitudes, and the collapse
/// outcome once the wavefunction has been resolved. The position is fixed
/// at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    probability: PerPlayer<Fraction>,
    amplitude: PerPlayer<Amplitude>,
    resolved: Option<Mark>,
}

impl Cell {
    /// Create an untouched cell at the given position.
    pub fn new(position: Position) -> Self {
        Cell {
            position,
            probability: PerPlayer::both(Fraction::zero()),
            amplitude: PerPlayer::both(Amplitude::zero()),
            resolved: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// The exact probability the cell resolves to the given player.
    pub fn probability(&self, player: Player) -> Fraction {
        *self.probability.get(player)
    }

    /// Both probabilities as a pair.
    pub fn probabilities(&self) -> PerPlayer<Fraction> {
        self.probability
    }

    /// The display amplitude (`sqrt` of the probability) for the given
    /// player. Never read by game logic.
    pub fn amplitude(&self, player: Player) -> Amplitude {
        *self.amplitude.get(player)
    }

    /// Both amplitudes as a pair.
    pub fn amplitudes(&self) -> PerPlayer<Amplitude> {
        self.amplitude
    }

    /// Sum of both probabilities. Exactly 0 for an untouched cell and
    /// exactly 1 once either player has moved here.
    pub fn total_probability(&self) -> Fraction {
        self.probability.x + self.probability.o
    }

    /// The collapse outcome, once [`collapse`](Self::collapse) has run.
    pub fn resolved(&self) -> Option<Mark> {
        self.resolved
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// Apply the half-power move rule for the active player.
    ///
    /// - An untouched cell is claimed outright (`probability = 1`).
    /// - A cell owned entirely by one side splits to `1/2 : 1/2`.
    /// - A cell split between both sides rebalances: the weaker opponent
    ///   share is halved (or the weaker mover share doubled) and the
    ///   complement keeps the total at exactly 1, so the mover's share
    ///   strictly increases.
    ///
    /// Amplitudes are recomputed from the new probabilities. Callers must
    /// not invoke this on a resolved cell; the board's legality checks
    /// enforce that.
    pub fn apply_move(&mut self, active: Player) {
        debug_assert!(self.resolved.is_none(), "move applied to a resolved cell");

        let other = active.opponent();
        let p = self.probability(active);
        let q = self.probability(other);

        let (p_next, q_next) = if p.is_zero() && q.is_zero() {
            (Fraction::one(), Fraction::zero())
        } else if p.is_zero() || q.is_zero() {
            (Fraction::half(), Fraction::half())
        } else if p >= q {
            let q_next = q.halve();
            (q_next.complement(), q_next)
        } else {
            let p_next = p.double();
            (p_next, p_next.complement())
        };

        self.probability.set(active, p_next);
        self.probability.set(other, q_next);
        self.amplitude = PerPlayer::new(self.probability.x.sqrt(), self.probability.o.sqrt());
    }

    /// Resolve the superposition to a classical mark.
    ///
    /// A never-played cell resolves to [`Mark::Empty`] and a fully-owned
    /// cell to its owner, without consuming a draw; equality here is exact.
    /// A genuine superposition consumes one uniform draw `u` and resolves
    /// to `X` when `u < probability[X]`.
    ///
    /// The first call decides the outcome; later calls return it without
    /// drawing again.
    pub fn collapse(&mut self, source: &mut impl UniformSource) -> Mark {
        if let Some(mark) = self.resolved {
            return mark;
        }

        let mark = if self.total_probability().is_zero() {
            Mark::Empty
        } else if self.probability.x.is_one() {
            Mark::X
        } else if self.probability.o.is_one() {
            Mark::O
        } else if source.draw_unit() < self.probability.x.approx() {
            Mark::X
        } else {
            Mark::O
        };

        self.resolved = Some(mark);
        mark
    }
}

impl fmt::Display for Cell {
    /// A resolved cell prints its mark, an untouched cell `.`, and a live
    /// superposition its ket sum, e.g. `√2/2|X⟩ + √2/2|O⟩`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(mark) = self.resolved {
            return write!(f, "{mark}");
        }
        if self.total_probability().is_zero() {
            return write!(f, ".");
        }

        let mut first = true;
        for (player, amplitude) in [(Player::X, self.amplitude.x), (Player::O, self.amplitude.o)] {
            if amplitude.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            write!(f, "{amplitude}|{player}\u{27e9}")?;
            first = false;
        }
        Ok(())
    }
}
