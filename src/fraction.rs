//! Exact probability and amplitude arithmetic
//!
//! Probabilities are exact non-negative rationals; the move rule only ever
//! halves, doubles, or complements them, so every value stays a dyadic
//! rational of the form k/2^n. Amplitudes are the square roots of
//! probabilities, kept in exact `scale * sqrt(radicand)` form for display.

use std::{fmt, ops::Add};

use num_rational::Ratio;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// An exact non-negative rational number, always in lowest terms.
///
/// This type implements `Copy` since it wraps a pair of machine words.
/// Equality and ordering are exact; no floating-point rounding is involved
/// anywhere in the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fraction(Ratio<u64>);

impl Fraction {
    /// Create a fraction from a numerator and denominator, reduced to
    /// lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero.
    pub fn new(numer: u64, denom: u64) -> Self {
        Fraction(Ratio::new(numer, denom))
    }

    /// The zero probability.
    pub fn zero() -> Self {
        Fraction(Ratio::zero())
    }

    /// The certain probability.
    pub fn one() -> Self {
        Fraction(Ratio::one())
    }

    /// The even-split probability.
    pub fn half() -> Self {
        Fraction(Ratio::new(1, 2))
    }

    /// Exact half of this value.
    pub fn halve(self) -> Self {
        Fraction(self.0 / 2)
    }

    /// Exact double of this value.
    pub fn double(self) -> Self {
        Fraction(self.0 * 2)
    }

    /// Exact `1 - self`. Callers keep values within `[0, 1]`.
    pub fn complement(self) -> Self {
        debug_assert!(self.0 <= Ratio::one(), "complement of a value above 1");
        Fraction(Ratio::one() - self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Numerator in lowest terms.
    pub fn numer(&self) -> u64 {
        *self.0.numer()
    }

    /// Denominator in lowest terms.
    pub fn denom(&self) -> u64 {
        *self.0.denom()
    }

    /// Nearest `f64` value.
    ///
    /// Dyadic rationals with small denominators convert without rounding,
    /// which makes comparisons against uniform `f64` draws exact.
    pub fn approx(&self) -> f64 {
        self.numer() as f64 / self.denom() as f64
    }

    /// Exact square root of this value, as a display amplitude.
    pub fn sqrt(self) -> Amplitude {
        Amplitude::sqrt_of(self)
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction(self.0 + rhs.0)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The exact square root of a [`Fraction`], stored as
/// `scale * sqrt(radicand)` with `radicand` squarefree.
///
/// Amplitudes exist for display only; game logic never reads them. The
/// representation is exact even when the square root is irrational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amplitude {
    scale: Ratio<u64>,
    radicand: u64,
}

impl Amplitude {
    /// The amplitude of a zero probability.
    pub fn zero() -> Self {
        Amplitude {
            scale: Ratio::zero(),
            radicand: 1,
        }
    }

    /// Compute `sqrt(value)` exactly.
    ///
    /// For `value = a/b` in lowest terms, `sqrt(a/b) = sqrt(a*b) / b`;
    /// the perfect-square part of `a*b` is folded into the rational scale
    /// and the squarefree remainder becomes the radicand.
    pub fn sqrt_of(value: Fraction) -> Self {
        if value.is_zero() {
            return Amplitude::zero();
        }

        let (a, b) = (value.numer(), value.denom());
        let (square_root, radicand) = split_square(a * b);

        Amplitude {
            scale: Ratio::new(square_root, b),
            radicand,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.scale.is_zero()
    }

    /// Rational part of the amplitude.
    pub fn scale(&self) -> (u64, u64) {
        (*self.scale.numer(), *self.scale.denom())
    }

    /// Squarefree part under the square root (1 when the root is rational).
    pub fn radicand(&self) -> u64 {
        self.radicand
    }

    /// Nearest `f64` value.
    pub fn approx(&self) -> f64 {
        let scale = *self.scale.numer() as f64 / *self.scale.denom() as f64;
        scale * (self.radicand as f64).sqrt()
    }
}

impl fmt::Display for Amplitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.radicand == 1 {
            return write!(f, "{}", self.scale);
        }

        match *self.scale.numer() {
            1 => write!(f, "\u{221a}{}", self.radicand)?,
            n => write!(f, "{n}\u{221a}{}", self.radicand)?,
        }
        if *self.scale.denom() != 1 {
            write!(f, "/{}", self.scale.denom())?;
        }
        Ok(())
    }
}

/// Split `n` into `(s, r)` with `n = s^2 * r` and `r` squarefree.
fn split_square(n: u64) -> (u64, u64) {
    debug_assert!(n > 0);

    // Powers of two dominate here since denominators are powers of two.
    let twos = n.trailing_zeros();
    let mut root = 1u64 << (twos / 2);
    let two_part: u64 = if twos % 2 == 0 { 1 } else { 2 };

    let mut odd = n >> twos;
    let mut d = 3u64;
    while d * d <= odd {
        while odd % (d * d) == 0 {
            odd /= d * d;
            root *= d;
        }
        d += 2;
    }

    (root, two_part * odd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_stay_in_lowest_terms() {
        let f = Fraction::new(2, 4);
        assert_eq!(f, Fraction::half());
        assert_eq!(f.numer(), 1);
        assert_eq!(f.denom(), 2);
    }

    #[test]
    fn halve_and_double_are_exact_inverses() {
        let f = Fraction::new(3, 8);
        assert_eq!(f.halve().double(), f);
        assert_eq!(f.halve(), Fraction::new(3, 16));
        assert_eq!(Fraction::zero().halve(), Fraction::zero());
    }

    #[test]
    fn complement_is_exact() {
        assert_eq!(Fraction::new(3, 8).complement(), Fraction::new(5, 8));
        assert_eq!(Fraction::one().complement(), Fraction::zero());
        assert_eq!(Fraction::zero().complement(), Fraction::one());
    }

    #[test]
    fn ordering_is_exact() {
        assert!(Fraction::new(3, 8) < Fraction::half());
        assert!(Fraction::new(5, 8) > Fraction::half());
        assert_eq!(
            Fraction::half() + Fraction::new(3, 8),
            Fraction::new(7, 8)
        );
    }

    #[test]
    fn dyadic_approx_is_lossless() {
        assert_eq!(Fraction::new(3, 4).approx(), 0.75);
        assert_eq!(Fraction::new(1, 1024).approx(), 1.0 / 1024.0);
    }

    #[test]
    fn fraction_display() {
        assert_eq!(Fraction::zero().to_string(), "0");
        assert_eq!(Fraction::one().to_string(), "1");
        assert_eq!(Fraction::new(3, 4).to_string(), "3/4");
    }

    #[test]
    fn sqrt_of_zero_and_one() {
        assert!(Fraction::zero().sqrt().is_zero());
        let one = Fraction::one().sqrt();
        assert_eq!(one.scale(), (1, 1));
        assert_eq!(one.radicand(), 1);
    }

    #[test]
    fn sqrt_extracts_square_factors() {
        // sqrt(3/4) = sqrt(12)/4 = 2*sqrt(3)/4 = sqrt(3)/2
        let amp = Fraction::new(3, 4).sqrt();
        assert_eq!(amp.scale(), (1, 2));
        assert_eq!(amp.radicand(), 3);

        // sqrt(1/2) = sqrt(2)/2
        let amp = Fraction::half().sqrt();
        assert_eq!(amp.scale(), (1, 2));
        assert_eq!(amp.radicand(), 2);

        // sqrt(9/16) = 3/4 exactly
        let amp = Fraction::new(9, 16).sqrt();
        assert_eq!(amp.scale(), (3, 4));
        assert_eq!(amp.radicand(), 1);
    }

    #[test]
    fn amplitude_display() {
        assert_eq!(Amplitude::zero().to_string(), "0");
        assert_eq!(Fraction::one().sqrt().to_string(), "1");
        assert_eq!(Fraction::half().sqrt().to_string(), "\u{221a}2/2");
        assert_eq!(Fraction::new(3, 4).sqrt().to_string(), "\u{221a}3/2");
        assert_eq!(Fraction::new(9, 16).sqrt().to_string(), "3/4");
        assert_eq!(Fraction::new(3, 8).sqrt().to_string(), "\u{221a}6/4");
    }

    #[test]
    fn amplitude_approx_matches_probability() {
        let p = Fraction::new(3, 8);
        let amp = p.sqrt();
        assert!((amp.approx() * amp.approx() - p.approx()).abs() < 1e-12);
    }

    #[test]
    fn split_square_cases() {
        assert_eq!(split_square(1), (1, 1));
        assert_eq!(split_square(2), (1, 2));
        assert_eq!(split_square(4), (2, 1));
        assert_eq!(split_square(12), (2, 3));
        assert_eq!(split_square(18), (3, 2));
        assert_eq!(split_square(360), (6, 10));
    }
}
