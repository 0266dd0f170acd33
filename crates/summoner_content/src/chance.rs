//! # Fixed-Point Chances
//!
//! Content authors write probabilities as decimals (`0.006`). The draw path
//! never sees those floats: every chance is converted once into integer
//! parts-per-million, so the same content rolls the same way on every
//! platform.

use std::fmt;
use std::ops::{Add, Sub};

/// Parts-per-million scale (`SCALE` == 100%).
pub const SCALE: u32 = 1_000_000;

/// A probability in parts-per-million, clamped to `0..=SCALE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Chance(u32);

impl Chance {
    /// Impossible.
    pub const ZERO: Self = Self(0);

    /// Certain.
    pub const CERTAIN: Self = Self(SCALE);

    /// Creates a chance from raw parts-per-million, saturating at [`SCALE`].
    #[inline]
    #[must_use]
    pub const fn from_ppm(ppm: u32) -> Self {
        if ppm > SCALE {
            Self(SCALE)
        } else {
            Self(ppm)
        }
    }

    /// Converts a decimal probability, rounding to the nearest ppm.
    ///
    /// Negative and NaN inputs become [`Chance::ZERO`]; anything above 1.0
    /// becomes [`Chance::CERTAIN`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_probability(probability: f64) -> Self {
        if probability.is_nan() || probability <= 0.0 {
            return Self::ZERO;
        }
        if probability >= 1.0 {
            return Self::CERTAIN;
        }
        Self((probability * f64::from(SCALE)).round() as u32)
    }

    /// Raw parts-per-million.
    #[inline]
    #[must_use]
    pub const fn ppm(self) -> u32 {
        self.0
    }

    /// Back to a decimal, for reports only.
    #[must_use]
    pub fn as_probability(self) -> f64 {
        f64::from(self.0) / f64::from(SCALE)
    }

    /// Multiplies the chance by a step count, saturating at certainty.
    #[inline]
    #[must_use]
    pub const fn times(self, steps: u32) -> Self {
        Self::from_ppm(self.0.saturating_mul(steps))
    }

    /// The remaining mass up to certainty.
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(SCALE - self.0)
    }
}

impl Add for Chance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_ppm(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Chance {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Chance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}%", self.as_probability() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_nearest_ppm() {
        assert_eq!(Chance::from_probability(0.006).ppm(), 6_000);
        assert_eq!(Chance::from_probability(1.0 / 3.0).ppm(), 333_333);
        assert_eq!(Chance::from_probability(0.000_000_6).ppm(), 1);
    }

    #[test]
    fn test_out_of_range_inputs_clamp() {
        assert_eq!(Chance::from_probability(-0.5), Chance::ZERO);
        assert_eq!(Chance::from_probability(f64::NAN), Chance::ZERO);
        assert_eq!(Chance::from_probability(3.0), Chance::CERTAIN);
        assert_eq!(Chance::from_ppm(SCALE + 1), Chance::CERTAIN);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let half = Chance::from_ppm(SCALE / 2);
        assert_eq!(half + half + half, Chance::CERTAIN);
        assert_eq!(half - Chance::CERTAIN, Chance::ZERO);
        assert_eq!(Chance::from_ppm(60_000).times(20), Chance::CERTAIN);
        assert_eq!(Chance::from_ppm(250_000).complement().ppm(), 750_000);
    }
}
