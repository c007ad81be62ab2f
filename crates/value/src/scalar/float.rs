//! Floating point wrapper with identity semantics
//!
//! Equality on raw `f64` follows IEEE-754 (`NaN != NaN`, `+0.0 == -0.0`),
//! which is the wrong notion for value identity. `Float` keeps the raw
//! number but exposes bit-level identity: `NaN` is identical to itself and
//! the two zeroes are distinct.

use std::fmt;

/// Floating point number (f64) with bit-level identity helpers.
#[derive(Debug, Clone, Copy)]
pub struct Float {
    value: f64,
}

impl Float {
    /// Create a new Float
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    /// Get the raw f64
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Check if this is NaN
    #[inline]
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    /// Check if this is finite
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    /// Identity comparison: `NaN` is identical to itself, `+0.0` and
    /// `-0.0` are distinct.
    #[must_use]
    pub fn is_identical_to(&self, other: &Self) -> bool {
        (self.is_nan() && other.is_nan()) || self.value.to_bits() == other.value.to_bits()
    }
}

impl From<f64> for Float {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_nan() {
            write!(f, "NaN")
        } else if self.value == f64::INFINITY {
            write!(f, "Infinity")
        } else if self.value == f64::NEG_INFINITY {
            write!(f, "-Infinity")
        } else {
            write!(f, "{}", self.value)
        }
    }
}
