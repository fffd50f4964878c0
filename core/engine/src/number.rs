//! FILENAME: core/engine/src/number.rs
//! PURPOSE: The boxed numeric value produced by the array conversion utilities.
//! CONTEXT: `Number` wraps an `f64` so converted arrays carry an explicit
//! value type of their own. Equality treats NaN as equal to NaN, which lets
//! converted arrays be compared as a whole even when they contain NaN.

use std::fmt;
use serde::{Deserialize, Serialize};

/// A single converted numeric value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number(pub f64);

impl Number {
    pub fn new(value: f64) -> Self {
        Number(value)
    }

    /// The wrapped primitive value.
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        if self.0.is_nan() && other.0.is_nan() {
            true
        } else {
            self.0 == other.0
        }
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Number(*other)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number(value)
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        number.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
