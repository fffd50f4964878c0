//! FILENAME: core/engine/src/range.rs
//! PURPOSE: Immutable closed numeric interval.
//! CONTEXT: A `Range` includes both of its bounds. It is created through
//! `Range::new`, which rejects `lower > upper`; NaN bounds are accepted and
//! produce a NaN-range. The free-standing helpers (`combine`, `expand`, ...)
//! always return a new range and never modify their input.

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::error::DataError;

/// A closed interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct Range {
    lower: f64,
    upper: f64,
}

/// Unvalidated serialized form; converted through `Range::new`.
#[derive(Deserialize)]
struct RangeBounds {
    lower: f64,
    upper: f64,
}

impl TryFrom<RangeBounds> for Range {
    type Error = DataError;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        Range::new(bounds.lower, bounds.upper)
    }
}

impl Range {
    /// Creates a new range.
    ///
    /// # Errors
    /// Returns `DataError::InvalidRange` if `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, DataError> {
        if lower > upper {
            return Err(DataError::InvalidRange { lower, upper });
        }
        Ok(Range { lower, upper })
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper
    }

    /// `upper - lower`; zero for a single-point range.
    pub fn length(&self) -> f64 {
        self.upper - self.lower
    }

    /// Arithmetic midpoint of the two bounds.
    pub fn central_value(&self) -> f64 {
        if self.lower == self.upper {
            return self.lower;
        }
        self.lower / 2.0 + self.upper / 2.0
    }

    /// Inclusive at both ends. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Returns true if the closed interval `[lower, upper]` shares at least
    /// one point with this range. Touching at a bound counts.
    pub fn intersects(&self, lower: f64, upper: f64) -> bool {
        lower <= self.upper && upper >= self.lower
    }

    pub fn intersects_range(&self, other: &Range) -> bool {
        self.intersects(other.lower, other.upper)
    }

    /// Returns the value if it is contained, otherwise the closest bound.
    pub fn constrain(&self, value: f64) -> f64 {
        if value > self.upper {
            self.upper
        } else if value < self.lower {
            self.lower
        } else {
            value
        }
    }

    pub fn is_nan_range(&self) -> bool {
        self.lower.is_nan() && self.upper.is_nan()
    }

    /// Smallest range covering both inputs. NaN bounds propagate.
    pub fn combine(a: Option<Range>, b: Option<Range>) -> Option<Range> {
        match (a, b) {
            (None, other) | (other, None) => other,
            (Some(a), Some(b)) => Some(Range {
                lower: nan_min(a.lower, b.lower),
                upper: nan_max(a.upper, b.upper),
            }),
        }
    }

    /// Like `combine`, but a NaN bound loses to a real bound on the other
    /// side. A result with no real bound at all is `None`.
    pub fn combine_ignoring_nan(a: Option<Range>, b: Option<Range>) -> Option<Range> {
        let combined = match (a, b) {
            (None, None) => return None,
            (Some(r), None) | (None, Some(r)) => r,
            (Some(a), Some(b)) => Range {
                lower: a.lower.min(b.lower),
                upper: a.upper.max(b.upper),
            },
        };
        if combined.is_nan_range() {
            None
        } else {
            Some(combined)
        }
    }

    /// Extends `range` just enough to contain `value`.
    /// An absent range becomes the single-point range `[value, value]`.
    pub fn expand_to_include(range: Option<Range>, value: f64) -> Range {
        match range {
            None => Range { lower: value, upper: value },
            Some(r) if value < r.lower => Range { lower: value, upper: r.upper },
            Some(r) if value > r.upper => Range { lower: r.lower, upper: value },
            Some(r) => r,
        }
    }

    /// Widens the range by a fraction of its length on each side.
    /// Negative margins that would invert the range collapse it to a point.
    pub fn expand(range: &Range, lower_margin: f64, upper_margin: f64) -> Range {
        let length = range.length();
        let mut lower = range.lower - length * lower_margin;
        let mut upper = range.upper + length * upper_margin;
        if lower > upper {
            lower = lower / 2.0 + upper / 2.0;
            upper = lower;
        }
        Range { lower, upper }
    }

    /// Moves both bounds by `delta`. Without zero crossing, a bound that
    /// would change sign stops at zero.
    pub fn shift(range: &Range, delta: f64, allow_zero_crossing: bool) -> Range {
        if allow_zero_crossing {
            Range {
                lower: range.lower + delta,
                upper: range.upper + delta,
            }
        } else {
            Range {
                lower: shift_no_zero_crossing(range.lower, delta),
                upper: shift_no_zero_crossing(range.upper, delta),
            }
        }
    }
}

fn shift_no_zero_crossing(value: f64, delta: f64) -> f64 {
    if value > 0.0 {
        (value + delta).max(0.0)
    } else if value < 0.0 {
        (value + delta).min(0.0)
    } else {
        value + delta
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        let same = |a: f64, b: f64| (a.is_nan() && b.is_nan()) || a == b;
        same(self.lower, other.lower) && same(self.upper, other.upper)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range[{},{}]", self.lower, self.upper)
    }
}
