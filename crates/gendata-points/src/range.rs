//! Validated sampling range for x values.

use gendata_common::{GenDataError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

/// Half-open integer interval `[lo, hi)` that x values are drawn from.
///
/// A `Range` can only be built through validating constructors, so holding one
/// guarantees `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct Range {
    lo: i64,
    hi: i64,
}

impl Range {
    /// The range used when none is supplied: `[0, 100)`.
    pub const DEFAULT: Self = Self { lo: 0, hi: 100 };

    /// Creates a range, failing with `InvalidRangeOrder` unless `lo < hi`.
    pub fn new(lo: i64, hi: i64) -> Result<Self> {
        if lo >= hi {
            return Err(GenDataError::invalid_range_order(lo, hi));
        }
        Ok(Self { lo, hi })
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn lo(&self) -> i64 {
        self.lo
    }

    /// Exclusive upper bound.
    #[must_use]
    pub const fn hi(&self) -> i64 {
        self.hi
    }

    /// Number of distinct integers in the range.
    #[must_use]
    pub const fn span(&self) -> u64 {
        self.hi.abs_diff(self.lo)
    }

    /// Whether `x` lies in `[lo, hi)`.
    #[must_use]
    pub const fn contains(&self, x: i64) -> bool {
        self.lo <= x && x < self.hi
    }

    /// Whether the range reaches below zero.
    #[must_use]
    pub const fn has_negative(&self) -> bool {
        self.lo < 0
    }

    /// The range as a standard library half-open range.
    #[must_use]
    pub const fn as_std(&self) -> std::ops::Range<i64> {
        self.lo..self.hi
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lo, self.hi)
    }
}

impl TryFrom<(i64, i64)> for Range {
    type Error = GenDataError;

    fn try_from((lo, hi): (i64, i64)) -> Result<Self> {
        Self::new(lo, hi)
    }
}

impl From<Range> for (i64, i64) {
    fn from(range: Range) -> Self {
        (range.lo, range.hi)
    }
}

impl TryFrom<&[i64]> for Range {
    type Error = GenDataError;

    fn try_from(bounds: &[i64]) -> Result<Self> {
        match *bounds {
            [lo, hi] => Self::new(lo, hi),
            _ => Err(GenDataError::invalid_range_type(format!(
                "expected 2 elements, got {}",
                bounds.len()
            ))),
        }
    }
}

impl TryFrom<&Value> for Range {
    type Error = GenDataError;

    /// Accepts a JSON array of exactly two integers. Floats are rejected even
    /// when they hold a whole number.
    fn try_from(value: &Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(GenDataError::invalid_range_type(format!(
                "expected an array, got {}",
                value_kind(value)
            )));
        };

        if items.len() != 2 {
            return Err(GenDataError::invalid_range_type(format!(
                "expected 2 elements, got {}",
                items.len()
            )));
        }

        let bound = |item: &Value| {
            item.as_i64().ok_or_else(|| {
                GenDataError::invalid_range_type(format!(
                    "expected integer bounds, got {}",
                    value_kind(item)
                ))
            })
        };

        Self::new(bound(&items[0])?, bound(&items[1])?)
    }
}

impl FromStr for Range {
    type Err = GenDataError;

    /// Parses `"lo,hi"`, `"lo..hi"` or either form wrapped in `()` or `[]`.
    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .trim_start_matches(['(', '['])
            .trim_end_matches([')', ']']);

        let parts: Vec<&str> = if inner.contains("..") {
            inner.split("..").collect()
        } else {
            inner.split(',').collect()
        };

        if parts.len() != 2 {
            return Err(GenDataError::invalid_range_type(format!(
                "expected 2 elements, got {} in '{s}'",
                parts.len()
            )));
        }

        let bound = |part: &str| {
            part.trim().parse::<i64>().map_err(|_| {
                GenDataError::invalid_range_type(format!("'{}' is not an integer", part.trim()))
            })
        };

        Self::new(bound(parts[0])?, bound(parts[1])?)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a float",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
