//! Test utilities and shared test helpers for gendata.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may have installed a subscriber already.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Mean and population standard deviation of a sample.
pub fn mean_and_std_dev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "testing")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Untyped inputs for the range and renderer entry points.
#[cfg(feature = "testing")]
pub mod value_fixtures {
    use serde_json::{json, Value};

    /// Values that are not a pair of two integers.
    pub fn malformed_ranges() -> Vec<Value> {
        vec![
            json!(5),
            json!([1, 2, 3]),
            json!([0.5, 10.5]),
            json!([0, 10.5]),
            json!("0,100"),
            json!([]),
            json!(null),
            json!({"lo": 0, "hi": 100}),
        ]
    }

    /// Values that are not tabular x/y data.
    pub fn non_tabular_inputs() -> Vec<Value> {
        vec![
            json!([1, 2, 3]),
            json!("x,y\n1,2"),
            json!(42),
            json!(null),
            json!(true),
        ]
    }

    /// A small valid column-oriented table.
    pub fn column_table() -> Value {
        json!({
            "x": [1, 4, 9],
            "y": [1.2, 7.9, 27.3],
        })
    }

    /// A small valid record-oriented table.
    pub fn record_table() -> Value {
        json!([
            {"x": 1, "y": 1.2},
            {"x": 4, "y": 7.9},
            {"x": 9, "y": 27.3},
        ])
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "testing")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for generating ordered `(lo, hi)` bounds with `lo < hi`.
    pub fn ordered_bounds_strategy() -> impl Strategy<Value = (i64, i64)> {
        (-1_000_000i64..1_000_000i64, 1i64..1_000_000i64).prop_map(|(lo, width)| (lo, lo + width))
    }

    /// Strategy for generating `(lo, hi)` bounds with `lo >= hi`.
    pub fn unordered_bounds_strategy() -> impl Strategy<Value = (i64, i64)> {
        (-1_000_000i64..1_000_000i64, 0i64..1_000_000i64).prop_map(|(hi, gap)| (hi + gap, hi))
    }

    /// Strategy for generating seeds.
    pub fn seed_strategy() -> impl Strategy<Value = u64> {
        any::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0001, 0.001);
        assert_approx_eq(1.0, 0.9999, 0.001);
    }

    #[test]
    #[should_panic]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq(1.0, 1.1, 0.05);
    }

    #[test]
    fn test_mean_and_std_dev() {
        let (mean, std_dev) = mean_and_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_approx_eq(mean, 5.0, 1e-12);
        assert_approx_eq(std_dev, 2.0, 1e-12);

        assert_eq!(mean_and_std_dev(&[]), (0.0, 0.0));
    }

    #[cfg(feature = "testing")]
    mod property_tests {
        use super::super::property_testing::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_property_ordered_bounds(bounds in ordered_bounds_strategy()) {
                prop_assert!(bounds.0 < bounds.1);
            }

            #[test]
            fn test_property_unordered_bounds(bounds in unordered_bounds_strategy()) {
                prop_assert!(bounds.0 >= bounds.1);
            }
        }
    }
}
