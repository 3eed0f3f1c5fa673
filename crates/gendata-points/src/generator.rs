//! Power-law data point generator.

use crate::{DataPoint, Dataset, Range};
use gendata_common::{GenDataError, Result};
use rand::distr::{Distribution, Uniform};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::Normal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Records produced per generation call.
pub const POINT_COUNT: usize = 100;
/// Exponent of the power-law trend.
pub const EXPONENT: f64 = 1.5;
/// Mean of the additive noise.
pub const NOISE_MEAN: f64 = 0.0;
/// Standard deviation of the additive noise.
pub const NOISE_STD_DEV: f64 = 10.0;

/// How `x^1.5` is evaluated for negative x, where the real power is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeBasePolicy {
    /// `-(|x|^1.5)`: odd extension of the curve.
    #[default]
    SignPreserving,
    /// `|x|^1.5`: even extension of the curve.
    Absolute,
    /// Refuse negative x with `NegativeBase`.
    Reject,
}

/// Evaluates the trend `x^1.5` for one x under `policy`.
pub fn power_transform(x: i64, policy: NegativeBasePolicy) -> Result<f64> {
    #[allow(clippy::cast_precision_loss)]
    let base = x as f64;
    if x >= 0 {
        return Ok(base.powf(EXPONENT));
    }
    match policy {
        NegativeBasePolicy::SignPreserving => Ok(-base.abs().powf(EXPONENT)),
        NegativeBasePolicy::Absolute => Ok(base.abs().powf(EXPONENT)),
        NegativeBasePolicy::Reject => Err(GenDataError::NegativeBase { value: x }),
    }
}

fn noise_distribution(mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std_dev).map_err(|e| {
        GenDataError::sampling(
            format!("invalid noise distribution N({mean}, {std_dev})"),
            e,
        )
    })
}

/// Generates [`POINT_COUNT`] noisy power-law points over a [`Range`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DataGenerator {
    policy: NegativeBasePolicy,
}

impl DataGenerator {
    /// Creates a generator with the given negative-x handling.
    #[must_use]
    pub const fn new(policy: NegativeBasePolicy) -> Self {
        Self { policy }
    }

    /// The negative-x handling in effect.
    #[must_use]
    pub const fn policy(&self) -> NegativeBasePolicy {
        self.policy
    }

    /// Draws a dataset from `rng`.
    ///
    /// Every x is sampled uniformly from `[lo, hi)` with replacement, every
    /// noise term from `Normal(0, 10)`, and the result is sorted by x. Nothing
    /// is sampled when the range is rejected by the policy.
    pub fn generate<R: Rng + ?Sized>(&self, range: Range, rng: &mut R) -> Result<Dataset> {
        if self.policy == NegativeBasePolicy::Reject && range.has_negative() {
            return Err(GenDataError::NegativeBase { value: range.lo() });
        }

        let uniform = Uniform::new(range.lo(), range.hi())
            .map_err(|_| GenDataError::invalid_range_order(range.lo(), range.hi()))?;
        let noise = noise_distribution(NOISE_MEAN, NOISE_STD_DEV)?;

        let xs: Vec<i64> = (0..POINT_COUNT).map(|_| uniform.sample(rng)).collect();
        let points = xs
            .into_iter()
            .map(|x| Ok(DataPoint::new(x, power_transform(x, self.policy)? + noise.sample(rng))))
            .collect::<Result<Vec<_>>>()?;

        let dataset = Dataset::from_points(points);
        debug!(
            range = %range,
            count = dataset.len(),
            policy = ?self.policy,
            "generated data points"
        );
        Ok(dataset)
    }
}

/// Generates a dataset with the default generator.
pub fn generate_data_points<R: Rng + ?Sized>(range: Range, rng: &mut R) -> Result<Dataset> {
    DataGenerator::default().generate(range, rng)
}

/// Generates a reproducible dataset from `seed`.
pub fn generate_seeded(range: Range, seed: u64) -> Result<Dataset> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_data_points(range, &mut rng)
}

/// Generates a dataset from the thread-local, OS-seeded generator.
pub fn generate_from_entropy(range: Range) -> Result<Dataset> {
    generate_data_points(range, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_transform_non_negative() {
        assert_eq!(power_transform(0, NegativeBasePolicy::Reject).unwrap(), 0.0);
        assert!((power_transform(4, NegativeBasePolicy::Reject).unwrap() - 8.0).abs() < 1e-9);
        assert!((power_transform(100, NegativeBasePolicy::Reject).unwrap() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_power_transform_negative_policies() {
        let signed = power_transform(-4, NegativeBasePolicy::SignPreserving).unwrap();
        assert!((signed + 8.0).abs() < 1e-9);

        let absolute = power_transform(-4, NegativeBasePolicy::Absolute).unwrap();
        assert!((absolute - 8.0).abs() < 1e-9);

        let err = power_transform(-4, NegativeBasePolicy::Reject).unwrap_err();
        assert!(matches!(err, GenDataError::NegativeBase { value: -4 }));
    }

    #[test]
    fn test_noise_distribution_errors_are_sampling_errors() {
        assert!(noise_distribution(NOISE_MEAN, NOISE_STD_DEV).is_ok());

        let err = noise_distribution(0.0, f64::NAN).unwrap_err();
        assert!(matches!(err, GenDataError::Sampling { .. }));
        assert!(err.to_string().starts_with("Sampling error: invalid noise distribution"));
        assert!(!err.to_string().contains("Configuration"));
    }

    #[test]
    fn test_generate_produces_sorted_points_in_range() {
        let range = Range::DEFAULT;
        let dataset = generate_seeded(range, 7).unwrap();

        assert_eq!(dataset.len(), POINT_COUNT);
        assert!(dataset.is_sorted());
        assert!(dataset.xs().all(|x| range.contains(x)));
        assert!(dataset.ys().all(f64::is_finite));
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let range = Range::new(-50, 50).unwrap();
        assert_eq!(generate_seeded(range, 42).unwrap(), generate_seeded(range, 42).unwrap());
        assert_ne!(generate_seeded(range, 42).unwrap(), generate_seeded(range, 43).unwrap());
    }

    #[test]
    fn test_single_value_range() {
        let dataset = generate_seeded(Range::new(9, 10).unwrap(), 1).unwrap();
        assert!(dataset.xs().all(|x| x == 9));
    }

    #[test]
    fn test_reject_policy_fails_before_sampling() {
        struct PanickingRng;

        impl rand::RngCore for PanickingRng {
            fn next_u32(&mut self) -> u32 {
                panic!("rng must not be touched")
            }
            fn next_u64(&mut self) -> u64 {
                panic!("rng must not be touched")
            }
            fn fill_bytes(&mut self, _dst: &mut [u8]) {
                panic!("rng must not be touched")
            }
        }

        let generator = DataGenerator::new(NegativeBasePolicy::Reject);
        let err = generator
            .generate(Range::new(-1, 10).unwrap(), &mut PanickingRng)
            .unwrap_err();
        assert!(matches!(err, GenDataError::NegativeBase { value: -1 }));
    }

    #[test]
    fn test_negative_range_never_yields_nan() {
        let range = Range::new(-100, 100).unwrap();
        for policy in [NegativeBasePolicy::SignPreserving, NegativeBasePolicy::Absolute] {
            let mut rng = StdRng::seed_from_u64(3);
            let dataset = DataGenerator::new(policy).generate(range, &mut rng).unwrap();
            assert!(dataset.ys().all(f64::is_finite), "{policy:?} produced NaN");
        }
    }

    #[test]
    fn test_entropy_generation() {
        let dataset = generate_from_entropy(Range::DEFAULT).unwrap();
        assert_eq!(dataset.len(), POINT_COUNT);
    }
}
