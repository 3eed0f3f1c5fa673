//! Generated data points and the immutable dataset that holds them.

use crate::generator::{power_transform, NegativeBasePolicy};
use gendata_common::Result;
use serde::{Deserialize, Serialize};

/// A single `(x, y)` record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Sampled integer x.
    pub x: i64,
    /// `x^1.5` plus noise.
    pub y: f64,
}

impl DataPoint {
    /// Creates a data point.
    #[must_use]
    pub const fn new(x: i64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Points ordered by ascending x. Immutable once built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<DataPoint>", into = "Vec<DataPoint>")]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    /// Builds a dataset, sorting the points by x.
    #[must_use]
    pub fn from_points(mut points: Vec<DataPoint>) -> Self {
        points.sort_unstable_by_key(|p| p.x);
        Self { points }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The records as a slice.
    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Iterates over the records in x order.
    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    /// The x column.
    pub fn xs(&self) -> impl Iterator<Item = i64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    /// The y column.
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Smallest and largest x, or `None` when empty.
    #[must_use]
    pub fn x_bounds(&self) -> Option<(i64, i64)> {
        Some((self.points.first()?.x, self.points.last()?.x))
    }

    /// Smallest and largest y, or `None` when empty.
    #[must_use]
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.ys().fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }

    /// Whether x never decreases from one record to the next.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.points.windows(2).all(|w| w[0].x <= w[1].x)
    }

    /// The noise component of each record: `y - x^1.5` under `policy`.
    pub fn residuals(&self, policy: NegativeBasePolicy) -> Result<Vec<f64>> {
        self.points
            .iter()
            .map(|p| Ok(p.y - power_transform(p.x, policy)?))
            .collect()
    }

    /// Consumes the dataset, returning its records.
    #[must_use]
    pub fn into_points(self) -> Vec<DataPoint> {
        self.points
    }
}

impl From<Vec<DataPoint>> for Dataset {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::from_points(points)
    }
}

impl From<Dataset> for Vec<DataPoint> {
    fn from(dataset: Dataset) -> Self {
        dataset.points
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
