//! Graph utility functions and helpers.

use gendata_common::{GenDataError, Result};
use gendata_points::Dataset;
use plotters::style::RGBColor;
use std::ops::Range;
use std::path::Path;

/// Fraction of the data span added on each side of an axis.
pub const AXIS_PADDING: f64 = 0.05;

/// Image encoding of a rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raster PNG through the bitmap backend.
    Png,
    /// Vector SVG.
    Svg,
}

impl OutputFormat {
    /// Picks the format from the output file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => Err(GenDataError::graph(format!(
                "cannot infer image format from '{}', expected .png or .svg",
                path.display()
            ))),
        }
    }
}

/// Parse a `#RRGGBB` color string.
pub fn parse_color(color_str: &str) -> Result<RGBColor> {
    let invalid = || GenDataError::graph(format!("'{color_str}' is not a #RRGGBB color"));
    let hex = color_str.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

/// Axis ranges covering every point, padded by [`AXIS_PADDING`] on each side.
///
/// A zero-width span is widened to one unit either side so the chart stays drawable.
#[must_use]
pub fn calculate_data_ranges(dataset: &Dataset) -> (Range<f64>, Range<f64>) {
    #[allow(clippy::cast_precision_loss)]
    let x_bounds = dataset.x_bounds().map(|(lo, hi)| (lo as f64, hi as f64));

    (
        padded(x_bounds.unwrap_or((0.0, 1.0))),
        padded(dataset.y_bounds().unwrap_or((0.0, 1.0))),
    )
}

fn padded((min, max): (f64, f64)) -> Range<f64> {
    let span = max - min;
    if span <= f64::EPSILON * max.abs().max(1.0) {
        return (min - 1.0)..(max + 1.0);
    }
    let padding = span * AXIS_PADDING;
    (min - padding)..(max + padding)
}
