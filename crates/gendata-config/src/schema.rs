//! Configuration schema definitions using serde.

use gendata_common::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for gendata.
///
/// The sampling range is deliberately absent: it is fixed by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output file configuration.
    pub output: OutputConfig,
    /// Chart styling configuration.
    pub style: StyleConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
    /// Seed for reproducible runs; fresh entropy when absent.
    pub seed: Option<u64>,
}

/// Output file configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the chart is written. The extension picks PNG or SVG.
    pub path: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

/// Chart styling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color as `#RRGGBB`.
    pub background_color: String,
    /// Marker color as `#RRGGBB`.
    pub point_color: String,
    /// Marker radius in pixels.
    pub point_size: u32,
    /// Font family for the caption and axis labels.
    pub font_family: String,
    /// Caption font size.
    pub title_font_size: u32,
    /// Axis description font size.
    pub label_font_size: u32,
    /// Whether to draw the background mesh.
    pub show_grid: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level filter, e.g. `info` or `gendata_points=debug`.
    pub level: String,
    /// Line format.
    pub format: LogFormat,
    /// Optional log file; stdout when absent.
    pub file: Option<String>,
}

impl LoggingSettings {
    /// Converts to the logging initializer's configuration.
    #[must_use]
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}
