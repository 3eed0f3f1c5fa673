//! Default values for every configuration section.

use crate::schema::*;
use gendata_common::LogFormat;
use std::path::PathBuf;

/// Default output path.
pub const DEFAULT_OUTPUT_PATH: &str = "data_points.png";
/// Default image width.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default image height.
pub const DEFAULT_HEIGHT: u32 = 600;

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            style: StyleConfig::default(),
            logging: LoggingSettings::default(),
            seed: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            point_color: "#1f77b4".to_string(),
            point_size: 3,
            font_family: "sans-serif".to_string(),
            title_font_size: 24,
            label_font_size: 16,
            show_grid: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}
