//! Runtime validation of loaded configuration.

use crate::loader::ConfigError;
use crate::schema::Config;
use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #1f77b4)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Module path accepted as a log directive target (e.g. `gendata_points::generator`).
pub static TARGET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("Invalid log target regex pattern")
});

/// Accepted image dimensions, in pixels.
pub const DIMENSION_RANGE: std::ops::RangeInclusive<u32> = 100..=10_000;
/// Accepted marker radii, in pixels.
pub const POINT_SIZE_RANGE: std::ops::RangeInclusive<u32> = 1..=50;
/// Output extensions the renderer can write.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["png", "svg"];

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let output = &config.output;
        let extension = output
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension {
            Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => {
                return Err(invalid(
                    "output.path",
                    format!(
                        "'{}' must end in .png or .svg",
                        output.path.display()
                    ),
                ))
            }
        }

        check_dimension("output.width", output.width)?;
        check_dimension("output.height", output.height)?;

        let style = &config.style;
        check_color("style.background_color", &style.background_color)?;
        check_color("style.point_color", &style.point_color)?;

        if !POINT_SIZE_RANGE.contains(&style.point_size) {
            return Err(invalid(
                "style.point_size",
                format!(
                    "{} is outside {}..={}",
                    style.point_size,
                    POINT_SIZE_RANGE.start(),
                    POINT_SIZE_RANGE.end()
                ),
            ));
        }

        if style.font_family.trim().is_empty() {
            return Err(invalid("style.font_family", "must not be empty"));
        }
        if style.title_font_size == 0 || style.label_font_size == 0 {
            return Err(invalid("style", "font sizes must be positive"));
        }

        validate_log_level(&config.logging.level)
    }
}

/// Checks a level filter: comma separated directives, each a bare level, a
/// bare target (enables every level for it), or `target=level`.
pub fn validate_log_level(level: &str) -> Result<(), ConfigError> {
    let valid = !level.trim().is_empty() && level.split(',').map(str::trim).all(valid_directive);

    if valid {
        Ok(())
    } else {
        Err(invalid("logging.level", format!("unknown log level '{level}'")))
    }
}

fn valid_directive(directive: &str) -> bool {
    match directive.rsplit_once('=') {
        Some((target, level)) => {
            TARGET_REGEX.is_match(target)
                && LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
        }
        None => {
            LOG_LEVELS.contains(&directive.to_ascii_lowercase().as_str())
                || TARGET_REGEX.is_match(directive)
        }
    }
}

fn check_dimension(field: &str, value: u32) -> Result<(), ConfigError> {
    if DIMENSION_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(invalid(
            field,
            format!(
                "{value} is outside {}..={}",
                DIMENSION_RANGE.start(),
                DIMENSION_RANGE.end()
            ),
        ))
    }
}

fn check_color(field: &str, value: &str) -> Result<(), ConfigError> {
    if HEX_COLOR_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(invalid(field, format!("'{value}' is not a #RRGGBB color")))
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        field: field.to_string(),
        message: message.into(),
    }
}
