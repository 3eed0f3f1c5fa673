//! Error types and utilities for gendata.

use thiserror::Error;

/// Result type alias for gendata operations.
pub type Result<T> = std::result::Result<T, GenDataError>;

/// Main error type for gendata operations.
#[derive(Error, Debug)]
pub enum GenDataError {
    /// The range argument is not a pair of exactly two integers.
    #[error("Invalid range type: range must be a pair of two integers ({message})")]
    InvalidRangeType {
        /// What was wrong with the supplied value.
        message: String,
    },

    /// The lower bound is not strictly less than the upper bound.
    #[error("Invalid range order: lower bound must be less than upper bound (got {lo}..{hi})")]
    InvalidRangeOrder {
        /// Supplied lower bound.
        lo: i64,
        /// Supplied upper bound.
        hi: i64,
    },

    /// A negative x was met while negative bases are rejected.
    #[error("Negative base: x^1.5 is undefined for negative x (got {value})")]
    NegativeBase {
        /// The offending value, or the range's lower bound when rejected up front.
        value: i64,
    },

    /// The renderer was handed something that is not a valid dataset.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the supplied value.
        message: String,
    },

    /// Graph drawing and encoding errors.
    #[error("Graph error: {message}")]
    Graph {
        /// Human readable description.
        message: String,
        /// Underlying backend error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration related errors.
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description.
        message: String,
        /// Underlying parse or I/O error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A sampling distribution could not be built from its parameters.
    #[error("Sampling error: {message}")]
    Sampling {
        /// Human readable description.
        message: String,
        /// Underlying distribution error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// I/O related errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenDataError {
    /// Create a new range type error.
    pub fn invalid_range_type(msg: impl Into<String>) -> Self {
        Self::InvalidRangeType {
            message: msg.into(),
        }
    }

    /// Create a new range order error.
    #[must_use]
    pub const fn invalid_range_order(lo: i64, hi: i64) -> Self {
        Self::InvalidRangeOrder { lo, hi }
    }

    /// Create a new renderer input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }

    /// Create a new graph error.
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source.
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new sampling error.
    pub fn sampling(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Sampling {
            message: msg.into(),
            source: Box::new(source),
        }
    }

    /// Whether this error was raised by input validation, before any work happened.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidRangeType { .. }
                | Self::InvalidRangeOrder { .. }
                | Self::NegativeBase { .. }
                | Self::InvalidInput { .. }
        )
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to `GenDataError`.
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for GenDataError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_display_formatting() {
        let error = GenDataError::invalid_range_order(100, 0);
        assert_eq!(
            error.to_string(),
            "Invalid range order: lower bound must be less than upper bound (got 100..0)"
        );

        let error = GenDataError::invalid_range_type("expected 2 elements, got 3");
        assert!(error.to_string().contains("pair of two integers"));
        assert!(error.to_string().contains("got 3"));

        let error = GenDataError::invalid_input("data must be a table");
        assert_eq!(error.to_string(), "Invalid input: data must be a table");

        let error = GenDataError::sampling(
            "invalid noise distribution",
            io::Error::new(io::ErrorKind::InvalidInput, "std dev < 0"),
        );
        assert_eq!(error.to_string(), "Sampling error: invalid noise distribution");
        assert!(error.source().is_some());
        assert!(!error.is_validation());

        let error = GenDataError::config("missing field");
        assert_eq!(error.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_error_with_source() {
        let error = GenDataError::graph_with_source(
            "encode failed",
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        assert!(error.to_string().contains("Graph error"));
        assert!(error.source().is_some());

        assert!(GenDataError::graph("no source").source().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: GenDataError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_validation_classification() {
        assert!(GenDataError::invalid_range_type("x").is_validation());
        assert!(GenDataError::invalid_range_order(1, 1).is_validation());
        assert!(GenDataError::NegativeBase { value: -5 }.is_validation());
        assert!(GenDataError::invalid_input("x").is_validation());
        assert!(!GenDataError::graph("x").is_validation());
        assert!(!GenDataError::config("x").is_validation());
    }
}
