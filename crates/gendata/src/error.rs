//! Application-wide error types using thiserror.

use gendata_common::GenDataError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or logging could not start.
    #[error("Startup failed")]
    Config(#[source] GenDataError),

    /// The generator refused the range or failed to sample.
    #[error("Generation failed")]
    Generate(#[source] GenDataError),

    /// The renderer could not draw or write the chart.
    #[error("Rendering failed")]
    Render(#[source] GenDataError),
}

impl AppError {
    /// The underlying library error.
    #[must_use]
    pub const fn inner(&self) -> &GenDataError {
        match self {
            Self::Config(e) | Self::Generate(e) | Self::Render(e) => e,
        }
    }
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_wraps_library_error() {
        let err = AppError::Generate(GenDataError::invalid_range_order(100, 0));
        assert_eq!(err.to_string(), "Generation failed");
        assert!(err.inner().is_validation());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_chain_prints_each_cause_once() {
        let err = anyhow::Error::new(AppError::Render(GenDataError::graph("disk full")));
        let chain = format!("{err:#}");
        assert_eq!(chain, "Rendering failed: Graph error: disk full");
        assert_eq!(chain.matches("disk full").count(), 1);
    }
}
