//! Integration tests for gendata-common crate.

use gendata_common::{build_env_filter, GenDataError, LogFormat, LoggingConfig};
use std::error::Error;

#[test]
fn test_validation_errors_are_classified() {
    assert!(GenDataError::invalid_range_type("got a string").is_validation());
    assert!(GenDataError::invalid_range_order(5, 5).is_validation());
    assert!(GenDataError::invalid_input("plain list").is_validation());
    assert!(GenDataError::NegativeBase { value: -3 }.is_validation());

    assert!(!GenDataError::graph("backend failed").is_validation());
    assert!(!GenDataError::config("bad file").is_validation());
}

#[test]
fn test_io_error_conversion_keeps_message() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let err: GenDataError = io.into();
    assert_eq!(err.to_string(), "I/O error: read-only");
}

#[test]
fn test_config_error_source_chain() {
    let cause = "nope".parse::<LogFormat>().unwrap_err();
    let err = GenDataError::config_with_source("logging section rejected", cause);
    let source = err.source().expect("source should be kept");
    assert!(source.to_string().contains("unknown log format 'nope'"));
}

#[test]
fn test_log_format_round_trips_through_display() {
    for format in [LogFormat::Pretty, LogFormat::Compact, LogFormat::Json] {
        assert_eq!(format.to_string().parse::<LogFormat>().unwrap(), format);
    }
    assert_eq!(" JSON ".parse::<LogFormat>().unwrap(), LogFormat::Json);
}

#[test]
fn test_env_filter_accepts_directives() {
    let config = LoggingConfig {
        level: "warn,gendata_points=debug".to_string(),
        ..LoggingConfig::default()
    };
    assert!(build_env_filter(&config.level).is_ok());
}
