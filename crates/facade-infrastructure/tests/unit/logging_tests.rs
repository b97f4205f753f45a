//! Logging Tests

use facade_infrastructure::constants::{DEFAULT_LOG_LEVEL, LOG_MAX_FILES};
use facade_infrastructure::logging::{LoggingConfig, file_appender, init_logging, parse_log_level};
use std::io::Write;
use tempfile::TempDir;
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    let err = parse_log_level("invalid").unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
    assert_eq!(config.max_files, LOG_MAX_FILES);
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(config).is_err());
}

#[test]
fn test_init_logging_tolerates_existing_subscriber() {
    init_logging(LoggingConfig::default()).unwrap();
    init_logging(LoggingConfig::default()).unwrap();
}

#[test]
fn test_file_appender_writes_under_configured_stem() {
    let dir = TempDir::new().unwrap();
    let mut appender = file_appender(&dir.path().join("service.log"), 3).unwrap();

    appender.write_all(b"resolved clock\n").unwrap();
    appender.flush().unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("service"));
}

#[test]
fn test_file_appender_requires_retained_files() {
    let dir = TempDir::new().unwrap();
    let err = file_appender(&dir.path().join("service.log"), 0).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_init_logging_rejects_zero_retention_with_file_output() {
    let dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        file_output: Some(dir.path().join("service.log")),
        max_files: 0,
        ..LoggingConfig::default()
    };
    assert!(init_logging(config).is_err());
}
