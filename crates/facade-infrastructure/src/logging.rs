//! Structured Logging
//!
//! Installs the global `tracing` subscriber used by the facade layer. Every
//! resolution, swap, clear and mock installation emits a `debug!` event, so
//! `FACADE_LOG=facade_infrastructure=debug` is usually enough to follow what
//! a facade forwarded to and why.
//!
//! ## Configuration
//!
//! | Field | Effect |
//! |-------|--------|
//! | `level` | Default filter when `FACADE_LOG` is unset |
//! | `json_format` | JSON lines instead of the human-readable format |
//! | `file_output` | Also write to a daily-rolling file next to this path |
//! | `max_files` | Rolled files kept before the oldest is deleted |
//!
//! ```toml
//! [logging]
//! level = "debug"
//! file_output = "logs/facade.log"
//! max_files = 7
//! ```

use facade_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::{LOG_ENV_FILTER, LOG_FILE_STEM};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// The `FACADE_LOG` environment variable, when set, overrides the configured
/// level with a full `EnvFilter` directive. A subscriber installed earlier
/// (by a test harness, or a host application) is kept.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_FILTER).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = match &config.file_output {
        Some(path) => Some(file_appender(path, config.max_files)?),
        None => None,
    };

    // Formatter types differ, so each output shape gets its own branch
    let registry = Registry::default().with(filter);
    let initialized = if config.json_format {
        let stdout = fmt::layer().json().with_target(true).with_line_number(true);
        match file_appender {
            Some(appender) => {
                let file = fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(stdout).with(file).try_init()
            }
            None => registry.with(stdout).try_init(),
        }
    } else {
        let stdout = fmt::layer().with_target(true).with_line_number(true);
        match file_appender {
            Some(appender) => {
                let file = fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(stdout).with(file).try_init()
            }
            None => registry.with(stdout).try_init(),
        }
    };

    if let Err(e) = initialized {
        warn!(error = %e, "Global subscriber already installed, keeping it");
        return Ok(());
    }

    info!(%level, json = config.json_format, "Logging initialized");
    Ok(())
}

/// Daily-rolling appender writing next to `path`, keeping `max_files` rolled files
///
/// The file stem of `path` becomes the filename prefix; rolled files are
/// suffixed with their date.
pub fn file_appender(path: &Path, max_files: usize) -> Result<RollingFileAppender> {
    if max_files == 0 {
        return Err(Error::configuration(
            "logging.max_files must keep at least one file",
        ));
    }

    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(LOG_FILE_STEM))
        .to_string_lossy()
        .into_owned();

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .max_log_files(max_files)
        .build(directory)
        .map_err(|e| {
            Error::io_with_source(
                format!("Failed to open log file in {}", directory.display()),
                e,
            )
        })
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(Error::configuration(format!(
            "Invalid log level '{other}', expected one of trace, debug, info, warn, error"
        ))),
    }
}

/// Report whether the configuration file at `config_path` was read
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        warn!(path = %config_path.display(), "Configuration file not found, using defaults");
    }
}
