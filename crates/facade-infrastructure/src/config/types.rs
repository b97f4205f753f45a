//! Configuration types

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_MAX_FILES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,

    /// Daily files kept when logging to a file; older ones are deleted
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
            max_files: LOG_MAX_FILES,
        }
    }
}

/// Facade and alias configuration
///
/// ```toml
/// [facades]
/// discover_packages = true
/// dont_discover = ["some-package"]
///
/// [facades.aliases]
/// Cache = "facade_infrastructure::facades::Cache"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadesConfig {
    /// Explicit short name to fully-qualified facade type table
    ///
    /// Entries here win over package-provided aliases with the same name.
    pub aliases: BTreeMap<String, String>,

    /// Whether package manifests contribute aliases
    pub discover_packages: bool,

    /// Packages whose manifest aliases are ignored
    pub dont_discover: Vec<String>,
}

impl Default for FacadesConfig {
    fn default() -> Self {
        Self {
            aliases: BTreeMap::new(),
            discover_packages: true,
            dont_discover: Vec::new(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Facade configuration
    #[serde(default)]
    pub facades: FacadesConfig,
}
