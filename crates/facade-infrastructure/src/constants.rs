//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "facade.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "facade";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "FACADE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_FILTER: &str = "FACADE_LOG";

/// Rolled log files kept by default
pub const LOG_MAX_FILES: usize = 5;

/// Default log file stem when the configured path has none
pub const LOG_FILE_STEM: &str = "facade";

// ============================================================================
// SERVICE ACCESSOR CONSTANTS
// ============================================================================

/// Accessor key of the clock service
pub const CLOCK_ACCESSOR: &str = "clock";

/// Accessor key of the log service
pub const LOG_ACCESSOR: &str = "log";

/// Accessor key of the cache service
pub const CACHE_ACCESSOR: &str = "cache";

// ============================================================================
// PACKAGE CONSTANTS
// ============================================================================

/// Package name under which this crate registers its facade aliases
pub const CORE_PACKAGE: &str = "facade-infrastructure";
