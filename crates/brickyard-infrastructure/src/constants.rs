//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `brickyard_domain::constants`.

// ============================================================================
// ENVIRONMENT KEYS
// ============================================================================

/// Runtime mode selecting the cache backend
pub const ENV_MODE: &str = "MODE";

/// Filesystem cache root, absolute or relative to the install root
pub const ENV_CACHE_DIR: &str = "CACHE_DIR";

/// Application-level configuration directory, absolute or relative to the install root
pub const ENV_CONFIG_DIR: &str = "CONFIG_DIR";

/// Default log level
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Log output format ("json" or "plain")
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// File merged under the process environment, relative to the install root
pub const DOTENV_FILENAME: &str = ".env.toml";

// ============================================================================
// RUNTIME MODES
// ============================================================================

/// Production mode value
pub const MODE_PRODUCTION: &str = "PROD";

/// Development mode value
pub const MODE_DEVELOPMENT: &str = "DEV";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_FILTER_ENV: &str = "BRICKYARD_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log format value selecting JSON output
pub const LOG_FORMAT_JSON: &str = "json";
