//! Runtime settings
//!
//! Typed view of the environment keys the runtime itself reads.

use brickyard_domain::ports::EnvironmentService;

use crate::constants::{
    DEFAULT_LOG_LEVEL, ENV_CACHE_DIR, ENV_CONFIG_DIR, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_MODE,
    LOG_FORMAT_JSON, MODE_DEVELOPMENT, MODE_PRODUCTION,
};

/// Runtime mode, selecting the cache backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeMode {
    /// `PROD`: persistent filesystem cache
    #[default]
    Production,
    /// `DEV`: in-memory cache
    Development,
    /// Any other value: caching disabled
    Disabled,
}

impl RuntimeMode {
    /// Parse a `MODE` value; comparison is exact
    pub fn parse(value: &str) -> Self {
        match value {
            MODE_PRODUCTION => Self::Production,
            MODE_DEVELOPMENT => Self::Development,
            _ => Self::Disabled,
        }
    }
}

/// Settings read from the environment at startup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuntimeSettings {
    /// Runtime mode (`MODE`, default `PROD`)
    pub mode: RuntimeMode,
    /// Cache root override (`CACHE_DIR`)
    pub cache_dir: Option<String>,
    /// Application configuration directory override (`CONFIG_DIR`)
    pub config_dir: Option<String>,
}

impl RuntimeSettings {
    /// Read the settings; empty values count as unset
    pub fn from_environment(environment: &dyn EnvironmentService) -> Self {
        let non_empty = |key: &str| environment.get(key).filter(|value| !value.is_empty());
        Self {
            mode: RuntimeMode::parse(&environment.get_or(ENV_MODE, MODE_PRODUCTION)),
            cache_dir: non_empty(ENV_CACHE_DIR),
            config_dir: non_empty(ENV_CONFIG_DIR),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Read `LOG_LEVEL` and `LOG_FORMAT`
    pub fn from_environment(environment: &dyn EnvironmentService) -> Self {
        Self {
            level: environment.get_or(ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL),
            json_format: environment
                .get(ENV_LOG_FORMAT)
                .is_some_and(|format| format.eq_ignore_ascii_case(LOG_FORMAT_JSON)),
        }
    }
}
