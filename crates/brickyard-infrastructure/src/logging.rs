//! Structured logging with tracing
//!
//! Centralized logging setup for binaries embedding the runtime. Library
//! code only emits `tracing` events; installing a subscriber is left to the
//! process entry point.

use brickyard_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;
use crate::error_ext::ErrorContext;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize logging with the provided configuration
///
/// `BRICKYARD_LOG` takes precedence over the configured level when it holds
/// a valid filter directive. Events are written to stderr. Fails if a
/// global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_lowercase()));

    // The layer types differ, so each format gets its own branch
    let initialized = if config.json_format {
        let output = fmt::layer().json().with_target(true).with_writer(std::io::stderr);
        Registry::default().with(filter).with(output).try_init()
    } else {
        let output = fmt::layer().with_target(true).with_writer(std::io::stderr);
        Registry::default().with(filter).with(output).try_init()
    };
    initialized.config_context("Failed to install logger")?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}
