//! Logging Tests

use brickyard_domain::error::Error;
use brickyard_infrastructure::constants::DEFAULT_LOG_LEVEL;
use brickyard_infrastructure::logging::{init_logging, parse_log_level, LoggingConfig};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("verbose").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
}

#[test]
fn test_second_logger_install_is_a_configuration_error() {
    let config = LoggingConfig::default();
    let _ = init_logging(&config);

    let result = init_logging(&config);

    assert!(matches!(
        result,
        Err(Error::Configuration { source: Some(_), .. })
    ));
}
