//! Environment and Runtime Settings Tests

use std::fs;

use brickyard_domain::ports::EnvironmentService;
use brickyard_infrastructure::config::LoggingConfig;
use brickyard_infrastructure::{Environment, RuntimeMode, RuntimeSettings};
use tempfile::TempDir;

#[test]
fn test_environment_keys_are_case_insensitive() {
    let environment = Environment::from_pairs([("Cache_Dir", "/tmp/cache")]);

    assert_eq!(environment.get("CACHE_DIR").as_deref(), Some("/tmp/cache"));
    assert_eq!(environment.get("cache_dir").as_deref(), Some("/tmp/cache"));
    assert!(environment.has("Cache_Dir"));
    assert!(!environment.has("CONFIG_DIR"));
}

#[test]
fn test_environment_get_or() {
    let environment = Environment::from_pairs([("MODE", "DEV")]);

    assert_eq!(environment.get_or("MODE", "PROD"), "DEV");
    assert_eq!(environment.get_or("CONFIG_DIR", "config"), "config");
}

#[test]
fn test_environment_reads_dotenv_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".env.toml"),
        "BRICKYARD_TEST_GREETING = \"hello\"\nbrickyard_test_retries = 3\n",
    )
    .unwrap();

    let environment = Environment::load(temp.path());

    assert_eq!(
        environment.get("BRICKYARD_TEST_GREETING").as_deref(),
        Some("hello")
    );
    assert_eq!(
        environment.get("brickyard_test_greeting").as_deref(),
        Some("hello")
    );
    assert_eq!(
        environment.get("BRICKYARD_TEST_RETRIES").as_deref(),
        Some("3")
    );
}

#[test]
fn test_environment_without_dotenv_file() {
    let temp = TempDir::new().unwrap();
    let environment = Environment::load(temp.path());

    assert!(!environment.has("BRICKYARD_TEST_UNSET_KEY"));
}

#[test]
fn test_runtime_mode_parsing() {
    assert_eq!(RuntimeMode::parse("PROD"), RuntimeMode::Production);
    assert_eq!(RuntimeMode::parse("DEV"), RuntimeMode::Development);
    assert_eq!(RuntimeMode::parse("dev"), RuntimeMode::Disabled);
    assert_eq!(RuntimeMode::parse("TEST"), RuntimeMode::Disabled);
}

#[test]
fn test_runtime_settings_defaults() {
    let settings = RuntimeSettings::from_environment(&Environment::from_pairs(
        std::iter::empty::<(String, String)>(),
    ));

    assert_eq!(settings, RuntimeSettings::default());
    assert_eq!(settings.mode, RuntimeMode::Production);
}

#[test]
fn test_runtime_settings_from_environment() {
    let environment = Environment::from_pairs([
        ("MODE", "DEV"),
        ("CACHE_DIR", "var/cache"),
        ("CONFIG_DIR", ""),
    ]);

    let settings = RuntimeSettings::from_environment(&environment);

    assert_eq!(settings.mode, RuntimeMode::Development);
    assert_eq!(settings.cache_dir.as_deref(), Some("var/cache"));
    assert_eq!(settings.config_dir, None);
}

#[test]
fn test_logging_config_from_environment() {
    let config = LoggingConfig::from_environment(&Environment::from_pairs([
        ("LOG_LEVEL", "debug"),
        ("LOG_FORMAT", "JSON"),
    ]));
    assert_eq!(config.level, "debug");
    assert!(config.json_format);

    let config = LoggingConfig::from_environment(&Environment::from_pairs([("LOG_FORMAT", "plain")]));
    assert_eq!(config, LoggingConfig::default());
}

#[test]
fn test_process_values_are_kept_verbatim() {
    let temp = TempDir::new().unwrap();
    std::env::set_var("BRICKYARD_TEST_PADDED_DIR", "007");
    std::env::set_var("BRICKYARD_TEST_VERSION", "1.10");
    std::env::set_var("BRICKYARD_TEST_BRACKETED", "[cfg]");
    std::env::set_var("BRICKYARD_TEST_FLAG", "true");

    let environment = Environment::load(temp.path());

    assert_eq!(
        environment.get("BRICKYARD_TEST_PADDED_DIR").as_deref(),
        Some("007")
    );
    assert_eq!(environment.get("BRICKYARD_TEST_VERSION").as_deref(), Some("1.10"));
    assert_eq!(
        environment.get("brickyard_test_bracketed").as_deref(),
        Some("[cfg]")
    );
    assert_eq!(environment.get("BRICKYARD_TEST_FLAG").as_deref(), Some("true"));
}

#[test]
fn test_process_environment_overrides_dotenv_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".env.toml"),
        "brickyard_test_override = \"from file\"\n",
    )
    .unwrap();
    std::env::set_var("BRICKYARD_TEST_OVERRIDE", "from process");

    let environment = Environment::load(temp.path());

    assert_eq!(
        environment.get("BRICKYARD_TEST_OVERRIDE").as_deref(),
        Some("from process")
    );
}
