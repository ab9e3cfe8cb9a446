//! Unit tests for domain error types

use brickyard_domain::Error;

#[test]
fn test_not_a_service_configuration_names_both_types() {
    let error = Error::not_a_service_configuration("acme::MailerConfig", "acme::Mailer");
    let display = error.to_string();
    assert!(display.contains("acme::MailerConfig"));
    assert!(display.contains("acme::Mailer"));
    assert!(error.is_startup_fatal());
}

#[test]
fn test_services_cannot_be_loaded_lists_every_service() {
    let error = Error::services_cannot_be_loaded(["acme::A", "acme::B"]);
    match &error {
        Error::ServicesCannotBeLoaded { services } => {
            assert_eq!(services, &vec!["acme::A".to_string(), "acme::B".to_string()]);
        }
        _ => panic!("Expected ServicesCannotBeLoaded error"),
    }
    assert_eq!(error.to_string(), "Cannot load services: acme::A, acme::B");
}

#[test]
fn test_configuration_file_format_invalid_keeps_source() {
    let yaml_error = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
    let error = Error::configuration_file_format_invalid("acme::Mailer", yaml_error);

    assert!(error.is_configuration_fatal());
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_configuration_file_not_found() {
    let error = Error::configuration_file_not_found("acme::Mailer");
    match error {
        Error::ServiceConfigurationFileNotFound { service } => assert_eq!(service, "acme::Mailer"),
        _ => panic!("Expected ServiceConfigurationFileNotFound error"),
    }
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("Invalid input provided");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "Invalid input provided"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_io_error_from_std() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: Error = io_error.into();
    match error {
        Error::Io { message, source } => {
            assert_eq!(message, "missing");
            assert!(source.is_some());
        }
        _ => panic!("Expected Io error"),
    }
}
