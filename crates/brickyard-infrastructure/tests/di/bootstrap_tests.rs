//! Eager Bootstrap Tests

use std::path::Path;

use brickyard_domain::{ClassMetadata, Error};
use tempfile::TempDir;

use crate::test_utils::{
    clock_class, greeter_class, mailer_class, orphan_class, pager_class, ping_class, pong_class,
    registry, services, write_config, Clock, Greeter, Mailer, Notifier, Orphan,
};

fn unloaded(error: Error) -> Vec<String> {
    match error {
        Error::ServicesCannotBeLoaded { services } => services,
        other => panic!("expected unloadable services, got {other}"),
    }
}

fn greet_with(classes: Vec<ClassMetadata>, root: &Path) -> String {
    let registry = registry(root);
    registry.bootstrap(&services(classes, root)).unwrap();
    registry.get::<Greeter>().unwrap().greet("bob")
}

#[test]
fn test_bootstrap_is_order_independent() {
    let temp = TempDir::new().unwrap();

    let consumer_first = greet_with(vec![greeter_class(), pager_class()], temp.path());
    let provider_first = greet_with(vec![pager_class(), greeter_class()], temp.path());

    assert_eq!(consumer_first, "page: hello bob");
    assert_eq!(consumer_first, provider_first);
}

#[test]
fn test_bootstrap_builds_every_service() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());

    registry
        .bootstrap(&services(
            vec![greeter_class(), clock_class(), pager_class()],
            temp.path(),
        ))
        .unwrap();

    assert_eq!(registry.materialized().len(), 3);
    assert!(registry.has::<Clock>());
}

#[test]
fn test_missing_dependency_fails_bootstrap() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());

    let error = registry
        .bootstrap(&services(vec![clock_class(), orphan_class()], temp.path()))
        .unwrap_err();

    let stuck = unloaded(error);
    assert_eq!(stuck.len(), 1);
    assert!(stuck[0].ends_with("Orphan"));
    assert!(registry.has::<Clock>());
    assert!(!registry.has::<Orphan>());
}

#[test]
fn test_cycle_fails_bootstrap_with_every_member() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());

    let error = registry
        .bootstrap(&services(
            vec![ping_class(), clock_class(), pong_class()],
            temp.path(),
        ))
        .unwrap_err();

    let message = error.to_string();
    let stuck = unloaded(error);
    assert_eq!(stuck.len(), 2);
    assert!(stuck.iter().any(|name| name.ends_with("Ping")));
    assert!(stuck.iter().any(|name| name.ends_with("Pong")));
    assert!(message.starts_with("Cannot load services"));
}

#[test]
fn test_first_registered_provider_wins() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "mailer.yml", "sender: ops");

    let registry = registry(temp.path());
    registry
        .bootstrap(&services(
            vec![mailer_class(), clock_class(), pager_class()],
            temp.path(),
        ))
        .unwrap();
    assert_eq!(registry.get::<dyn Notifier>().unwrap().notify("x"), "ops: x");

    let registry = crate::test_utils::registry(temp.path());
    registry
        .bootstrap(&services(
            vec![pager_class(), mailer_class(), clock_class()],
            temp.path(),
        ))
        .unwrap();
    assert_eq!(registry.get::<dyn Notifier>().unwrap().notify("x"), "page: x");
}

#[test]
fn test_configured_service_receives_its_configuration() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "mailer.yml", "sender: ops@example.com\nretries: 3\n");

    let registry = registry(temp.path());
    registry
        .bootstrap(&services(vec![mailer_class(), clock_class()], temp.path()))
        .unwrap();

    let mailer = registry.get::<Mailer>().unwrap();
    assert_eq!(mailer.config.sender, "ops@example.com");
    assert_eq!(mailer.config.retries, 3);
}

#[test]
fn test_missing_configuration_is_fatal() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());

    let error = registry
        .bootstrap(&services(vec![clock_class(), mailer_class()], temp.path()))
        .unwrap_err();

    assert!(matches!(
        error,
        Error::ServiceConfigurationFileNotFound { ref service } if service.ends_with("Mailer")
    ));
}

#[test]
fn test_malformed_configuration_aborts_bootstrap() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "mailer.yml", "sender: [ops@example.com\nretries: lots\n");
    let registry = registry(temp.path());

    let error = registry
        .bootstrap(&services(vec![mailer_class(), clock_class()], temp.path()))
        .unwrap_err();

    assert!(matches!(
        error,
        Error::ServiceConfigurationFileFormatInvalid { ref service, .. } if service.ends_with("Mailer")
    ));
    assert!(!registry.has::<Mailer>());
}

#[test]
fn test_mistyped_configuration_aborts_bootstrap() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "mailer.yml", "retries: lots\n");
    let registry = registry(temp.path());

    let error = registry
        .bootstrap(&services(vec![clock_class(), mailer_class()], temp.path()))
        .unwrap_err();

    assert!(matches!(
        error,
        Error::ServiceConfigurationFileFormatInvalid { .. }
    ));
}

#[test]
fn test_bootstrap_with_no_services() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());

    registry.bootstrap(&[]).unwrap();
    assert!(registry.is_empty());
}
