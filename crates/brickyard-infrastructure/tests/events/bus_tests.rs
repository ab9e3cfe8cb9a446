//! Event Dispatch Tests

use std::rc::Rc;

use brickyard_domain::ports::EventDispatcher;
use brickyard_domain::Error;
use brickyard_infrastructure::EventBus;
use tempfile::TempDir;

use crate::test_utils::{
    audit_log_class, registry, services, welcome_class, AuditLog, UserCreated, UserDeleted,
};

#[test]
fn test_dispatch_runs_listeners_in_registration_order() {
    let temp = TempDir::new().unwrap();
    let registry = Rc::new(registry(temp.path()));
    registry
        .bootstrap(&services(vec![audit_log_class(), welcome_class()], temp.path()))
        .unwrap();
    let bus = EventBus::new(&registry);
    bus.load_listeners(&registry.materialized()).unwrap();

    let event = bus.dispatch(UserCreated::named("ann")).unwrap();

    assert_eq!(event.seen_by, ["audit", "welcome"]);
    assert_eq!(event.name, "welcome ann");
    let audit = registry.get::<AuditLog>().unwrap();
    assert_eq!(*audit.entries.borrow(), ["ann"]);
}

#[test]
fn test_listeners_see_earlier_mutations() {
    let temp = TempDir::new().unwrap();
    let registry = Rc::new(registry(temp.path()));
    registry
        .bootstrap(&services(vec![welcome_class(), audit_log_class()], temp.path()))
        .unwrap();
    let bus = EventBus::new(&registry);
    bus.load_listeners(&registry.materialized()).unwrap();

    let event = bus.dispatch(UserCreated::named("ann")).unwrap();

    assert_eq!(event.seen_by, ["welcome", "audit"]);
    let audit = registry.get::<AuditLog>().unwrap();
    assert_eq!(*audit.entries.borrow(), ["welcome ann"]);
}

#[test]
fn test_event_without_listeners_passes_through() {
    let temp = TempDir::new().unwrap();
    let registry = Rc::new(registry(temp.path()));
    registry
        .bootstrap(&services(vec![audit_log_class()], temp.path()))
        .unwrap();
    let bus = EventBus::new(&registry);
    bus.load_listeners(&registry.materialized()).unwrap();

    bus.dispatch(UserDeleted).unwrap();
    let event = bus.dispatch(42_u32).unwrap();

    assert_eq!(event, 42);
    assert!(registry.get::<AuditLog>().unwrap().entries.borrow().is_empty());
}

#[test]
fn test_dispatch_through_port() {
    let temp = TempDir::new().unwrap();
    let registry = Rc::new(registry(temp.path()));
    registry
        .bootstrap(&services(vec![audit_log_class()], temp.path()))
        .unwrap();
    let bus = EventBus::new(&registry);
    bus.load_listeners(&registry.materialized()).unwrap();

    let dispatcher: &dyn EventDispatcher = &bus;
    let event = dispatcher.dispatch(UserCreated::named("bo")).unwrap();

    assert_eq!(event.seen_by, ["audit"]);
}

#[test]
fn test_listener_service_is_built_on_first_dispatch() {
    let temp = TempDir::new().unwrap();
    let registry = Rc::new(registry(temp.path()));
    for service in services(vec![audit_log_class()], temp.path()) {
        registry.register(service);
    }
    let bus = EventBus::new(&registry);
    bus.load_listeners(&registry.representations()).unwrap();
    assert_eq!(bus.listener_count(), 1);
    assert!(!registry.has::<AuditLog>());

    bus.dispatch(UserCreated::named("cy")).unwrap();

    assert!(registry.has::<AuditLog>());
}

#[test]
fn test_dispatch_after_registry_is_gone() {
    let temp = TempDir::new().unwrap();
    let registry = Rc::new(registry(temp.path()));
    registry
        .bootstrap(&services(vec![audit_log_class()], temp.path()))
        .unwrap();
    let bus = EventBus::new(&registry);
    bus.load_listeners(&registry.materialized()).unwrap();
    drop(registry);

    let error = bus.dispatch(UserCreated::named("di")).unwrap_err();

    assert!(matches!(error, Error::Internal { .. }));
}
