//! Service Registry Tests (lazy resolution)

use std::rc::Rc;

use brickyard_domain::{ClassMetadata, ConstructionError, Error, Parameter};
use brickyard_infrastructure::{ServiceConfigurationLoader, ServiceLocator, ServiceRegistry};
use tempfile::TempDir;

use crate::test_utils::{
    clock_class, greeter_class, pager_class, ping_class, pong_class, registry, service, Clock,
    Greeter, Notifier, Pager, Ping,
};

#[test]
fn test_get_never_constructs() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());
    assert!(registry.register(service(clock_class(), temp.path())));

    assert!(!registry.has::<Clock>());
    assert!(registry.get::<Clock>().is_none());

    assert!(registry.resolve::<Clock>().unwrap().is_some());
    assert!(registry.has::<Clock>());
    assert!(registry.get::<Clock>().is_some());
}

#[test]
fn test_resolve_builds_dependencies_recursively() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());
    registry.register(service(greeter_class(), temp.path()));
    registry.register(service(pager_class(), temp.path()));

    let greeter = registry.resolve::<Greeter>().unwrap().unwrap();

    assert_eq!(greeter.greet("ann"), "page: hello ann");
    assert!(registry.has::<Pager>());
    assert_eq!(registry.materialized().len(), 2);
}

#[test]
fn test_resolve_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());
    registry.register(service(clock_class(), temp.path()));

    let first = registry.resolve::<Clock>().unwrap().unwrap();
    let second = registry.resolve::<Clock>().unwrap().unwrap();
    let existing = registry.get::<Clock>().unwrap();

    assert!(Rc::ptr_eq(&first, &second));
    assert!(Rc::ptr_eq(&first, &existing));
}

#[test]
fn test_interface_lookup_returns_none_without_provider() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());
    registry.register(service(clock_class(), temp.path()));

    assert!(registry.get::<dyn Notifier>().is_none());
    assert!(registry.resolve::<dyn Notifier>().unwrap().is_none());
}

#[test]
fn test_interface_lookup_by_trait_object() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());
    registry.register(service(pager_class(), temp.path()));

    let notifier = registry.resolve::<dyn Notifier>().unwrap().unwrap();
    assert_eq!(notifier.notify("disk full"), "page: disk full");
}

#[test]
fn test_lazy_cycle_is_reported() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());
    registry.register(service(ping_class(), temp.path()));
    registry.register(service(pong_class(), temp.path()));
    registry.register(service(clock_class(), temp.path()));

    let error = match registry.resolve::<Ping>() {
        Err(error) => error,
        Ok(_) => panic!("cyclic services must not resolve"),
    };
    let Error::CyclicDependency { chain } = &error else {
        panic!("expected a cyclic dependency, got {error}");
    };
    assert_eq!(chain.len(), 3);
    assert_eq!(chain.first(), chain.last());
    assert!(chain[0].ends_with("Ping"));
    assert!(chain[1].ends_with("Pong"));
    assert!(error.to_string().starts_with("Cyclic dependency detected"));

    // The guard unwinds: unrelated services still resolve
    assert!(registry.resolve::<Clock>().unwrap().is_some());
    assert!(!registry.has::<Ping>());
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());

    assert!(registry.register(service(clock_class(), temp.path())));
    assert!(!registry.register(service(clock_class(), temp.path())));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_add_instance() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());
    let pager = Rc::new(Pager);

    assert!(registry.add_instance(Rc::clone(&pager), pager_class()));
    assert!(Rc::ptr_eq(&registry.get::<Pager>().unwrap(), &pager));
    assert!(registry.get::<dyn Notifier>().is_some());

    // The class must describe the instance type
    assert!(!registry.add_instance(Rc::new(Clock), pager_class()));
}

#[test]
fn test_abstract_service_is_never_built() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());
    let class = ClassMetadata::of::<Clock>().service().abstract_class().build();
    registry.register(service(class, temp.path()));

    assert!(registry.resolve::<Clock>().unwrap().is_none());
}

#[test]
fn test_primitive_parameter_is_unresolvable() {
    struct Server {
        port: u16,
    }

    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());
    let class = ClassMetadata::of::<Server>()
        .service()
        .constructor(vec![Parameter::primitive::<u16>("port")], |_| {
            Ok(Server { port: 8080 })
        })
        .build();
    registry.register(service(class, temp.path()));

    let server = registry.resolve::<Server>().unwrap();
    assert!(server.map(|server| server.port).is_none());
}

#[test]
fn test_failed_constructor_is_not_ready() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());
    let class = ClassMetadata::of::<Clock>()
        .service()
        .constructor(Vec::new(), |_| Err(ConstructionError::new("clock unavailable")))
        .build();
    registry.register(service(class, temp.path()));

    assert!(registry.resolve::<Clock>().unwrap().is_none());
    assert!(!registry.has::<Clock>());
}

#[test]
fn test_shutdown_drops_everything() {
    let temp = TempDir::new().unwrap();
    let registry = registry(temp.path());
    registry.register(service(clock_class(), temp.path()));
    let clock = registry.resolve::<Clock>().unwrap().unwrap();

    registry.shutdown();

    assert!(registry.is_empty());
    assert!(registry.get::<Clock>().is_none());
    assert_eq!(Rc::strong_count(&clock), 1);
}

#[test]
fn test_shared_registry_stores_itself() {
    let temp = TempDir::new().unwrap();
    let registry = ServiceRegistry::shared(ServiceConfigurationLoader::new(temp.path(), None));
    assert!(registry.register(service(clock_class(), temp.path())));

    let locator = registry.get::<ServiceLocator>().unwrap();
    assert!(Rc::ptr_eq(&locator.registry().unwrap(), &registry));
    assert!(locator.resolve::<Clock>().unwrap().is_some());
    assert!(locator.has::<Clock>());

    // The locator does not keep the registry alive
    drop(registry);
    assert!(locator.registry().is_none());
    assert!(locator.get::<Clock>().is_none());
    assert!(matches!(locator.resolve::<Clock>(), Err(Error::Internal { .. })));
}
