//! Service Registry
//!
//! Single owned store of service representations and their instances,
//! keyed by concrete type. Lookups by interface walk the entries in
//! registration order and take the first one whose type can be viewed as
//! the requested type.
//!
//! The registry is single-threaded: it is shared through `Rc` and mutated
//! through `RefCell`, never across threads.
//!
//! ## Usage
//!
//! ```ignore
//! let registry = ServiceRegistry::shared(loader);
//! registry.bootstrap(&services)?;
//!
//! let notifier: Option<Rc<dyn Notifier>> = registry.get();
//! let mailer: Option<Rc<Mailer>> = registry.resolve()?;
//! ```

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

use brickyard_domain::error::{Error, Result};
use brickyard_domain::metadata::downcast_view;
use brickyard_domain::{ClassMetadata, Instance, ServiceAttribute, ServiceRepresentation, TypeKey};
use tracing::{debug, warn};

use super::locator::ServiceLocator;
use super::resolver::Resolution;
use crate::config::ServiceConfigurationLoader;

pub(crate) struct RegistryEntry {
    pub(crate) representation: ServiceRepresentation,
    pub(crate) instance: Option<Instance>,
}

/// Service registry
pub struct ServiceRegistry {
    pub(crate) entries: RefCell<Vec<RegistryEntry>>,
    pub(crate) in_progress: RefCell<Vec<TypeKey>>,
    pub(crate) configuration: ServiceConfigurationLoader,
}

impl ServiceRegistry {
    /// Create an empty registry loading service configuration through `configuration`
    pub fn new(configuration: ServiceConfigurationLoader) -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            in_progress: RefCell::new(Vec::new()),
            configuration,
        }
    }

    /// Create a shared registry that stores a [`ServiceLocator`] to itself
    pub fn shared(configuration: ServiceConfigurationLoader) -> Rc<Self> {
        let registry = Rc::new(Self::new(configuration));
        registry.add_instance(
            Rc::new(ServiceLocator::new(&registry)),
            ClassMetadata::of::<ServiceLocator>().build(),
        );
        registry
    }

    /// Service configuration loader
    pub fn configuration(&self) -> &ServiceConfigurationLoader {
        &self.configuration
    }

    /// Add a representation without instantiating it
    ///
    /// Returns false if the type is already registered.
    pub fn register(&self, representation: ServiceRepresentation) -> bool {
        let mut entries = self.entries.borrow_mut();
        let key = representation.service_type();
        if entries
            .iter()
            .any(|entry| entry.representation.service_type() == key)
        {
            warn!(service = %key, "Service already registered");
            return false;
        }
        debug!(service = %key, "Service registered");
        entries.push(RegistryEntry {
            representation,
            instance: None,
        });
        true
    }

    /// Add an already built instance described by `class`
    ///
    /// Returns false if the type is already registered.
    pub fn add_instance<T: 'static>(&self, instance: Rc<T>, class: ClassMetadata) -> bool {
        let key = class.ty();
        if key != TypeKey::of::<T>() {
            warn!(service = %key, instance = %TypeKey::of::<T>(), "Instance does not match its class");
            return false;
        }
        let representation =
            ServiceRepresentation::new(Rc::new(class), ServiceAttribute::new(), PathBuf::new());
        if !self.register(representation) {
            return false;
        }
        if let Some(entry) = self
            .entries
            .borrow_mut()
            .iter_mut()
            .find(|entry| entry.representation.service_type() == key)
        {
            entry.instance = Some(instance as Instance);
        }
        true
    }

    /// Whether an instance viewable as `T` exists
    pub fn has<T: ?Sized + 'static>(&self) -> bool {
        self.find_materialized(TypeKey::of::<T>()).is_some()
    }

    /// Existing instance viewable as `T`, never constructing one
    pub fn get<T: ?Sized + 'static>(&self) -> Option<Rc<T>> {
        self.find_materialized(TypeKey::of::<T>())
            .and_then(downcast_view::<T>)
    }

    /// Instance viewable as `T`, constructing it on demand
    ///
    /// `Ok(None)` means no registered service can be built right now.
    /// Requesting a type that is under construction is a
    /// [`Error::CyclicDependency`].
    pub fn resolve<T: ?Sized + 'static>(&self) -> Result<Option<Rc<T>>> {
        Ok(self
            .resolve_key(TypeKey::of::<T>())?
            .and_then(downcast_view::<T>))
    }

    /// Instance of the concrete service type `key`, constructing it on demand
    pub fn instance_of(&self, key: TypeKey) -> Result<Option<Instance>> {
        let index = self
            .entries
            .borrow()
            .iter()
            .position(|entry| entry.representation.service_type() == key);
        let Some(index) = index else {
            return Ok(None);
        };
        match self.materialize(index)? {
            Resolution::Ready(instance) => Ok(Some(instance)),
            Resolution::NotReady => Ok(None),
            Resolution::Cyclic(chain) => Err(Error::CyclicDependency { chain }),
        }
    }

    /// Representations holding an instance, in registration order
    pub fn materialized(&self) -> Vec<ServiceRepresentation> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.instance.is_some())
            .map(|entry| entry.representation.clone())
            .collect()
    }

    /// Every registered representation, in registration order
    pub fn representations(&self) -> Vec<ServiceRepresentation> {
        self.entries
            .borrow()
            .iter()
            .map(|entry| entry.representation.clone())
            .collect()
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether no service is registered
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Drop every entry and instance
    pub fn shutdown(&self) {
        let entries = std::mem::take(&mut *self.entries.borrow_mut());
        self.in_progress.borrow_mut().clear();
        debug!(services = entries.len(), "Service registry shut down");
        drop(entries);
    }

    /// First existing instance viewable as `key`
    pub(crate) fn find_materialized(&self, key: TypeKey) -> Option<Box<dyn Any>> {
        self.entries.borrow().iter().find_map(|entry| {
            let instance = entry.instance.as_ref()?;
            entry.representation.upcast(key, instance)
        })
    }

    /// Lazy lookup: existing instances first, then each candidate in
    /// registration order until one can be built
    pub(crate) fn resolve_key(&self, key: TypeKey) -> Result<Option<Box<dyn Any>>> {
        if let Some(view) = self.find_materialized(key) {
            return Ok(Some(view));
        }

        let candidates: Vec<usize> = self
            .entries
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.instance.is_none() && entry.representation.provides(key))
            .map(|(index, _)| index)
            .collect();

        let mut cycle = None;
        for index in candidates {
            match self.materialize(index)? {
                Resolution::Ready(instance) => {
                    let entries = self.entries.borrow();
                    return Ok(entries[index].representation.upcast(key, &instance));
                }
                Resolution::NotReady => {}
                Resolution::Cyclic(chain) => {
                    cycle.get_or_insert(chain);
                }
            }
        }

        match cycle {
            Some(chain) => Err(Error::CyclicDependency { chain }),
            None => Ok(None),
        }
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.borrow();
        let services: Vec<(&str, bool)> = entries
            .iter()
            .map(|entry| (entry.representation.name(), entry.instance.is_some()))
            .collect();
        f.debug_struct("ServiceRegistry")
            .field("services", &services)
            .finish_non_exhaustive()
    }
}
