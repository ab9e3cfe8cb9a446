//! Registry handle for services
//!
//! A service that needs the registry itself declares a
//! [`ServiceLocator`] constructor parameter. The locator only holds a weak
//! handle, so the registry storing it creates no reference cycle.

use std::fmt;
use std::rc::{Rc, Weak};

use brickyard_domain::error::{Error, Result};

use super::registry::ServiceRegistry;

/// Weak view of a [`ServiceRegistry`], registered as one of its services
#[derive(Clone)]
pub struct ServiceLocator {
    registry: Weak<ServiceRegistry>,
}

impl ServiceLocator {
    /// Locator over `registry`
    pub fn new(registry: &Rc<ServiceRegistry>) -> Self {
        Self {
            registry: Rc::downgrade(registry),
        }
    }

    /// The registry, unless it has been dropped
    pub fn registry(&self) -> Option<Rc<ServiceRegistry>> {
        self.registry.upgrade()
    }

    /// See [`ServiceRegistry::has`]
    pub fn has<T: ?Sized + 'static>(&self) -> bool {
        self.registry().is_some_and(|registry| registry.has::<T>())
    }

    /// See [`ServiceRegistry::get`]
    pub fn get<T: ?Sized + 'static>(&self) -> Option<Rc<T>> {
        self.registry()?.get::<T>()
    }

    /// See [`ServiceRegistry::resolve`]
    pub fn resolve<T: ?Sized + 'static>(&self) -> Result<Option<Rc<T>>> {
        self.registry()
            .ok_or_else(|| Error::internal("Service registry dropped"))?
            .resolve::<T>()
    }
}

impl fmt::Debug for ServiceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceLocator")
            .field("attached", &(self.registry.strong_count() > 0))
            .finish()
    }
}
