//! Event bus
//!
//! Routes an event to the listeners registered for its runtime type, in
//! registration order. Listener services are fetched from the registry,
//! and built on demand if they do not exist yet.
//!
//! The bus holds a weak handle on the registry, which itself owns the bus
//! as a built-in service.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use brickyard_domain::error::{Error, Result};
use brickyard_domain::ports::EventDispatcher;
use brickyard_domain::ServiceRepresentation;
use tracing::{debug, warn};

use super::listener_table::ListenerTable;
use crate::di::ServiceRegistry;

/// In-process event bus
pub struct EventBus {
    registry: Weak<ServiceRegistry>,
    table: RefCell<ListenerTable>,
}

impl EventBus {
    /// Bus resolving listener services through `registry`
    pub fn new(registry: &Rc<ServiceRegistry>) -> Self {
        Self {
            registry: Rc::downgrade(registry),
            table: RefCell::new(ListenerTable::new()),
        }
    }

    /// Replace the listener table with one built from `services`
    pub fn load_listeners(&self, services: &[ServiceRepresentation]) -> Result<()> {
        let table = ListenerTable::load(services)?;
        debug!(
            listeners = table.len(),
            events = table.event_count(),
            "Listener table built"
        );
        *self.table.borrow_mut() = table;
        Ok(())
    }

    /// Total number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.table.borrow().len()
    }

    /// Dispatch `event` and return it once every listener has run
    pub fn dispatch<E: 'static>(&self, mut event: E) -> Result<E> {
        self.dispatch_dyn(&mut event)?;
        Ok(event)
    }
}

impl EventDispatcher for EventBus {
    fn dispatch_dyn(&self, event: &mut dyn Any) -> Result<()> {
        let event_type = (*event).type_id();
        let slots = self.table.borrow().listeners_for(event_type).to_vec();
        if slots.is_empty() {
            return Ok(());
        }

        let registry = self
            .registry
            .upgrade()
            .ok_or_else(|| Error::internal("Event dispatched after the service registry was dropped"))?;

        for slot in slots {
            match registry.instance_of(slot.service)? {
                Some(service) => slot.method.invoke(&*service, event),
                None => warn!(
                    service = %slot.service,
                    method = slot.method.name(),
                    "Listener service unavailable"
                ),
            }
        }
        Ok(())
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.table.borrow().len())
            .finish_non_exhaustive()
    }
}
