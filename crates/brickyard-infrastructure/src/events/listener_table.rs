//! Listener table
//!
//! Event type → ordered (service → method) mapping. A service holds at
//! most one listener per event type: a later method for the same pair
//! replaces the earlier one in place.

use std::any::TypeId;
use std::collections::HashMap;

use brickyard_domain::error::{Error, Result};
use brickyard_domain::{MethodMetadata, ServiceRepresentation, TypeKey};
use tracing::debug;

/// One registered listener
#[derive(Debug, Clone)]
pub struct ListenerSlot {
    /// Concrete service type owning the method
    pub service: TypeKey,
    /// Listener method
    pub method: MethodMetadata,
}

/// Listener table, built once after services are materialised
#[derive(Debug, Default)]
pub struct ListenerTable {
    listeners: HashMap<TypeId, Vec<ListenerSlot>>,
}

impl ListenerTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `services` for listener methods
    ///
    /// A listener must take exactly one parameter of a named type.
    pub fn load(services: &[ServiceRepresentation]) -> Result<Self> {
        let mut table = Self::new();
        for service in services {
            for method in service.class().methods() {
                if !method.is_listener() {
                    continue;
                }
                let event = listener_event_type(service, method)?;
                debug!(
                    service = %service.name(),
                    method = method.name(),
                    event = %event,
                    "Event listener registered"
                );
                table.insert(event, service.service_type(), method.clone());
            }
        }
        Ok(table)
    }

    /// Register `method` of `service` for `event`
    pub fn insert(&mut self, event: TypeKey, service: TypeKey, method: MethodMetadata) {
        let slots = self.listeners.entry(event.id()).or_default();
        match slots.iter_mut().find(|slot| slot.service == service) {
            Some(slot) => slot.method = method,
            None => slots.push(ListenerSlot { service, method }),
        }
    }

    /// Listeners of `event`, in registration order
    pub fn listeners_for(&self, event: TypeId) -> &[ListenerSlot] {
        self.listeners.get(&event).map_or(&[], Vec::as_slice)
    }

    /// Number of event types with at least one listener
    pub fn event_count(&self) -> usize {
        self.listeners.len()
    }

    /// Total number of listeners
    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// Whether no listener is registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

fn listener_event_type(service: &ServiceRepresentation, method: &MethodMetadata) -> Result<TypeKey> {
    let [parameter] = method.parameters() else {
        return Err(Error::EventListenerWrongParameterAmount {
            service: service.name().to_string(),
            method: method.name().to_string(),
            count: method.parameters().len(),
        });
    };
    parameter
        .named_type()
        .ok_or_else(|| Error::EventListenerMissingEventType {
            service: service.name().to_string(),
            method: method.name().to_string(),
        })
}
