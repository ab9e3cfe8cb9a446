//! Eager bootstrap
//!
//! Relaxation over a worklist: every pass attempts each pending service
//! once, and the loop stops when the worklist is empty or a whole pass
//! builds nothing. Whatever is left is reported in one error, so a missing
//! dependency and a dependency cycle look the same to the caller.

use brickyard_domain::error::{Error, Result};
use brickyard_domain::{ServiceRepresentation, TypeKey};
use tracing::{debug, info, warn};

use super::registry::ServiceRegistry;

impl ServiceRegistry {
    /// Register `services` and instantiate all of them
    ///
    /// Fails with [`Error::ServicesCannotBeLoaded`] naming every service
    /// still unbuilt when a pass makes no progress. Configuration errors
    /// abort immediately.
    pub fn bootstrap(&self, services: &[ServiceRepresentation]) -> Result<()> {
        let mut worklist: Vec<TypeKey> = Vec::with_capacity(services.len());
        for service in services {
            let key = service.service_type();
            if self.register(service.clone()) || !worklist.contains(&key) {
                worklist.push(key);
            }
        }

        let mut pass = 0_usize;
        while !worklist.is_empty() {
            pass += 1;
            debug!(pass, pending = worklist.len(), "Resolution pass");

            let mut progress = false;
            let mut pending = Vec::new();
            for key in worklist {
                match self.instance_of(key) {
                    Ok(Some(_)) => progress = true,
                    Ok(None) => pending.push(key),
                    Err(Error::CyclicDependency { chain }) => {
                        debug!(service = %key, chain = %chain.join(" -> "), "Deferred by cycle");
                        pending.push(key);
                    }
                    Err(e) => return Err(e),
                }
            }

            if !progress {
                let names: Vec<&str> = pending.iter().map(TypeKey::name).collect();
                warn!(services = %names.join(", "), "Services cannot be loaded");
                return Err(Error::services_cannot_be_loaded(names));
            }
            worklist = pending;
        }

        info!(services = self.materialized().len(), passes = pass, "Services loaded");
        Ok(())
    }
}
