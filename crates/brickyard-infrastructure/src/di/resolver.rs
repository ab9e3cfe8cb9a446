//! Construction attempts
//!
//! One primitive shared by lazy lookups and the eager bootstrap: build the
//! service at a registry index from its declared constructor, resolving
//! every named parameter through the registry (recursively) or, for the
//! service's own configuration type, through the configuration loader.
//!
//! Outcomes other than a hard error:
//!
//! | Outcome | Cause |
//! |---------|-------|
//! | `Ready` | instance built and stored |
//! | `NotReady` | abstract type, primitive or untyped parameter, unavailable dependency, failed constructor |
//! | `Cyclic` | a type currently under construction was requested again |

use brickyard_domain::error::Result;
use brickyard_domain::metadata::{Arguments, Instantiation, ParameterType};
use brickyard_domain::{Instance, ServiceRepresentation};
use tracing::debug;

use super::registry::ServiceRegistry;

/// Outcome of one construction attempt
#[derive(Debug, Clone)]
pub(crate) enum Resolution {
    /// The instance exists
    Ready(Instance),
    /// Cannot be built now; may succeed once other services exist
    NotReady,
    /// Construction chain that looped, outermost first
    Cyclic(Vec<String>),
}

impl ServiceRegistry {
    /// Build the entry at `index` unless it already has an instance
    pub(crate) fn materialize(&self, index: usize) -> Result<Resolution> {
        let representation = {
            let entries = self.entries.borrow();
            let entry = &entries[index];
            if let Some(instance) = &entry.instance {
                return Ok(Resolution::Ready(instance.clone()));
            }
            entry.representation.clone()
        };

        let key = representation.service_type();
        if self.in_progress.borrow().contains(&key) {
            let mut chain: Vec<String> = self
                .in_progress
                .borrow()
                .iter()
                .map(|ty| ty.name().to_string())
                .collect();
            chain.push(key.name().to_string());
            debug!(service = %key, chain = %chain.join(" -> "), "Cyclic dependency");
            return Ok(Resolution::Cyclic(chain));
        }

        self.in_progress.borrow_mut().push(key);
        let outcome = self.construct(&representation);
        self.in_progress.borrow_mut().pop();

        let outcome = outcome?;
        if let Resolution::Ready(instance) = &outcome {
            self.entries.borrow_mut()[index].instance = Some(instance.clone());
            debug!(service = %key, "Service instantiated");
        }
        Ok(outcome)
    }

    fn construct(&self, service: &ServiceRepresentation) -> Result<Resolution> {
        let (parameters, invoke) = match service.class().instantiation() {
            Instantiation::Abstract => {
                debug!(service = %service.name(), "Service type cannot be instantiated");
                return Ok(Resolution::NotReady);
            }
            Instantiation::Direct(make) => return Ok(Resolution::Ready(make())),
            Instantiation::Constructor { parameters, invoke } => (parameters, invoke),
        };

        let mut arguments = Arguments::new();
        for parameter in parameters {
            let key = match parameter.ty() {
                ParameterType::Named(key) => key,
                ParameterType::Primitive(_) | ParameterType::Untyped => {
                    debug!(
                        service = %service.name(),
                        parameter = parameter.name(),
                        "Parameter cannot be supplied"
                    );
                    return Ok(Resolution::NotReady);
                }
            };

            match self.resolve_key(key) {
                Ok(Some(value)) => {
                    arguments.push(value);
                    continue;
                }
                Ok(None) => {}
                Err(brickyard_domain::Error::CyclicDependency { chain }) => {
                    return Ok(Resolution::Cyclic(chain));
                }
                Err(e) => return Err(e),
            }

            if service.configuration_type() == Some(key) {
                arguments.push(self.configuration.load(service)?);
            } else {
                debug!(
                    service = %service.name(),
                    dependency = %key,
                    "Dependency not available"
                );
                return Ok(Resolution::NotReady);
            }
        }

        match invoke(&mut arguments) {
            Ok(instance) => Ok(Resolution::Ready(instance)),
            Err(e) => {
                debug!(service = %service.name(), error = %e, "Constructor failed");
                Ok(Resolution::NotReady)
            }
        }
    }
}
