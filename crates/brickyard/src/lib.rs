//! # Brickyard
//!
//! Compose an application from bricks: packages that declare services,
//! their configuration and the events they listen to. The runtime discovers
//! the bricks linked into the binary, instantiates every service in
//! dependency order and wires the listeners to the event bus.
//!
//! ## Example
//!
//! ```ignore
//! use brickyard::Core;
//!
//! let mut core = Core::builder().install_root("/srv/app").build()?;
//! core.load()?;
//!
//! let mailer = core.services().get::<dyn Notifier>();
//! core.events().dispatch(UserCreated { id: 7 })?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - metadata records, representations, ports and errors
//! - `providers` - cache backends registered by name
//! - `infrastructure` - catalog, resolution engine, configuration, events

/// Domain layer - metadata, representations and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use brickyard_domain::*;
}

/// Provider layer - cache backends
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use brickyard_providers::*;
}

/// Infrastructure layer - composition root, configuration and events
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use brickyard_infrastructure::*;
}

pub mod report;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the composition root
pub use infrastructure::{
    Core, CoreBuilder, Environment, EventBus, ServiceLocator, ServiceRegistry, SharedCache,
};
pub use report::catalog_report;
