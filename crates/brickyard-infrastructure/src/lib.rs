//! # Infrastructure Layer
//!
//! Runtime machinery that turns brick metadata into running services.
//!
//! ## Module Categories
//!
//! ### Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Catalog builder, service registry, resolution engine, [`Core`] |
//! | [`events`] | Listener table and in-process event bus |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Environment, runtime settings, service configuration files |
//! | [`constants`] | Environment keys and defaults |
//!
//! ### Data & Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Mode-based provider selection and typed cache access |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

// Cache providers register themselves through linkme
extern crate brickyard_providers;

pub mod cache;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod events;
pub mod logging;

pub use cache::SharedCache;
pub use config::{Environment, RuntimeMode, RuntimeSettings, ServiceConfigurationLoader};
pub use di::{
    build_catalog, CatalogOptions, Core, CoreBuilder, LinkedBricksFeed, ServiceLocator,
    ServiceRegistry, StaticFeed,
};
pub use error_ext::ErrorContext;
pub use events::EventBus;
