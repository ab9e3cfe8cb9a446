//! Service composition
//!
//! - [`catalog`]: brick catalog built from a metadata feed
//! - [`registry`]: the service registry and its lazy lookups
//! - [`locator`]: weak registry handle services can depend on
//! - eager bootstrap and construction attempts, as registry methods
//! - [`bootstrap`]: the [`Core`] composition root

pub mod bootstrap;
pub mod catalog;
mod fixpoint;
pub mod locator;
pub mod registry;
mod resolver;

pub use bootstrap::{Core, CoreBuilder};
pub use catalog::{build_catalog, CatalogOptions, LinkedBricksFeed, StaticFeed};
pub use locator::ServiceLocator;
pub use registry::ServiceRegistry;
