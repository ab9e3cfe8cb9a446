//! # Brickyard - Domain Layer
//!
//! Types shared by every layer of the composition runtime: the error
//! taxonomy, type identities, the class metadata bricks publish, the
//! service and brick representations built from it, the ports the outer
//! layers implement, and the compile-time registries.
//!
//! | Module | Contents |
//! |--------|----------|
//! | `error` | `Error`, `Result` |
//! | `value_objects` | `TypeKey` |
//! | `metadata` | `ClassMetadata`, `ServiceAttribute`, `Upcast`, `Arguments` |
//! | `representation` | `ServiceRepresentation`, `BrickRepresentation` |
//! | `ports` | `CacheProvider`, `EnvironmentService`, `EventDispatcher`, `MetadataFeed` |
//! | `registry` | `BRICKS`, `CACHE_PROVIDERS` |
//!
//! No I/O happens in this crate.

/// Domain constants
pub mod constants;
/// Error types
pub mod error;
/// Class metadata records
pub mod metadata;
/// Boundary contracts
pub mod ports;
/// Compile-time registries
pub mod registry;
/// Service and brick representations
pub mod representation;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use metadata::{
    Arguments, ClassMetadata, ConfigurationClass, ConstructionError, Instance, MethodMetadata,
    Parameter, ServiceAttribute, ServiceConfiguration,
};
pub use representation::{BrickRepresentation, ServiceRepresentation};
pub use value_objects::TypeKey;
