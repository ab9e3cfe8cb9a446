//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers. The
//! infrastructure crate implements the environment, event and feed ports;
//! the providers crate implements the cache port.

/// Cache provider port
pub mod cache;
/// Environment port
pub mod environment;
/// Event dispatcher port
pub mod events;
/// Metadata feed port
pub mod feed;

pub use cache::{validate_key, validate_ttl, CacheProvider};
pub use environment::EnvironmentService;
pub use events::EventDispatcher;
pub use feed::{MetadataFeed, PackageKind, PackageMetadata};
