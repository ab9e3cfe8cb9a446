//! Compile-Time Registries
//!
//! Uses the `linkme` crate for compile-time registration of bricks and
//! cache providers that are discovered at runtime.
//!
//! ## Architecture
//!
//! ```text
//! 1. Contributor defines:  #[linkme::distributed_slice(BRICKS)]
//!                          static ENTRY: BrickEntry = ...
//! 2. Registry declares:    #[linkme::distributed_slice]
//!                          pub static BRICKS: [BrickEntry] = [..]
//! 3. Feed queries:         BRICKS.iter()
//! ```
//!
//! ## Registering a brick
//!
//! ```ignore
//! use brickyard_domain::registry::{BrickEntry, BRICKS};
//!
//! #[linkme::distributed_slice(BRICKS)]
//! static MAILER_BRICK: BrickEntry = BrickEntry {
//!     name: "acme/mailer",
//!     kind: PackageKind::Brick,
//!     dev_requirement: false,
//!     path: env!("CARGO_MANIFEST_DIR"),
//!     classes: mailer_classes,
//! };
//! ```

pub mod bricks;
pub mod cache;

pub use bricks::{linked_bricks, BrickEntry, BRICKS};
pub use cache::{
    list_cache_providers, resolve_cache_provider, CacheProviderConfig, CacheProviderEntry,
    CACHE_PROVIDERS,
};
