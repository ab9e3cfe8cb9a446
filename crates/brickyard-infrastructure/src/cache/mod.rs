//! Cache infrastructure
//!
//! Mode-based provider selection and the typed [`SharedCache`] wrapper
//! around the blob-level providers from `brickyard-providers`.

pub mod factory;
pub mod shared;

pub use factory::{cache_root, create_cache, provider_name_for};
pub use shared::SharedCache;
