//! # Brickyard - Provider Implementations
//!
//! Cache backends implementing the `CacheProvider` port defined in
//! `brickyard-domain`. Each backend registers itself in the
//! `CACHE_PROVIDERS` distributed slice and is selected by name at startup.
//!
//! | Provider | Mode | Description |
//! |----------|------|-------------|
//! | `filesystem` | `PROD` | Persistent, TTL-aware, sharded directory layout |
//! | `memory` | `DEV` | Process-local map, TTL ignored |
//! | `null` | other | Every read misses, every write fails |
//!
//! ## Usage
//!
//! ```ignore
//! use brickyard_providers::cache::FileSystemCache;
//!
//! let cache = FileSystemCache::open("/var/cache/app")?;
//! cache.set_raw("greeting", b"hello", None)?;
//! ```
//!
//! Linking this crate is enough for the registry to see its providers;
//! binaries that never name a type from it use `extern crate brickyard_providers;`.

// Re-export brickyard-domain types commonly used with providers
pub use brickyard_domain::error::{Error, Result};
pub use brickyard_domain::ports::CacheProvider;

/// Cache provider implementations
///
/// Implements `CacheProvider` trait for caching backends.
pub mod cache;
