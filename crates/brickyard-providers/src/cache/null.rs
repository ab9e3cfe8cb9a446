//! Null cache provider
//!
//! A cache provider implementation that doesn't store anything.
//! Selected whenever caching is disabled.

use std::rc::Rc;
use std::time::Duration;

use brickyard_domain::constants::CACHE_PROVIDER_NULL;
use brickyard_domain::error::Result;
use brickyard_domain::ports::{validate_key, validate_ttl, CacheProvider};
use brickyard_domain::registry::{CacheProviderConfig, CacheProviderEntry, CACHE_PROVIDERS};

/// Null cache provider that doesn't store anything
///
/// Reads always miss and every mutation, `delete` and `clear` included,
/// reports failure. Keys are still validated.
#[derive(Debug, Clone, Default)]
pub struct NullCache;

impl NullCache {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

impl CacheProvider for NullCache {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(None)
    }

    fn set_raw(&self, key: &str, _value: &[u8], ttl: Option<Duration>) -> Result<bool> {
        validate_key(key)?;
        validate_ttl(ttl)?;
        Ok(false)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(false)
    }

    fn has(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(false)
    }

    fn clear(&self) -> bool {
        false
    }

    fn provider_name(&self) -> &str {
        CACHE_PROVIDER_NULL
    }
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static NULL_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: CACHE_PROVIDER_NULL,
    description: "No-op cache (caching disabled)",
    factory: |_config: &CacheProviderConfig| Ok(Rc::new(NullCache::new())),
};
