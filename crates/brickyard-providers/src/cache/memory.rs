//! In-memory cache provider
//!
//! Process-local map used in development mode. Same contract as the
//! filesystem provider, without persistence or TTL enforcement.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use brickyard_domain::constants::CACHE_PROVIDER_MEMORY;
use brickyard_domain::error::Result;
use brickyard_domain::ports::{validate_key, validate_ttl, CacheProvider};
use brickyard_domain::registry::{CacheProviderConfig, CacheProviderEntry, CACHE_PROVIDERS};

/// In-memory cache provider
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl CacheProvider for MemoryCache {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<bool> {
        validate_key(key)?;
        validate_ttl(ttl)?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        Ok(true)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(true)
    }

    fn has(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.entries.borrow().contains_key(key))
    }

    fn clear(&self) -> bool {
        self.entries.borrow_mut().clear();
        true
    }

    fn provider_name(&self) -> &str {
        CACHE_PROVIDER_MEMORY
    }
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static MEMORY_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: CACHE_PROVIDER_MEMORY,
    description: "Process-local in-memory cache (TTL not enforced)",
    factory: |_config: &CacheProviderConfig| Ok(Rc::new(MemoryCache::new())),
};
