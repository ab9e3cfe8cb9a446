//! Shared cache wrapper
//!
//! Typed access over any [`CacheProvider`]. Values are stored as JSON; a
//! stored blob that no longer deserialises into the requested type is
//! treated as absent.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use brickyard_domain::error::Result;
use brickyard_domain::ports::cache::{validate_key, validate_ttl};
use brickyard_domain::ports::CacheProvider;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Typed cache wrapper
#[derive(Clone)]
pub struct SharedCache {
    provider: Rc<dyn CacheProvider>,
}

impl SharedCache {
    /// Wrap `provider`
    pub fn new(provider: Rc<dyn CacheProvider>) -> Self {
        Self { provider }
    }

    /// Underlying provider
    pub fn as_provider(&self) -> Rc<dyn CacheProvider> {
        Rc::clone(&self.provider)
    }

    /// Value of `key`, `None` when absent, expired or undecodable
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        Ok(self
            .provider
            .get_raw(key)?
            .and_then(|bytes| decode(key, &bytes)))
    }

    /// Value of `key`, or `default` when it cannot be read
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Store `value` under `key`
    ///
    /// A value that cannot be serialised is not stored and yields `false`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<bool> {
        validate_key(key)?;
        validate_ttl(ttl)?;
        match serde_json::to_vec(value) {
            Ok(bytes) => self.provider.set_raw(key, &bytes, ttl),
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to serialize cache value");
                Ok(false)
            }
        }
    }

    /// Values of several keys; every key appears in the result
    pub fn get_multiple<T: DeserializeOwned>(&self, keys: &[&str]) -> Result<BTreeMap<String, Option<T>>> {
        Ok(self
            .provider
            .get_multiple_raw(keys)?
            .into_iter()
            .map(|(key, bytes)| {
                let value = bytes.and_then(|bytes| decode(&key, &bytes));
                (key, value)
            })
            .collect())
    }

    /// Store several values; true only if every write succeeded
    pub fn set_multiple<T: Serialize>(&self, values: &[(&str, T)], ttl: Option<Duration>) -> Result<bool> {
        values.iter().try_for_each(|(key, _)| validate_key(key))?;
        validate_ttl(ttl)?;

        let mut encoded = Vec::with_capacity(values.len());
        let mut success = true;
        for (key, value) in values {
            match serde_json::to_vec(value) {
                Ok(bytes) => encoded.push((*key, bytes)),
                Err(e) => {
                    warn!(key = %key, error = %e, "Failed to serialize cache value");
                    success = false;
                }
            }
        }
        Ok(self.provider.set_multiple_raw(&encoded, ttl)? && success)
    }

    /// Remove `key`
    pub fn delete(&self, key: &str) -> Result<bool> {
        self.provider.delete(key)
    }

    /// Whether `key` is present and not expired
    pub fn has(&self, key: &str) -> Result<bool> {
        self.provider.has(key)
    }

    /// Remove every entry
    pub fn clear(&self) -> bool {
        self.provider.clear()
    }
}

fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Option<T> {
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(key = %key, error = %e, "Cached value cannot be decoded");
            None
        }
    }
}

impl CacheProvider for SharedCache {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.provider.get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<bool> {
        self.provider.set_raw(key, value, ttl)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        self.provider.delete(key)
    }

    fn has(&self, key: &str) -> Result<bool> {
        self.provider.has(key)
    }

    fn clear(&self) -> bool {
        self.provider.clear()
    }

    fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }
}

impl fmt::Debug for SharedCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCache")
            .field("provider", &self.provider.provider_name())
            .finish()
    }
}
