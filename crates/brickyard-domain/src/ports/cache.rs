//! Cache Provider Port
//!
//! Port for key/value cache backends. The filesystem provider persists
//! entries with TTL; the memory and null providers serve development and
//! disabled modes.
//!
//! ## Failure model
//!
//! Mutators report success as a `bool`: a failed write, a missing root or a
//! corrupt entry never surfaces as an error. `Err` is reserved for usage
//! errors such as an empty key or a zero TTL.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::{Error, Result};

/// Reject keys the cache cannot address
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_argument("cache key must not be empty"));
    }
    Ok(())
}

/// Reject TTLs shorter than one second
pub fn validate_ttl(ttl: Option<Duration>) -> Result<()> {
    match ttl {
        Some(ttl) if ttl.as_secs() == 0 => Err(Error::invalid_argument(format!(
            "cache TTL must be at least one second, {ttl:?} given"
        ))),
        _ => Ok(()),
    }
}

/// Cache Provider Port
///
/// Blob-level contract; typed access goes through the infrastructure
/// `SharedCache` wrapper.
pub trait CacheProvider: std::fmt::Debug {
    /// Stored bytes for `key`, `None` when absent or expired
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// Without a TTL the entry never expires.
    fn set_raw(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<bool>;

    /// Remove `key`; succeeds when the key was already absent
    fn delete(&self, key: &str) -> Result<bool>;

    /// Whether `key` is present and not expired
    fn has(&self, key: &str) -> Result<bool>;

    /// Remove every entry
    fn clear(&self) -> bool;

    /// Look up several keys; every key appears in the result
    fn get_multiple_raw(&self, keys: &[&str]) -> Result<BTreeMap<String, Option<Vec<u8>>>> {
        keys.iter().try_for_each(|key| validate_key(key))?;
        keys.iter()
            .map(|key| Ok(((*key).to_string(), self.get_raw(key)?)))
            .collect()
    }

    /// Store several entries; true only if every write succeeded
    ///
    /// Keys are validated before anything is written.
    fn set_multiple_raw(&self, values: &[(&str, Vec<u8>)], ttl: Option<Duration>) -> Result<bool> {
        values.iter().try_for_each(|(key, _)| validate_key(key))?;
        validate_ttl(ttl)?;
        let mut success = true;
        for (key, value) in values {
            success &= self.set_raw(key, value, ttl)?;
        }
        Ok(success)
    }

    /// Delete several keys; true only if every deletion succeeded
    fn delete_multiple(&self, keys: &[&str]) -> Result<bool> {
        keys.iter().try_for_each(|key| validate_key(key))?;
        let mut success = true;
        for key in keys {
            success &= self.delete(key)?;
        }
        Ok(success)
    }

    /// Name of this provider implementation
    fn provider_name(&self) -> &str;
}
