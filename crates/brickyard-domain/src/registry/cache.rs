//! Cache Provider Registry
//!
//! Cache providers register themselves via `linkme` and are selected by
//! name at startup.

use std::path::PathBuf;
use std::rc::Rc;

use crate::ports::cache::CacheProvider;

/// Configuration for cache provider creation
///
/// Providers use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct CacheProviderConfig {
    /// Provider name (e.g., "filesystem", "memory", "null")
    pub provider: String,
    /// Root directory for persistent providers
    pub root: Option<PathBuf>,
}

impl CacheProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the root directory
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }
}

/// Registry entry for cache providers
pub struct CacheProviderEntry {
    /// Unique provider name (e.g., "filesystem", "memory", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&CacheProviderConfig) -> Result<Rc<dyn CacheProvider>, String>,
}

#[linkme::distributed_slice]
pub static CACHE_PROVIDERS: [CacheProviderEntry] = [..];

/// Resolve cache provider by name from registry
///
/// # Returns
/// * `Ok(Rc<dyn CacheProvider>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_cache_provider(
    config: &CacheProviderConfig,
) -> Result<Rc<dyn CacheProvider>, String> {
    let provider_name = &config.provider;

    for entry in CACHE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = CACHE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown cache provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered cache providers as (name, description) tuples
pub fn list_cache_providers() -> Vec<(&'static str, &'static str)> {
    CACHE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
