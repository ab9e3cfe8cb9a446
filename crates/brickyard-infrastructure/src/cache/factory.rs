//! Cache provider selection
//!
//! | Mode | Provider |
//! |------|----------|
//! | `PROD` | `filesystem` rooted at the cache root |
//! | `DEV` | `memory` |
//! | anything else | `null` |

use std::path::{Path, PathBuf};
use std::rc::Rc;

use brickyard_domain::constants::{
    CACHE_DEFAULT_DIR_NAME, CACHE_PROVIDER_FILESYSTEM, CACHE_PROVIDER_MEMORY, CACHE_PROVIDER_NULL,
};
use brickyard_domain::error::{Error, Result};
use brickyard_domain::ports::CacheProvider;
use brickyard_domain::registry::{resolve_cache_provider, CacheProviderConfig};
use tracing::info;

use crate::config::{RuntimeMode, RuntimeSettings};

/// Cache root for `install_root`
///
/// An empty override counts as unset; a relative one is joined to the
/// install root.
pub fn cache_root(install_root: &Path, cache_dir: Option<&str>) -> PathBuf {
    match cache_dir.filter(|dir| !dir.is_empty()) {
        Some(dir) if Path::new(dir).is_absolute() => PathBuf::from(dir),
        Some(dir) => install_root.join(dir),
        None => install_root.join(CACHE_DEFAULT_DIR_NAME),
    }
}

/// Registered provider name used in `mode`
pub fn provider_name_for(mode: RuntimeMode) -> &'static str {
    match mode {
        RuntimeMode::Production => CACHE_PROVIDER_FILESYSTEM,
        RuntimeMode::Development => CACHE_PROVIDER_MEMORY,
        RuntimeMode::Disabled => CACHE_PROVIDER_NULL,
    }
}

/// Create the cache provider selected by `settings`
pub fn create_cache(settings: &RuntimeSettings, install_root: &Path) -> Result<Rc<dyn CacheProvider>> {
    let name = provider_name_for(settings.mode);
    let mut config = CacheProviderConfig::new(name);
    if settings.mode == RuntimeMode::Production {
        config = config.with_root(cache_root(install_root, settings.cache_dir.as_deref()));
    }

    let provider = resolve_cache_provider(&config).map_err(Error::infrastructure)?;
    info!(
        provider = name,
        root = ?config.root,
        "Cache provider created"
    );
    Ok(provider)
}
