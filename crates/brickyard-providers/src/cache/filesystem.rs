//! Filesystem cache provider
//!
//! Persistent key/value store under a dedicated root directory.
//!
//! ## Layout
//!
//! ```text
//! <root>/.cache.info              {"files_ttl": {"<entry id>": <unix seconds>}}
//! <root>/dXNl.d/cjox              entry for key "user:1"
//! ```
//!
//! A key maps to its entry identifier through unpadded URL-safe base64. The
//! identifier is split into 4-character chunks: every chunk but the last is
//! a directory level suffixed with `.d`, the last one is the file name.
//! Expired entries read as absent; their files stay on disk until
//! overwritten, deleted or cleared.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use brickyard_domain::constants::{
    CACHE_DIR_SUFFIX, CACHE_ID_CHUNK_SIZE, CACHE_INFO_FILE, CACHE_PROVIDER_FILESYSTEM,
};
use brickyard_domain::error::{Error, Result};
use brickyard_domain::ports::{validate_key, validate_ttl, CacheProvider};
use brickyard_domain::registry::{CacheProviderConfig, CacheProviderEntry, CACHE_PROVIDERS};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Persisted index of entry expiry timestamps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct CacheInfo {
    #[serde(default)]
    files_ttl: BTreeMap<String, i64>,
}

/// Filesystem cache provider
#[derive(Debug)]
pub struct FileSystemCache {
    root: PathBuf,
    info: RefCell<CacheInfo>,
}

impl FileSystemCache {
    /// Open the cache rooted at `root`, creating the directory if needed
    ///
    /// A missing or unreadable index starts empty.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            Error::io_with_source(
                format!("Failed to create cache root {}", root.display()),
                e,
            )
        })?;
        let info = load_info(&root);
        debug!(root = %root.display(), entries = info.files_ttl.len(), "Opened filesystem cache");
        Ok(Self {
            root,
            info: RefCell::new(info),
        })
    }

    /// Cache root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Entry identifier of `key`
    pub fn entry_id(key: &str) -> String {
        URL_SAFE_NO_PAD.encode(key.as_bytes())
    }

    /// Storage path of `key`
    pub fn entry_path(&self, key: &str) -> PathBuf {
        let id = Self::entry_id(key);
        let chunks: Vec<&str> = id
            .as_bytes()
            .chunks(CACHE_ID_CHUNK_SIZE)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok())
            .collect();

        let mut path = self.root.clone();
        if let Some((file, directories)) = chunks.split_last() {
            for directory in directories {
                path.push(format!("{directory}{CACHE_DIR_SUFFIX}"));
            }
            path.push(file);
        }
        path
    }

    /// Recorded expiry of `key`, in unix seconds
    pub fn expiry(&self, key: &str) -> Option<i64> {
        self.info
            .borrow()
            .files_ttl
            .get(&Self::entry_id(key))
            .copied()
    }

    fn is_expired(&self, id: &str) -> bool {
        let now = chrono::Utc::now().timestamp();
        self.info
            .borrow()
            .files_ttl
            .get(id)
            .is_some_and(|expiry| now > *expiry)
    }

    fn save_info(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.root)?;
        let content = serde_json::to_vec(&*self.info.borrow()).map_err(std::io::Error::other)?;
        fs::write(self.root.join(CACHE_INFO_FILE), content)
    }

    fn write_entry(path: &Path, value: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(value)?;
        file.flush()
    }

    /// Update the in-memory index, returning the expiry it replaced
    fn record_expiry(&self, id: &str, ttl: Option<Duration>) -> Option<i64> {
        let mut info = self.info.borrow_mut();
        match ttl {
            Some(ttl) => {
                let seconds = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
                let expiry = chrono::Utc::now().timestamp().saturating_add(seconds);
                info.files_ttl.insert(id.to_string(), expiry)
            }
            None => info.files_ttl.remove(id),
        }
    }

    fn restore_expiry(&self, id: &str, previous: Option<i64>) {
        let mut info = self.info.borrow_mut();
        match previous {
            Some(expiry) => {
                info.files_ttl.insert(id.to_string(), expiry);
            }
            None => {
                info.files_ttl.remove(id);
            }
        }
    }
}

fn load_info(root: &Path) -> CacheInfo {
    let path = root.join(CACHE_INFO_FILE);
    match fs::read(&path) {
        Ok(content) => serde_json::from_slice(&content).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Corrupt cache index, starting empty");
            CacheInfo::default()
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => CacheInfo::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Unreadable cache index, starting empty");
            CacheInfo::default()
        }
    }
}

impl CacheProvider for FileSystemCache {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        if self.is_expired(&Self::entry_id(key)) {
            debug!(key = %key, "Cache entry expired");
            return Ok(None);
        }
        match fs::read(self.entry_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read cache entry");
                Ok(None)
            }
        }
    }

    fn set_raw(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<bool> {
        validate_key(key)?;
        validate_ttl(ttl)?;
        let id = Self::entry_id(key);
        let path = self.entry_path(key);

        if let Err(e) = Self::write_entry(&path, value) {
            warn!(key = %key, error = %e, "Failed to write cache entry");
            let _ = fs::remove_file(&path);
            return Ok(false);
        }

        let previous = self.record_expiry(&id, ttl);
        if let Err(e) = self.save_info() {
            warn!(key = %key, error = %e, "Failed to persist cache index");
            self.restore_expiry(&id, previous);
            let _ = fs::remove_file(&path);
            return Ok(false);
        }
        Ok(true)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to delete cache entry");
                return Ok(false);
            }
        }

        let removed = self
            .info
            .borrow_mut()
            .files_ttl
            .remove(&Self::entry_id(key))
            .is_some();
        if removed {
            if let Err(e) = self.save_info() {
                warn!(key = %key, error = %e, "Failed to persist cache index");
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn has(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(!self.is_expired(&Self::entry_id(key)) && self.entry_path(key).is_file())
    }

    fn clear(&self) -> bool {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                warn!(root = %self.root.display(), error = %e, "Failed to remove cache root");
                return false;
            }
        }
        *self.info.borrow_mut() = CacheInfo::default();
        match self.save_info() {
            Ok(()) => true,
            Err(e) => {
                warn!(root = %self.root.display(), error = %e, "Failed to recreate cache root");
                false
            }
        }
    }

    fn provider_name(&self) -> &str {
        CACHE_PROVIDER_FILESYSTEM
    }
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static FILESYSTEM_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: CACHE_PROVIDER_FILESYSTEM,
    description: "Persistent filesystem cache with TTL index",
    factory: |config: &CacheProviderConfig| {
        let root = config
            .root
            .clone()
            .ok_or_else(|| "filesystem cache requires a root directory".to_string())?;
        let cache = FileSystemCache::open(root).map_err(|e| e.to_string())?;
        Ok(Rc::new(cache))
    },
};
