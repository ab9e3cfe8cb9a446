//! Domain layer constants
//!
//! Contains constants that are part of the domain contract and shared by
//! the providers and infrastructure crates. Infrastructure-specific
//! constants remain in `brickyard_infrastructure::constants`.

// ============================================================================
// SERVICE CONFIGURATION CONSTANTS
// ============================================================================

/// Extension appended to a service's short type name to derive its configuration filename
pub const CONFIGURATION_FILE_EXTENSION: &str = "yml";

/// Directory, relative to a brick or to the install root, holding configuration files
pub const CONFIGURATION_DIR_NAME: &str = "config";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Name of the shared cache index file living at the cache root
pub const CACHE_INFO_FILE: &str = ".cache.info";

/// Number of characters of an entry identifier per path segment
pub const CACHE_ID_CHUNK_SIZE: usize = 4;

/// Suffix appended to every intermediate cache directory
pub const CACHE_DIR_SUFFIX: &str = ".d";

/// Default cache directory name, relative to the install root
pub const CACHE_DEFAULT_DIR_NAME: &str = "cache";

// ============================================================================
// CACHE PROVIDER NAMES
// ============================================================================

/// Persistent provider used in production mode
pub const CACHE_PROVIDER_FILESYSTEM: &str = "filesystem";

/// In-memory provider used in development mode
pub const CACHE_PROVIDER_MEMORY: &str = "memory";

/// No-op provider used in every other mode
pub const CACHE_PROVIDER_NULL: &str = "null";
