//! Cache Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`FileSystemCache`] | Persistent | One file per key plus a shared TTL index |
//! | [`MemoryCache`] | Local | In-memory map for development |
//! | [`NullCache`] | Disabled | No-op store |

pub mod filesystem;
pub mod memory;
pub mod null;

pub use filesystem::FileSystemCache;
pub use memory::MemoryCache;
pub use null::NullCache;
