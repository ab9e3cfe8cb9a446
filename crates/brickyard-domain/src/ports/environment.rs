//! Environment Port
//!
//! Read access to the process environment and its file-based defaults.

/// Environment Port
///
/// Keys are case-insensitive. Recognised keys include `MODE`, `CACHE_DIR`
/// and `CONFIG_DIR`.
pub trait EnvironmentService: std::fmt::Debug {
    /// Value of `key`, if set
    fn get(&self, key: &str) -> Option<String>;

    /// Value of `key`, or `default` when unset
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Whether `key` is set
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
