//! Configuration
//!
//! - [`Environment`]: figment-backed view of `.env.toml` and the process environment
//! - [`RuntimeSettings`]: typed runtime settings read from the environment
//! - [`ServiceConfigurationLoader`]: locates and maps per-service YAML files

pub mod environment;
pub mod service_config;
pub mod settings;

pub use environment::Environment;
pub use service_config::ServiceConfigurationLoader;
pub use settings::{LoggingConfig, RuntimeMode, RuntimeSettings};
