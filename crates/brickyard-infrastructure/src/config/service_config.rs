//! Service configuration loader
//!
//! Locates the YAML file declared by a service and maps it onto the
//! service's configuration type.
//!
//! Lookup order for a file named `mailer.yml`:
//!
//! 1. `<config dir>/mailer.yml`, where the config dir is `CONFIG_DIR`
//!    (relative values are joined to the install root) or
//!    `<install root>/config`
//! 2. `<brick path>/config/mailer.yml`

use std::any::Any;
use std::path::{Path, PathBuf};

use brickyard_domain::constants::CONFIGURATION_DIR_NAME;
use brickyard_domain::error::{Error, Result};
use brickyard_domain::ServiceRepresentation;
use tracing::debug;

use crate::error_ext::ErrorContext;

/// Resolves and parses service configuration files
#[derive(Debug, Clone)]
pub struct ServiceConfigurationLoader {
    config_dir: PathBuf,
}

impl ServiceConfigurationLoader {
    /// Create a loader for `install_root`
    ///
    /// An empty `config_dir` override counts as unset.
    pub fn new(install_root: &Path, config_dir: Option<&str>) -> Self {
        let config_dir = match config_dir.filter(|dir| !dir.is_empty()) {
            Some(dir) if Path::new(dir).is_absolute() => PathBuf::from(dir),
            Some(dir) => install_root.join(dir),
            None => install_root.join(CONFIGURATION_DIR_NAME),
        };
        Self { config_dir }
    }

    /// Application-level configuration directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the configuration file `service` would load
    pub fn resolve_path(&self, service: &ServiceRepresentation) -> Result<PathBuf> {
        let filename = service.configuration_filename();

        let application = self.config_dir.join(&filename);
        if application.is_file() {
            return Ok(application);
        }

        let bundled = service
            .package_path()
            .join(CONFIGURATION_DIR_NAME)
            .join(&filename);
        if bundled.is_file() {
            return Ok(bundled);
        }

        Err(Error::configuration_file_not_found(service.name()))
    }

    /// Load and map the configuration of `service`
    ///
    /// The returned value holds the service's declared configuration type.
    pub fn load(&self, service: &ServiceRepresentation) -> Result<Box<dyn Any>> {
        let configuration = service.configuration().ok_or_else(|| {
            Error::internal(format!(
                "Service {} does not declare a configuration",
                service.name()
            ))
        })?;

        let path = self.resolve_path(service)?;
        debug!(service = %service.name(), path = %path.display(), "Loading service configuration");

        let content = std::fs::read_to_string(&path)
            .io_context(format!("Failed to read configuration file {}", path.display()))?;
        let document: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| Error::configuration_file_format_invalid(service.name(), e))?;

        configuration
            .map(document)
            .map_err(|e| Error::configuration_file_format_invalid(service.name(), e))
    }
}
