//! Service and Brick Representations
//!
//! Immutable records produced by the catalog builder and consumed by the
//! resolution engine.

use std::any::Any;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::constants::CONFIGURATION_FILE_EXTENSION;
use crate::metadata::{ClassMetadata, ConfigurationClass, Instance, ServiceAttribute};
use crate::value_objects::TypeKey;

/// A service declared by a brick
#[derive(Debug, Clone)]
pub struct ServiceRepresentation {
    class: Rc<ClassMetadata>,
    attribute: ServiceAttribute,
    package_path: PathBuf,
}

impl ServiceRepresentation {
    /// Build a representation from a class and its service attribute
    pub fn new(
        class: Rc<ClassMetadata>,
        attribute: ServiceAttribute,
        package_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            class,
            attribute,
            package_path: package_path.into(),
        }
    }

    /// Implementing type
    pub fn service_type(&self) -> TypeKey {
        self.class.ty()
    }

    /// Implementing type name, for diagnostics
    pub fn name(&self) -> &'static str {
        self.class.ty().name()
    }

    /// Class metadata of the implementing type
    pub fn class(&self) -> &ClassMetadata {
        &self.class
    }

    /// Declared configuration type
    pub fn configuration(&self) -> Option<&ConfigurationClass> {
        self.attribute.configuration()
    }

    /// Identity of the declared configuration type
    pub fn configuration_type(&self) -> Option<TypeKey> {
        self.attribute.configuration().map(ConfigurationClass::ty)
    }

    /// Configuration file base name
    ///
    /// The explicit override if declared, otherwise the lowercased short type
    /// name with the `.yml` extension.
    pub fn configuration_filename(&self) -> String {
        match self.attribute.configuration_filename() {
            Some(filename) => filename.to_string(),
            None => format!(
                "{}.{CONFIGURATION_FILE_EXTENSION}",
                self.class.ty().short_name().to_lowercase()
            ),
        }
    }

    /// Root directory of the owning package
    pub fn package_path(&self) -> &Path {
        &self.package_path
    }

    /// Whether an instance of this service can be viewed as `key`
    pub fn provides(&self, key: TypeKey) -> bool {
        self.class.provides(key)
    }

    /// View `instance` as `key`
    pub fn upcast(&self, key: TypeKey, instance: &Instance) -> Option<Box<dyn Any>> {
        self.class.upcast(key, instance)
    }
}

/// A brick and the services it declares
#[derive(Debug, Clone)]
pub struct BrickRepresentation {
    package_name: String,
    package_path: PathBuf,
    services: Vec<ServiceRepresentation>,
}

impl BrickRepresentation {
    /// Build a brick representation
    pub fn new(
        package_name: impl Into<String>,
        package_path: impl Into<PathBuf>,
        services: Vec<ServiceRepresentation>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            package_path: package_path.into(),
            services,
        }
    }

    /// Package name
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Package root directory
    pub fn package_path(&self) -> &Path {
        &self.package_path
    }

    /// Services in declaration order
    pub fn services(&self) -> &[ServiceRepresentation] {
        &self.services
    }
}
