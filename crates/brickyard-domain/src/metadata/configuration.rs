//! Service and configuration declarations

use std::any::Any;
use std::fmt;

use serde::de::DeserializeOwned;

use crate::value_objects::TypeKey;

/// Marker for types that may be loaded from a service configuration file
///
/// A service may only declare a configuration type implementing this trait;
/// referencing any other type is a startup error.
pub trait ServiceConfiguration: DeserializeOwned + 'static {}

/// Maps a parsed YAML document onto a configuration type
pub type ConfigurationMapper = fn(serde_yaml::Value) -> Result<Box<dyn Any>, serde_yaml::Error>;

fn map_value<C: DeserializeOwned + 'static>(
    value: serde_yaml::Value,
) -> Result<Box<dyn Any>, serde_yaml::Error> {
    serde_yaml::from_value::<C>(value).map(|configuration| Box::new(configuration) as Box<dyn Any>)
}

/// Configuration type referenced by a service declaration
#[derive(Clone, Copy)]
pub struct ConfigurationClass {
    ty: TypeKey,
    marked: bool,
    map: ConfigurationMapper,
}

impl ConfigurationClass {
    /// A configuration type carrying the configuration marker
    pub fn of<C: ServiceConfiguration>() -> Self {
        Self {
            ty: TypeKey::of::<C>(),
            marked: true,
            map: map_value::<C>,
        }
    }

    /// A deserialisable type that lacks the configuration marker
    pub fn unmarked<C: DeserializeOwned + 'static>() -> Self {
        Self {
            ty: TypeKey::of::<C>(),
            marked: false,
            map: map_value::<C>,
        }
    }

    /// Configuration type identity
    pub fn ty(&self) -> TypeKey {
        self.ty
    }

    /// Whether the type carries the configuration marker
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    /// Map a parsed document onto the configuration type
    pub fn map(&self, value: serde_yaml::Value) -> Result<Box<dyn Any>, serde_yaml::Error> {
        (self.map)(value)
    }
}

impl fmt::Debug for ConfigurationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationClass")
            .field("ty", &self.ty)
            .field("marked", &self.marked)
            .finish_non_exhaustive()
    }
}

/// The service marker and its optional fields
#[derive(Debug, Clone, Default)]
pub struct ServiceAttribute {
    configuration: Option<ConfigurationClass>,
    configuration_filename: Option<String>,
}

impl ServiceAttribute {
    /// Service without configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the configuration type
    pub fn with_configuration(mut self, configuration: ConfigurationClass) -> Self {
        self.configuration = Some(configuration);
        self
    }

    /// Override the configuration filename
    pub fn with_configuration_filename<S: Into<String>>(mut self, filename: S) -> Self {
        self.configuration_filename = Some(filename.into());
        self
    }

    /// Declared configuration type
    pub fn configuration(&self) -> Option<&ConfigurationClass> {
        self.configuration.as_ref()
    }

    /// Explicit configuration filename
    pub fn configuration_filename(&self) -> Option<&str> {
        self.configuration_filename.as_deref()
    }
}
