//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as the `source` of wrapped failures
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Brickyard
///
/// Variants fall into the categories the runtime distinguishes:
/// startup-fatal declaration errors, resolution-fatal errors, configuration
/// errors and usage errors. Soft cache failures never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// A service references a configuration type lacking the configuration marker
    #[error("Class {configuration} is not a service configuration, but is referenced as such by service {service}")]
    NotAServiceConfiguration {
        /// Configuration type named by the service
        configuration: String,
        /// Service declaring the configuration
        service: String,
    },

    /// Eager resolution stopped with services that could never be built
    #[error("Cannot load services: {}", services.join(", "))]
    ServicesCannotBeLoaded {
        /// Every service type still unresolved when progress stopped
        services: Vec<String>,
    },

    /// Lazy resolution requested a type that is currently under construction
    #[error("Cyclic dependency detected: {}", chain.join(" -> "))]
    CyclicDependency {
        /// Types under construction, outermost first, ending with the repeated one
        chain: Vec<String>,
    },

    /// Neither the application nor the brick ships the service configuration file
    #[error("Configuration file not found for service {service}")]
    ServiceConfigurationFileNotFound {
        /// Service whose configuration is missing
        service: String,
    },

    /// The service configuration file could not be parsed or mapped
    #[error("Configuration file of service {service} has an invalid format: {source}")]
    ServiceConfigurationFileFormatInvalid {
        /// Service whose configuration is invalid
        service: String,
        /// Underlying parse or mapping error
        #[source]
        source: BoxedError,
    },

    /// An event listener does not take exactly one parameter
    #[error("Event listener {service}::{method} must take exactly 1 parameter, {count} given")]
    EventListenerWrongParameterAmount {
        /// Service declaring the listener
        service: String,
        /// Listener method name
        method: String,
        /// Number of declared parameters
        count: usize,
    },

    /// An event listener parameter has no named type
    #[error("Event listener {service}::{method} must declare the type of its event parameter")]
    EventListenerMissingEventType {
        /// Service declaring the listener
        service: String,
        /// Listener method name
        method: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedError>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// YAML parsing error
    #[error("YAML parsing error: {source}")]
    Yaml {
        /// The underlying YAML error
        #[from]
        source: serde_yaml::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedError>,
    },

    /// Infrastructure error wrapping a foreign failure
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedError>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Declaration and resolution error creation methods
impl Error {
    /// Create a not-a-service-configuration error
    pub fn not_a_service_configuration<C: Into<String>, S: Into<String>>(
        configuration: C,
        service: S,
    ) -> Self {
        Self::NotAServiceConfiguration {
            configuration: configuration.into(),
            service: service.into(),
        }
    }

    /// Create the aggregated unresolved-services error
    pub fn services_cannot_be_loaded<I, S>(services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ServicesCannotBeLoaded {
            services: services.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a configuration-file-not-found error
    pub fn configuration_file_not_found<S: Into<String>>(service: S) -> Self {
        Self::ServiceConfigurationFileNotFound {
            service: service.into(),
        }
    }

    /// Create a configuration-file-format-invalid error
    pub fn configuration_file_format_invalid<S, E>(service: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ServiceConfigurationFileFormatInvalid {
            service: service.into(),
            source: Box::new(source),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// I/O and configuration error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::io_with_source(source.to_string(), source)
    }
}

// Classification helpers
impl Error {
    /// Declaration errors detected while building the catalog or listener table
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            Self::NotAServiceConfiguration { .. }
                | Self::EventListenerWrongParameterAmount { .. }
                | Self::EventListenerMissingEventType { .. }
        )
    }

    /// Errors raised while resolving a service's configuration file
    pub fn is_configuration_fatal(&self) -> bool {
        matches!(
            self,
            Self::ServiceConfigurationFileNotFound { .. }
                | Self::ServiceConfigurationFileFormatInvalid { .. }
        )
    }
}
