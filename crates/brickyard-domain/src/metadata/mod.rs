//! Class Metadata
//!
//! Startup-time description of the types a brick contributes. This is what
//! the catalog builder, the resolver and the event bus read instead of
//! runtime reflection.

/// Class records and their builder
pub mod class;
/// Configuration marker and service attribute
pub mod configuration;
/// Type-erased instances, upcasts and constructor arguments
pub mod instance;
/// Parameter declarations
pub mod parameter;

pub use class::{ClassBuilder, ClassMetadata, Instantiation, MethodMetadata};
pub use configuration::{
    ConfigurationClass, ConfigurationMapper, ServiceAttribute, ServiceConfiguration,
};
pub use instance::{downcast_view, Arguments, ConstructionError, Instance, Upcast};
pub use parameter::{Parameter, ParameterType};
