//! Constructor and method parameter declarations

use crate::value_objects::TypeKey;

/// Declared type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    /// Scalar value that can never be supplied by the registry
    Primitive(TypeKey),
    /// Service, interface, configuration or event type
    Named(TypeKey),
    /// No statically known type
    Untyped,
}

/// A single declared parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: &'static str,
    ty: ParameterType,
}

impl Parameter {
    /// Parameter of a named type (service, interface, configuration or event)
    pub fn named<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            name,
            ty: ParameterType::Named(TypeKey::of::<T>()),
        }
    }

    /// Parameter of a primitive type
    pub fn primitive<T: 'static>(name: &'static str) -> Self {
        Self {
            name,
            ty: ParameterType::Primitive(TypeKey::of::<T>()),
        }
    }

    /// Parameter without a declared type
    pub fn untyped(name: &'static str) -> Self {
        Self {
            name,
            ty: ParameterType::Untyped,
        }
    }

    /// Parameter name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type
    pub fn ty(&self) -> ParameterType {
        self.ty
    }

    /// Key of the named type, if any
    pub fn named_type(&self) -> Option<TypeKey> {
        match self.ty {
            ParameterType::Named(key) => Some(key),
            ParameterType::Primitive(_) | ParameterType::Untyped => None,
        }
    }
}
