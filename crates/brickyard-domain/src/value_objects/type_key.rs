//! Type identity
//!
//! Rust has no runtime class names, so every service, configuration,
//! interface and event type is identified by its [`TypeId`] paired with the
//! compiler-provided type name for diagnostics and filename derivation.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a type known to the runtime
///
/// Equality and hashing only consider the [`TypeId`]; the name is carried
/// for error messages and for deriving default configuration filenames.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Identity of `T`, which may be a concrete type or a `dyn Trait`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying type id
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, as reported by the compiler
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the type name, without generic arguments
    ///
    /// `my_brick::mail::Mailer<T>` becomes `Mailer`, `dyn my_brick::Notifier`
    /// becomes `Notifier`.
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        let base = base.strip_prefix("dyn ").unwrap_or(base);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
