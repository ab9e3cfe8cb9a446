//! Value Objects
//!
//! Immutable identities shared by every layer.

/// Type identity used as registry and listener-table key
pub mod type_key;

pub use type_key::TypeKey;
