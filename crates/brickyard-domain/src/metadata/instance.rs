//! Type-erased service instances
//!
//! The registry stores every materialised service as an [`Instance`]. An
//! [`Upcast`] knows how to view one instance as a given type (its own
//! concrete type or one of the `dyn Trait` interfaces it implements), and
//! [`Arguments`] carries the resolved constructor parameters in declaration
//! order.

use std::any::Any;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::value_objects::TypeKey;

/// A materialised service, owned by the registry
pub type Instance = Rc<dyn Any>;

type CastFn = dyn Fn(&Instance) -> Option<Box<dyn Any>>;

/// Failure of a single construction attempt
///
/// Never escalated: the resolver treats it as "not ready".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ConstructionError {
    message: String,
}

impl ConstructionError {
    /// Create a construction error
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn argument(expected: &'static str) -> Self {
        Self::new(format!("constructor argument mismatch, expected {expected}"))
    }
}

/// View of an instance as another type
#[derive(Clone)]
pub struct Upcast {
    target: TypeKey,
    cast: Rc<CastFn>,
}

impl Upcast {
    /// View an instance as its own concrete type `T`
    pub fn identity<T: 'static>() -> Self {
        Self {
            target: TypeKey::of::<T>(),
            cast: Rc::new(|instance: &Instance| {
                Rc::clone(instance)
                    .downcast::<T>()
                    .ok()
                    .map(|concrete| Box::new(concrete) as Box<dyn Any>)
            }),
        }
    }

    /// View an instance of `T` as `I`, usually a `dyn Trait` it implements
    pub fn to<T: 'static, I: ?Sized + 'static>(convert: fn(Rc<T>) -> Rc<I>) -> Self {
        Self {
            target: TypeKey::of::<I>(),
            cast: Rc::new(move |instance: &Instance| {
                Rc::clone(instance)
                    .downcast::<T>()
                    .ok()
                    .map(|concrete| Box::new(convert(concrete)) as Box<dyn Any>)
            }),
        }
    }

    /// Type this upcast produces
    pub fn target(&self) -> TypeKey {
        self.target
    }

    /// Apply the view; the result holds an `Rc<I>` for the target `I`
    pub fn apply(&self, instance: &Instance) -> Option<Box<dyn Any>> {
        (self.cast)(instance)
    }
}

impl fmt::Debug for Upcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upcast")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Recover a typed handle from the output of [`Upcast::apply`]
pub fn downcast_view<T: ?Sized + 'static>(view: Box<dyn Any>) -> Option<Rc<T>> {
    view.downcast::<Rc<T>>().ok().map(|handle| *handle)
}

/// Resolved constructor arguments, consumed in declaration order
#[derive(Default)]
pub struct Arguments {
    values: VecDeque<Box<dyn Any>>,
}

impl Arguments {
    /// Empty argument list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolved value
    pub fn push(&mut self, value: Box<dyn Any>) {
        self.values.push_back(value);
    }

    /// Number of values not yet consumed
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether every value has been consumed
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Take the next argument as a shared service handle
    pub fn service<T: ?Sized + 'static>(&mut self) -> Result<Rc<T>, ConstructionError> {
        self.values
            .pop_front()
            .and_then(downcast_view::<T>)
            .ok_or_else(|| ConstructionError::argument(std::any::type_name::<T>()))
    }

    /// Take the next argument as an owned configuration value
    pub fn configuration<C: 'static>(&mut self) -> Result<C, ConstructionError> {
        self.values
            .pop_front()
            .and_then(|value| value.downcast::<C>().ok())
            .map(|value| *value)
            .ok_or_else(|| ConstructionError::argument(std::any::type_name::<C>()))
    }
}

impl fmt::Debug for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arguments")
            .field("remaining", &self.values.len())
            .finish()
    }
}
