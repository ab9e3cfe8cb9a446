//! Event Dispatcher Port
//!
//! Services that emit events depend on `dyn EventDispatcher` rather than on
//! the concrete bus.

use std::any::Any;

use crate::error::Result;

/// Event Dispatcher Port
pub trait EventDispatcher: std::fmt::Debug {
    /// Route `event` to every listener registered for its runtime type
    ///
    /// Listeners may mutate the event in place.
    fn dispatch_dyn(&self, event: &mut dyn Any) -> Result<()>;
}

impl dyn EventDispatcher {
    /// Dispatch an owned event and hand it back after every listener ran
    pub fn dispatch<E: 'static>(&self, mut event: E) -> Result<E> {
        self.dispatch_dyn(&mut event)?;
        Ok(event)
    }
}
