//! Event Bus
//!
//! Listener discovery over materialised services and in-process dispatch.

pub mod bus;
pub mod listener_table;

pub use bus::EventBus;
pub use listener_table::{ListenerSlot, ListenerTable};
