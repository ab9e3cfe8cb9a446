//! Composition Tests
//!
//! Catalog building, lazy and eager resolution, and the composition root.

mod bootstrap_tests;
mod registry_tests;
