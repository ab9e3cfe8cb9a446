//! Cache Tests
//!
//! Provider selection and typed cache access.

mod factory_tests;
