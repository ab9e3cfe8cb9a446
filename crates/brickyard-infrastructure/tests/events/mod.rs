//! Event Bus Tests

mod bus_tests;
