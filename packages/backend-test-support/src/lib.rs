//! Shared helpers for the backend test suites: logging initialization and
//! unique test-data generation.

pub mod logging;
pub mod unique;
