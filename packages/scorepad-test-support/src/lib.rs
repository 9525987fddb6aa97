//! Helpers shared by the scorepad integration tests.

pub mod logging;
pub mod unique_helpers;
