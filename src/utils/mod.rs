//! Utility functions for logging and console output.

pub mod console;
pub mod logging;
