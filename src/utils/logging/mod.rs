//! Logging utilities for consistent operation messages

pub mod log;

// Re-export commonly used functions for convenience
pub use log::{log_operation_complete, log_operation_start, log_warning};
