//! IO utilities for file operations
//!
//! This module provides utilities for reading configuration and request
//! files.

pub mod json;

// Re-export commonly used functions for convenience
pub use json::{parse_requests, read_json_file, read_requests};
