//! Test utilities
//!
//! This module provides shared fixtures for tests.

pub mod fixtures;

// Re-export commonly used functions for convenience
pub use fixtures::{
    fixed_time, hot_humid_request, hourly_series, mild_request, senior_asthma_profile,
};
