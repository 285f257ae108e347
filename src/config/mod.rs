//! Configuration for the risk engine.
//!
//! The configuration is an explicit value handed to the assessment functions;
//! nothing here reads process-wide state.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, RiskEngineError};
use crate::utils::io::read_json_file;

/// Largest forecast window accepted, in hourly points
pub const MAX_FORECAST_HORIZON: usize = 120;

/// Configuration for the assessment pipeline
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RiskEngineConfig {
    /// Number of hourly readings turned into forecast points
    pub forecast_horizon: usize,
    /// Location label used in summaries when the request has none
    pub default_location_name: String,
    /// Log each assessment at debug level
    pub log_assessments: bool,
}

impl Default for RiskEngineConfig {
    fn default() -> Self {
        Self {
            forecast_horizon: 24,
            default_location_name: "your location".to_string(),
            log_assessments: true,
        }
    }
}

impl RiskEngineConfig {
    /// Load a configuration from a JSON file and validate it
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let config: Self = read_json_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is within its accepted range
    pub fn validate(&self) -> Result<()> {
        if self.forecast_horizon == 0 || self.forecast_horizon > MAX_FORECAST_HORIZON {
            return Err(RiskEngineError::InvalidConfig(format!(
                "forecast_horizon must be between 1 and {MAX_FORECAST_HORIZON}, got {}",
                self.forecast_horizon
            )));
        }

        if self.default_location_name.trim().is_empty() {
            return Err(RiskEngineError::InvalidConfig(
                "default_location_name must not be empty".into(),
            ));
        }

        Ok(())
    }
}
