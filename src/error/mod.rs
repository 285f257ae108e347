//! Error handling for the risk engine.
//!
//! Scoring itself is total and never fails; these errors come from the
//! surrounding layer that loads configuration and request files.

use std::io;
use std::path::{Path, PathBuf};

/// Specialized error type for the risk engine
#[derive(Debug, thiserror::Error)]
pub enum RiskEngineError {
    /// Error opening or reading a file
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Error parsing or writing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Configuration values outside their accepted range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Request data that cannot be turned into readings
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RiskEngineError {
    /// Wrap an IO error together with the path it concerns
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for risk engine operations
pub type Result<T> = std::result::Result<T, RiskEngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = RiskEngineError::io(
            Path::new("/tmp/missing.json"),
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.json"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RiskEngineError = parse_err.into();
        assert!(matches!(err, RiskEngineError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = RiskEngineError::InvalidConfig("forecast_horizon must be > 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: forecast_horizon must be > 0"
        );
    }
}
