//! JSON file operations
//!
//! Reading configuration and request files. A request file holds either a
//! single request object or an array of them.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, RiskEngineError};
use crate::models::assessment::AssessmentRequest;
use crate::utils::logging::{log_operation_complete, log_operation_start};

fn read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| RiskEngineError::io(path, e))
}

/// Read and deserialize a JSON file
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    Ok(serde_json::from_str(&read_text_file(path)?)?)
}

/// Parse one or many assessment requests from JSON text
///
/// Text starting with `[` is read as an array, anything else as a single
/// request, so field errors are reported against the request itself.
pub fn parse_requests(json: &str) -> Result<Vec<AssessmentRequest>> {
    let requests: Vec<AssessmentRequest> = if json.trim_start().starts_with('[') {
        serde_json::from_str(json)?
    } else {
        vec![serde_json::from_str(json)?]
    };

    if requests.is_empty() {
        return Err(RiskEngineError::InvalidInput(
            "request file contains no requests".into(),
        ));
    }

    Ok(requests)
}

/// Read one or many assessment requests from a JSON file
pub fn read_requests(path: &Path) -> Result<Vec<AssessmentRequest>> {
    log_operation_start("Reading requests from", &path.display().to_string());
    let requests = parse_requests(&read_text_file(path)?)?;
    log_operation_complete("read", requests.len(), None);
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = r#"{
        "weather": { "temperature_c": 31.0, "humidity": 72.0 },
        "air_quality": { "aqi": 3, "pm25": 38.0 }
    }"#;

    #[test]
    fn test_parse_single_request() {
        let requests = parse_requests(SINGLE).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].air_quality.aqi, 3);
    }

    #[test]
    fn test_parse_request_array() {
        let json = format!("[{SINGLE}, {SINGLE}]");
        assert_eq!(parse_requests(&json).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_array_rejected() {
        assert!(matches!(
            parse_requests("[]"),
            Err(RiskEngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        assert!(matches!(
            parse_requests(r#"{ "weather": 1 }"#),
            Err(RiskEngineError::Json(_))
        ));
    }

    #[test]
    fn test_single_request_reports_missing_field() {
        let err = parse_requests(
            r#"{ "weather": { "temperature_c": 20.0, "humidity": 40.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, RiskEngineError::Json(_)));
        assert!(err.to_string().contains("missing field `air_quality`"), "{err}");
    }

    #[test]
    fn test_array_element_reports_field_error() {
        let bad = r#"{
            "weather": { "temperature_c": "hot", "humidity": 1.0 },
            "air_quality": { "aqi": 1 }
        }"#;
        let json = format!("[{SINGLE}, {bad}]");
        let err = parse_requests(&json).unwrap_err();
        assert!(err.to_string().contains("invalid type"), "{err}");
    }

    #[test]
    fn test_leading_whitespace_before_array() {
        let json = format!("\n  [{SINGLE}]");
        assert_eq!(parse_requests(&json).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_request_file() {
        let result = read_requests(Path::new("/nonexistent/requests.json"));
        assert!(matches!(result, Err(RiskEngineError::Io { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = read_json_file::<serde_json::Value>(Path::new("/nonexistent/file.json"));
        assert!(matches!(result, Err(RiskEngineError::Io { .. })));
    }
}
