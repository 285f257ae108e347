//! Request and response models for a full health-risk assessment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::environment::{AirQualityReading, EnvironmentalReading};
use super::factors::ContributingFactors;
use super::profile::HealthProfile;
use super::scores::{RiskLevel, ScoreSet};
use crate::algorithm::risk::level::Rating;

/// Resolved location of the readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub name: Option<String>,
}

/// One upcoming reading used for the forecast
///
/// Either value may be missing in provider data; such entries are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyReading {
    #[serde(alias = "dt", with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
    #[serde(default, alias = "temp")]
    pub temperature_c: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

/// Everything needed to assess one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub location: Option<Location>,
    pub weather: EnvironmentalReading,
    pub air_quality: AirQualityReading,
    #[serde(default)]
    pub profile: Option<HealthProfile>,
    #[serde(default)]
    pub hourly: Vec<HourlyReading>,
}

impl AssessmentRequest {
    #[must_use]
    pub fn new(weather: EnvironmentalReading, air_quality: AirQualityReading) -> Self {
        Self {
            location: None,
            weather,
            air_quality,
            profile: None,
            hourly: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_profile(mut self, profile: HealthProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn with_hourly(mut self, hourly: Vec<HourlyReading>) -> Self {
        self.hourly = hourly;
        self
    }

    /// Location name if the request carries one
    #[must_use]
    pub fn location_name(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.name.as_deref())
    }
}

/// Reduced score set for one forecast hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForecastPoint {
    pub time: DateTime<Utc>,
    pub asthma_risk_level: RiskLevel,
    pub heat_risk_level: RiskLevel,
    pub overall_risk_score: u8,
}

/// Headline summary of an assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskSummary {
    pub overall_level: RiskLevel,
    pub overall_score: u8,
    pub asthma_level: RiskLevel,
    pub heat_level: RiskLevel,
    pub dehydration_level: RiskLevel,
    pub rating: Rating,
    pub message: String,
}

/// Readings the scores were computed from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawData {
    pub weather: EnvironmentalReading,
    pub air_quality: AirQualityReading,
}

/// Complete result of assessing one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthRiskAssessment {
    pub location: Option<Location>,
    pub timestamp: DateTime<Utc>,
    pub raw_data: RawData,
    pub scores: ScoreSet,
    pub forecast: Vec<ForecastPoint>,
    pub risk_summary: RiskSummary,
    pub contributing_factors: ContributingFactors,
}
