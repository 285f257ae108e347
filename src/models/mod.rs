//! Domain models for the risk engine
//!
//! Immutable value records created per request: the readings going in, the
//! scores and factor breakdowns coming out.

pub mod assessment;
pub mod environment;
pub mod factors;
pub mod profile;
pub mod scores;

// Re-export commonly used types
pub use assessment::{
    AssessmentRequest, ForecastPoint, HealthRiskAssessment, HourlyReading, Location, RawData,
    RiskSummary,
};
pub use environment::{AirQualityReading, EnvironmentalReading};
pub use factors::{ContributingFactors, FactorContribution, FactorList};
pub use profile::HealthProfile;
pub use scores::{RiskLevel, RiskScore, ScoreSet};
