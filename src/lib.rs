//! A Rust library for deriving health-risk scores from weather, air quality
//! and an optional personal health profile.
//!
//! The scoring engine is a set of pure functions: the same readings always
//! produce the same scores and factor breakdowns.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::RiskEngineConfig;
pub use error::{Result, RiskEngineError};

// Models
pub use models::{
    AirQualityReading, AssessmentRequest, ContributingFactors, EnvironmentalReading,
    FactorContribution, ForecastPoint, HealthProfile, HealthRiskAssessment, HourlyReading,
    Location, RiskLevel, RiskScore, RiskSummary, ScoreSet,
};

// Scoring engine
pub use algorithm::risk::{
    Rating, assess, assess_batch, build_contributing_factors, combine_scores,
    compute_dehydration_risk, compute_heat_index_c, compute_overall_risk, score_air_pollution,
    score_heat, score_readings,
};

// Utility functions
pub use utils::io::{parse_requests, read_requests};
