//! Health risk scoring engine
//!
//! Pure functions mapping environmental readings and an optional health
//! profile to four risk scores and a contributing-factor breakdown.
//!
//! Scores use an internal 0-5 scale:
//! - air/asthma and heat: 0-5, raised by one for at-risk profiles
//! - dehydration: 1-4
//! - overall: 1-4, a weighted average of the other three

pub mod assessment;
pub mod batch;
pub mod components;
pub mod dehydration;
pub mod factors;
pub mod heat_index;
pub mod level;
pub mod overall;
pub mod sensitivity;

use crate::models::environment::{AirQualityReading, EnvironmentalReading};
use crate::models::profile::HealthProfile;
use crate::models::scores::{RiskScore, ScoreSet};

pub use assessment::{assess, build_forecast, build_risk_summary};
pub use batch::assess_batch;
pub use components::{score_air_pollution, score_heat};
pub use dehydration::compute_dehydration_risk;
pub use factors::build_contributing_factors;
pub use heat_index::compute_heat_index_c;
pub use level::{Rating, RiskLevel};
pub use overall::compute_overall_risk;
pub use sensitivity::{adjust_for_sensitivity, is_at_risk};

/// Highest score any dimension can reach
pub const MAX_SCORE: u8 = 5;

/// Build the full score set from raw air and heat scores
///
/// The profile raises air and heat by one point when at risk and supplies
/// the age for dehydration. Overall is computed from the final three.
#[must_use]
pub fn combine_scores(
    air_score: u8,
    heat_score: u8,
    weather: &EnvironmentalReading,
    profile: Option<&HealthProfile>,
) -> ScoreSet {
    let at_risk = is_at_risk(profile);
    let age = profile.and_then(|p| p.age);

    let asthma_risk = RiskScore::from_score(adjust_for_sensitivity(air_score, at_risk));
    let heat_risk = RiskScore::from_score(adjust_for_sensitivity(heat_score, at_risk));
    let dehydration_risk = compute_dehydration_risk(
        weather.temperature_c(),
        weather.humidity(),
        weather.heat_index_c(),
        age,
    );
    let overall_risk = compute_overall_risk(
        asthma_risk.score(),
        heat_risk.score(),
        dehydration_risk.score(),
    );

    ScoreSet {
        asthma_risk,
        heat_risk,
        dehydration_risk,
        overall_risk,
    }
}

/// Score a weather and air-quality reading from scratch
#[must_use]
pub fn score_readings(
    weather: &EnvironmentalReading,
    air: &AirQualityReading,
    profile: Option<&HealthProfile>,
) -> ScoreSet {
    let air_score = score_air_pollution(air.aqi, air.pm25, air.o3);
    let heat_score = score_heat(weather.heat_index_c());
    combine_scores(air_score, heat_score, weather, profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_without_profile() {
        let weather = EnvironmentalReading::new(30.0, 50.0);
        let scores = combine_scores(2, 3, &weather, None);

        assert_eq!(scores.asthma_risk.score(), 2);
        assert_eq!(scores.heat_risk.score(), 3);
        // heat index 31.05°C -> 2, humidity below 70
        assert_eq!(scores.dehydration_risk.score(), 2);
        // 0.6 + 1.05 + 0.7 = 2.35
        assert_eq!(scores.overall_risk.score(), 2);
        assert_eq!(scores.overall_risk.level(), RiskLevel::Moderate);
    }

    #[test]
    fn test_at_risk_profile_raises_air_and_heat_only() {
        let weather = EnvironmentalReading::new(30.0, 50.0);
        let profile = HealthProfile::new(Some(40), vec!["Asthma".into()]);
        let scores = combine_scores(2, 3, &weather, Some(&profile));

        assert_eq!(scores.asthma_risk.score(), 3);
        assert_eq!(scores.heat_risk.score(), 4);
        assert_eq!(scores.dehydration_risk.score(), 2);
        // 0.9 + 1.4 + 0.7 = 3.0
        assert_eq!(scores.overall_risk.score(), 3);
    }

    #[test]
    fn test_adjustment_is_capped() {
        let weather = EnvironmentalReading::new(20.0, 40.0);
        let profile = HealthProfile::new(Some(80), vec![]);
        let scores = combine_scores(5, 5, &weather, Some(&profile));

        assert_eq!(scores.asthma_risk.score(), 5);
        assert_eq!(scores.heat_risk.score(), 5);
        // senior bump on dehydration: 1 -> 2
        assert_eq!(scores.dehydration_risk.score(), 2);
    }

    #[test]
    fn test_score_readings_mild_day() {
        let weather = EnvironmentalReading::new(20.0, 40.0);
        let air = AirQualityReading::new(1);
        let scores = score_readings(&weather, &air, None);

        assert_eq!(scores.asthma_risk.level(), RiskLevel::Low);
        assert_eq!(scores.heat_risk.score(), 0);
        assert_eq!(scores.dehydration_risk.score(), 1);
        assert_eq!(scores.overall_risk.score(), 1);
    }
}
