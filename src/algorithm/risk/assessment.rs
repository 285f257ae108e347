//! Full assessment of one request
//!
//! Runs the scoring engine on the current reading, then derives the summary,
//! the factor breakdown and the forecast from the same inputs.

use chrono::{DateTime, Utc};
use log::debug;

use crate::config::RiskEngineConfig;
use crate::models::assessment::{
    AssessmentRequest, ForecastPoint, HealthRiskAssessment, HourlyReading, RawData, RiskSummary,
};
use crate::models::environment::EnvironmentalReading;
use crate::models::profile::HealthProfile;
use crate::models::scores::ScoreSet;

use super::combine_scores;
use super::components::{score_air_pollution, score_heat};
use super::factors::build_contributing_factors;
use super::level::Rating;
use super::sensitivity::is_at_risk;

/// Assess a request at the given time
///
/// `evaluated_at` is only stamped on the result, so the same request always
/// produces the same scores.
#[must_use]
pub fn assess(
    request: &AssessmentRequest,
    config: &RiskEngineConfig,
    evaluated_at: DateTime<Utc>,
) -> HealthRiskAssessment {
    let profile = request.profile.as_ref();
    let weather = &request.weather;
    let air = &request.air_quality;

    let air_score = score_air_pollution(air.aqi, air.pm25, air.o3);
    let heat_score = score_heat(weather.heat_index_c());
    let scores = combine_scores(air_score, heat_score, weather, profile);

    if config.log_assessments {
        debug!(
            "Assessed aqi={} heat_index={:.1}°C at_risk={} -> overall {} ({})",
            air.aqi,
            weather.heat_index_c(),
            is_at_risk(profile),
            scores.overall_risk.score(),
            scores.overall_risk.level()
        );
    }

    let location_name = request
        .location_name()
        .unwrap_or(config.default_location_name.as_str());

    HealthRiskAssessment {
        location: request.location.clone(),
        timestamp: evaluated_at,
        raw_data: RawData {
            weather: *weather,
            air_quality: *air,
        },
        scores,
        forecast: build_forecast(&request.hourly, air_score, profile, config.forecast_horizon),
        risk_summary: build_risk_summary(&scores, location_name),
        contributing_factors: build_contributing_factors(weather, air, profile),
    }
}

/// Summarize a score set for display
#[must_use]
pub fn build_risk_summary(scores: &ScoreSet, location_name: &str) -> RiskSummary {
    let overall = scores.overall_risk;

    RiskSummary {
        overall_level: overall.level(),
        overall_score: overall.score(),
        asthma_level: scores.asthma_risk.level(),
        heat_level: scores.heat_risk.level(),
        dehydration_level: scores.dehydration_risk.level(),
        rating: Rating::from_score(overall.score()),
        message: format!(
            "Overall risk is {} today in {location_name}.",
            overall.level()
        ),
    }
}

/// Score upcoming hours
///
/// Only the first `horizon` readings are considered and readings without
/// temperature or humidity are skipped. Air quality is not forecast, so every
/// point reuses the current raw air score.
#[must_use]
pub fn build_forecast(
    hourly: &[HourlyReading],
    air_score: u8,
    profile: Option<&HealthProfile>,
    horizon: usize,
) -> Vec<ForecastPoint> {
    hourly
        .iter()
        .take(horizon)
        .filter_map(|hour| {
            let (Some(temperature_c), Some(humidity)) = (hour.temperature_c, hour.humidity) else {
                debug!("Skipping forecast hour {} with missing readings", hour.time);
                return None;
            };

            let weather = EnvironmentalReading::new(temperature_c, humidity);
            let heat_score = score_heat(weather.heat_index_c());
            let scores = combine_scores(air_score, heat_score, &weather, profile);

            Some(ForecastPoint {
                time: hour.time,
                asthma_risk_level: scores.asthma_risk.level(),
                heat_risk_level: scores.heat_risk.level(),
                overall_risk_score: scores.overall_risk.score(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;
    use crate::models::environment::AirQualityReading;
    use crate::models::scores::{RiskLevel, RiskScore};

    fn hour(offset: i64, temperature_c: Option<f64>, humidity: Option<f64>) -> HourlyReading {
        HourlyReading {
            time: Utc.timestamp_opt(1_700_000_000 + offset * 3600, 0).unwrap(),
            temperature_c,
            humidity,
        }
    }

    #[test]
    fn test_summary_message_and_rating() {
        let scores = ScoreSet {
            asthma_risk: RiskScore::from_score(2),
            heat_risk: RiskScore::from_score(3),
            dehydration_risk: RiskScore::from_score(3),
            overall_risk: RiskScore::from_score(3),
        };
        let summary = build_risk_summary(&scores, "Accra");

        assert_eq!(summary.message, "Overall risk is High today in Accra.");
        assert_eq!(summary.rating, Rating::C);
        assert_eq!(summary.asthma_level, RiskLevel::Moderate);
        assert_eq!(summary.overall_score, 3);
    }

    #[test]
    fn test_forecast_skips_incomplete_hours() {
        let hourly = vec![
            hour(0, Some(20.0), Some(40.0)),
            hour(1, None, Some(40.0)),
            hour(2, Some(35.0), None),
            hour(3, Some(34.0), Some(75.0)),
        ];
        let forecast = build_forecast(&hourly, 2, None, 24);

        assert_eq!(forecast.len(), 2);
        assert_eq!(forecast[0].time, hourly[0].time);
        assert_eq!(forecast[0].heat_risk_level, RiskLevel::Low);
        assert_eq!(forecast[1].time, hourly[3].time);
        assert_eq!(forecast[1].heat_risk_level, RiskLevel::VeryHigh);
    }

    #[test]
    fn test_forecast_respects_horizon() {
        let hourly: Vec<_> = (0..30).map(|h| hour(h, Some(25.0), Some(50.0))).collect();
        assert_eq!(build_forecast(&hourly, 0, None, 24).len(), 24);
        assert_eq!(build_forecast(&hourly, 0, None, 8).len(), 8);
    }

    #[test]
    fn test_forecast_applies_profile() {
        let hourly = vec![hour(0, Some(20.0), Some(40.0))];
        let profile = HealthProfile::new(None, vec!["asthma".into()]);

        let plain = build_forecast(&hourly, 1, None, 24);
        let sensitive = build_forecast(&hourly, 1, Some(&profile), 24);

        assert_eq!(plain[0].asthma_risk_level, RiskLevel::Low);
        assert_eq!(sensitive[0].asthma_risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn test_assess_uses_default_location_name() {
        let request = AssessmentRequest::new(
            EnvironmentalReading::new(20.0, 40.0),
            AirQualityReading::new(1),
        );
        let config = RiskEngineConfig::default();
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let result = assess(&request, &config, now);

        assert_eq!(
            result.risk_summary.message,
            "Overall risk is Low today in your location."
        );
        assert_eq!(result.risk_summary.rating, Rating::A);
        assert_eq!(result.timestamp, now);
        assert!(result.forecast.is_empty());
    }
}
