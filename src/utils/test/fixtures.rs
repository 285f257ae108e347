//! Test fixtures
//!
//! Representative readings and profiles shared by unit and integration
//! tests.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::models::assessment::{AssessmentRequest, HourlyReading, Location};
use crate::models::environment::{AirQualityReading, EnvironmentalReading};
use crate::models::profile::HealthProfile;

/// Fixed evaluation time so results compare equal across runs
#[must_use]
pub fn fixed_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_719_835_200, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Cool, clean-air day
#[must_use]
pub fn mild_request() -> AssessmentRequest {
    AssessmentRequest::new(
        EnvironmentalReading::new(20.0, 40.0),
        AirQualityReading::new(1).with_pm25(4.0).with_o3(30.0),
    )
}

/// Hot, humid and polluted afternoon
#[must_use]
pub fn hot_humid_request() -> AssessmentRequest {
    AssessmentRequest::new(
        EnvironmentalReading::new(33.0, 72.0),
        AirQualityReading::new(4)
            .with_pm25(41.0)
            .with_pm10(60.0)
            .with_o3(88.0),
    )
    .with_location(Location {
        lat: 5.6037,
        lon: -0.187,
        name: Some("Accra".to_string()),
    })
}

/// Older adult with asthma
#[must_use]
pub fn senior_asthma_profile() -> HealthProfile {
    HealthProfile::new(Some(70), vec!["Asthma".to_string()])
}

/// `count` hourly readings warming by half a degree per step
#[must_use]
pub fn hourly_series(start_temperature_c: f64, humidity: f64, count: usize) -> Vec<HourlyReading> {
    let start = fixed_time();
    (0..count)
        .map(|i| HourlyReading {
            time: start + TimeDelta::hours(i as i64),
            temperature_c: Some(start_temperature_c + 0.5 * i as f64),
            humidity: Some(humidity),
        })
        .collect()
}
