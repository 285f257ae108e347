//! Contributing factor breakdown
//!
//! Each dimension gets three signals scaled linearly into [0, 1] over fixed
//! ranges. Percentages are each signal's share of the dimension total,
//! rounded to one decimal.

use crate::models::environment::{AirQualityReading, EnvironmentalReading};
use crate::models::factors::{ContributingFactors, FactorContribution, FactorList};
use crate::models::profile::HealthProfile;

/// Profile signal when nothing in the profile matches
const PROFILE_BASELINE: f64 = 0.2;
/// Profile signal when the profile matches the dimension
const PROFILE_MATCH: f64 = 1.0;
/// Age assumed for the dehydration breakdown when none is known
const DEFAULT_AGE: u32 = 30;

/// Scale `value` linearly from `[low, high]` into `[0, 1]`, clamping outside
#[must_use]
pub fn scale_signal(value: f64, low: f64, high: f64) -> f64 {
    ((value - low) / (high - low)).clamp(0.0, 1.0)
}

/// Round to one decimal on the exact binary value
///
/// A value only sits exactly halfway between two tenths when it is an odd
/// multiple of 0.25; those ties go to the even tenth. Everything else is
/// rounded by exact decimal formatting, so 1.15 (stored just below the half)
/// becomes 1.1.
fn round_one_decimal(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).round_ties_even() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Turn named signals into percentage contributions
///
/// A total of exactly zero is replaced by 1.0, which leaves every
/// percentage at 0.
#[must_use]
pub fn normalize_signals(signals: [(&str, f64); 3]) -> FactorList {
    let total: f64 = signals.iter().map(|(_, s)| s).sum();
    let divisor = if total == 0.0 { 1.0 } else { total };

    signals
        .into_iter()
        .map(|(name, signal)| {
            FactorContribution::new(name, round_one_decimal(signal / divisor * 100.0))
        })
        .collect()
}

fn profile_signal(
    profile: Option<&HealthProfile>,
    matches: impl Fn(&HealthProfile) -> bool,
) -> f64 {
    match profile {
        Some(p) if matches(p) || p.is_senior() => PROFILE_MATCH,
        _ => PROFILE_BASELINE,
    }
}

/// Respiratory breakdown: PM2.5, ozone and profile
#[must_use]
pub fn asthma_factors(air: &AirQualityReading, profile: Option<&HealthProfile>) -> FactorList {
    let pm25 = scale_signal(air.pm25.unwrap_or(0.0), 0.0, 60.0);
    let o3 = scale_signal(air.o3.unwrap_or(0.0), 0.0, 150.0);
    let profile = profile_signal(profile, HealthProfile::has_respiratory_condition);

    normalize_signals([
        ("PM2.5", pm25),
        ("Ozone (O3)", o3),
        ("Profile (asthma/age)", profile),
    ])
}

/// Heat breakdown: heat index, humidity and profile
#[must_use]
pub fn heat_factors(weather: &EnvironmentalReading, profile: Option<&HealthProfile>) -> FactorList {
    let heat_index = scale_signal(weather.heat_index_c(), 27.0, 40.0);
    let humidity = scale_signal(weather.humidity(), 40.0, 90.0);
    let profile = profile_signal(profile, HealthProfile::has_cardiovascular_condition);

    normalize_signals([
        ("Heat Index", heat_index),
        ("Humidity", humidity),
        ("Profile (age/heart/resp.)", profile),
    ])
}

/// Dehydration breakdown: heat index, humidity and age
#[must_use]
pub fn dehydration_factors(
    weather: &EnvironmentalReading,
    profile: Option<&HealthProfile>,
) -> FactorList {
    let age = profile.and_then(|p| p.age).unwrap_or(DEFAULT_AGE);

    let heat_index = scale_signal(weather.heat_index_c(), 27.0, 40.0);
    let humidity = scale_signal(weather.humidity(), 50.0, 90.0);
    let age = scale_signal(f64::from(age), 40.0, 70.0);

    normalize_signals([
        ("Heat Index", heat_index),
        ("Humidity", humidity),
        ("Age (65+)", age),
    ])
}

/// Build the factor breakdown for all three dimensions
#[must_use]
pub fn build_contributing_factors(
    weather: &EnvironmentalReading,
    air: &AirQualityReading,
    profile: Option<&HealthProfile>,
) -> ContributingFactors {
    ContributingFactors {
        asthma: asthma_factors(air, profile),
        heat: heat_factors(weather, profile),
        dehydration: dehydration_factors(weather, profile),
    }
}
