//! Component scorers for air pollution and heat
//!
//! Both scorers return raw scores on the 0-5 scale, before any profile
//! adjustment is applied.

use super::MAX_SCORE;
use super::heat_index::celsius_to_fahrenheit;

/// PM2.5 concentration (µg/m³) above which the air score is raised
pub const PM25_BUMP_THRESHOLD: f64 = 35.0;

/// Ozone concentration (µg/m³) above which the air score is raised
pub const OZONE_BUMP_THRESHOLD: f64 = 100.0;

/// Base air score for a categorical AQI
///
/// Levels 3 and 4 are two points apart. Unknown levels score 0.
#[must_use]
pub const fn aqi_base_score(aqi: i32) -> u8 {
    match aqi {
        1 => 0,
        2 => 1,
        3 => 2,
        4 => 4,
        5 => 5,
        _ => 0,
    }
}

/// Score air pollution from the AQI plus optional PM2.5 and ozone readings
///
/// Each pollutant over its threshold adds one point, capped at 5.
#[must_use]
pub fn score_air_pollution(aqi: i32, pm25: Option<f64>, o3: Option<f64>) -> u8 {
    let mut score = aqi_base_score(aqi);

    if pm25.is_some_and(|v| v > PM25_BUMP_THRESHOLD) {
        score = (score + 1).min(MAX_SCORE);
    }
    if o3.is_some_and(|v| v > OZONE_BUMP_THRESHOLD) {
        score = (score + 1).min(MAX_SCORE);
    }

    score
}

/// Score heat stress from the heat index in Celsius
///
/// Breakpoints follow the NOAA caution bands in Fahrenheit. There is no
/// score of 1.
#[must_use]
pub fn score_heat(heat_index_c: f64) -> u8 {
    let hi_f = celsius_to_fahrenheit(heat_index_c);

    if hi_f < 80.0 {
        0
    } else if hi_f < 90.0 {
        2
    } else if hi_f < 103.0 {
        3
    } else if hi_f < 125.0 {
        4
    } else {
        5
    }
}
