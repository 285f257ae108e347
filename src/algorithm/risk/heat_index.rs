//! Heat index (apparent temperature) calculation
//!
//! Uses the NOAA Rothfusz regression with its low- and high-humidity
//! adjustments. Below 80°F the regression is not applied and the heat index
//! equals the air temperature.

/// Temperature (°F) below which humidity has no effect
pub const REGRESSION_THRESHOLD_F: f64 = 80.0;

/// Convert Celsius to Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert Fahrenheit to Celsius
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Compute the heat index in Celsius from temperature (°C) and relative humidity (%)
#[must_use]
pub fn compute_heat_index_c(temperature_c: f64, humidity: f64) -> f64 {
    let t = celsius_to_fahrenheit(temperature_c);
    let r = humidity;

    if t < REGRESSION_THRESHOLD_F {
        return fahrenheit_to_celsius(t);
    }

    let mut hi_f = -42.379 + 2.049_015_23 * t + 10.143_331_27 * r
        - 0.224_755_41 * t * r
        - 0.006_837_83 * t * t
        - 0.054_817_17 * r * r
        + 0.001_228_74 * t * t * r
        + 0.000_852_82 * t * r * r
        - 0.000_001_99 * t * t * r * r;

    if r < 13.0 && (80.0..=112.0).contains(&t) {
        hi_f -= ((13.0 - r) / 4.0) * ((17.0 - (t - 95.0).abs()) / 17.0).sqrt();
    } else if r > 85.0 && (80.0..=87.0).contains(&t) {
        hi_f += ((r - 85.0) / 10.0) * ((87.0 - t) / 5.0);
    }

    fahrenheit_to_celsius(hi_f)
}
