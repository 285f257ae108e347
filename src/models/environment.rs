//! Environmental reading models
//!
//! Normalized weather and air-quality values handed to the engine by the
//! caller. The heat index is always derived, never supplied.

use serde::{Deserialize, Serialize};

use crate::algorithm::risk::heat_index::compute_heat_index_c;

/// Weather values as supplied in a request
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct WeatherInput {
    temperature_c: f64,
    humidity: f64,
}

impl From<WeatherInput> for EnvironmentalReading {
    fn from(input: WeatherInput) -> Self {
        Self::new(input.temperature_c, input.humidity)
    }
}

/// Temperature and humidity with the heat index derived from them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "WeatherInput")]
pub struct EnvironmentalReading {
    temperature_c: f64,
    humidity: f64,
    heat_index_c: f64,
}

impl EnvironmentalReading {
    /// Create a reading from temperature (°C) and relative humidity (%)
    #[must_use]
    pub fn new(temperature_c: f64, humidity: f64) -> Self {
        Self {
            temperature_c,
            humidity,
            heat_index_c: compute_heat_index_c(temperature_c, humidity),
        }
    }

    #[must_use]
    pub const fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    #[must_use]
    pub const fn humidity(&self) -> f64 {
        self.humidity
    }

    #[must_use]
    pub const fn heat_index_c(&self) -> f64 {
        self.heat_index_c
    }
}

/// Air-quality reading
///
/// `aqi` is the categorical index (1 = good, 5 = very poor). Concentrations
/// are in µg/m³ and may be missing from the provider response.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AirQualityReading {
    pub aqi: i32,
    #[serde(default)]
    pub pm25: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub o3: Option<f64>,
}

impl AirQualityReading {
    /// Create a reading with only the categorical index
    #[must_use]
    pub const fn new(aqi: i32) -> Self {
        Self {
            aqi,
            pm25: None,
            pm10: None,
            o3: None,
        }
    }

    #[must_use]
    pub const fn with_pm25(mut self, pm25: f64) -> Self {
        self.pm25 = Some(pm25);
        self
    }

    #[must_use]
    pub const fn with_pm10(mut self, pm10: f64) -> Self {
        self.pm10 = Some(pm10);
        self
    }

    #[must_use]
    pub const fn with_o3(mut self, o3: f64) -> Self {
        self.o3 = Some(o3);
        self
    }
}
