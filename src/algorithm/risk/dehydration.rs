//! Dehydration risk model
//!
//! Driven mainly by the heat index, with bumps for humid air and for older
//! adults. This dimension never exceeds 4.

use crate::models::profile::SENIOR_AGE;
use crate::models::scores::RiskScore;

/// Heat index breakpoints (°C) and the score each one sets
const HEAT_INDEX_STEPS: [(f64, u8); 3] = [(27.0, 2), (32.0, 3), (38.0, 4)];

/// Relative humidity (%) at which dehydration risk is raised
pub const HUMID_THRESHOLD: f64 = 70.0;

const MIN_DEHYDRATION_SCORE: u8 = 1;
const MAX_DEHYDRATION_SCORE: u8 = 4;

/// Compute the dehydration score
///
/// The humidity and age bumps are applied in that order, each checked
/// against the score as it stands after the previous step.
/// `temperature_c` is accepted alongside the heat index but does not move
/// the score.
#[must_use]
pub fn dehydration_score(
    _temperature_c: f64,
    humidity: f64,
    heat_index_c: f64,
    age: Option<u32>,
) -> u8 {
    let mut score = MIN_DEHYDRATION_SCORE;

    for (threshold, step_score) in HEAT_INDEX_STEPS {
        if heat_index_c >= threshold {
            score = step_score;
        }
    }

    if humidity >= HUMID_THRESHOLD && score < MAX_DEHYDRATION_SCORE {
        score += 1;
    }

    if age.is_some_and(|a| a >= SENIOR_AGE) && score < MAX_DEHYDRATION_SCORE {
        score += 1;
    }

    score.clamp(MIN_DEHYDRATION_SCORE, MAX_DEHYDRATION_SCORE)
}

/// Build the dehydration `RiskScore`
#[must_use]
pub fn compute_dehydration_risk(
    temperature_c: f64,
    humidity: f64,
    heat_index_c: f64,
    age: Option<u32>,
) -> RiskScore {
    RiskScore::from_score(dehydration_score(temperature_c, humidity, heat_index_c, age))
}
