//! Overall risk aggregation
//!
//! Weighted average of the three component scores. Heat and dehydration
//! count slightly more than air quality.

use crate::models::scores::RiskScore;

pub const ASTHMA_WEIGHT: f64 = 0.30;
pub const HEAT_WEIGHT: f64 = 0.35;
pub const DEHYDRATION_WEIGHT: f64 = 0.35;

const MIN_OVERALL_SCORE: u8 = 1;
const MAX_OVERALL_SCORE: u8 = 4;

/// Unrounded weighted average of the component scores
#[must_use]
pub fn weighted_score(asthma_score: u8, heat_score: u8, dehydration_score: u8) -> f64 {
    f64::from(asthma_score) * ASTHMA_WEIGHT
        + f64::from(heat_score) * HEAT_WEIGHT
        + f64::from(dehydration_score) * DEHYDRATION_WEIGHT
}

/// Combine the final component scores into the overall score
///
/// The weighted average is rounded half-to-even (2.5 becomes 2, 3.5 becomes
/// 4) and clamped to 1..=4.
#[must_use]
pub fn overall_score(asthma_score: u8, heat_score: u8, dehydration_score: u8) -> u8 {
    let rounded = weighted_score(asthma_score, heat_score, dehydration_score).round_ties_even();
    // Inputs are u8, so the weighted value is within 0..=255
    let rounded = rounded as u8;
    rounded.clamp(MIN_OVERALL_SCORE, MAX_OVERALL_SCORE)
}

/// Build the overall `RiskScore`
#[must_use]
pub fn compute_overall_risk(asthma_score: u8, heat_score: u8, dehydration_score: u8) -> RiskScore {
    RiskScore::from_score(overall_score(asthma_score, heat_score, dehydration_score))
}
