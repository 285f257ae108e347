//! Profile sensitivity adjustment
//!
//! An at-risk profile raises the air and heat scores by one point before
//! they are classified. Dehydration has its own age handling and the overall
//! score only moves through its inputs.

use super::MAX_SCORE;
use crate::models::profile::HealthProfile;

/// Whether a profile marks the person as more sensitive
///
/// True for age 65+ or any respiratory or cardiovascular condition.
#[must_use]
pub fn is_at_risk(profile: Option<&HealthProfile>) -> bool {
    profile.is_some_and(|p| {
        p.is_senior() || p.has_respiratory_condition() || p.has_cardiovascular_condition()
    })
}

/// Raise a score by one point for at-risk profiles, capped at 5
#[must_use]
pub fn adjust_for_sensitivity(score: u8, at_risk: bool) -> u8 {
    if at_risk {
        score.saturating_add(1).min(MAX_SCORE)
    } else {
        score
    }
}
