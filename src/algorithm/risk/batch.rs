//! Parallel batch assessment
//!
//! Requests share nothing, so they are assessed on the rayon pool without
//! locking. Results keep the order of the input.

use std::time::Instant;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use log::info;
use rayon::prelude::*;

use crate::config::RiskEngineConfig;
use crate::models::assessment::{AssessmentRequest, HealthRiskAssessment};
use crate::utils::logging::{log_operation_complete, log_operation_start};

use super::assessment::assess;

/// Assess many requests in parallel, all stamped with `evaluated_at`
#[must_use]
pub fn assess_batch(
    requests: &[AssessmentRequest],
    config: &RiskEngineConfig,
    evaluated_at: DateTime<Utc>,
) -> Vec<HealthRiskAssessment> {
    log_operation_start("Assessing", &format!("{} requests", requests.len()));
    let start = Instant::now();

    let results: Vec<HealthRiskAssessment> = requests
        .par_iter()
        .map(|request| assess(request, config, evaluated_at))
        .collect();

    log_operation_complete("assessed", results.len(), Some(start.elapsed()));

    if !results.is_empty() {
        let distribution = results
            .iter()
            .counts_by(|r| r.scores.overall_risk.level())
            .into_iter()
            .sorted()
            .map(|(level, count)| format!("{level}: {count}"))
            .join(", ");
        info!("Overall risk distribution: {distribution}");
    }

    results
}
