//! Contributing factor models
//!
//! Percentage breakdowns shown alongside the scores. They are derived from
//! the same inputs but never feed back into scoring.

use serde::Serialize;
use smallvec::SmallVec;

/// A named driver and its share of one risk dimension, in percent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorContribution {
    pub factor: String,
    pub percentage: f64,
}

impl FactorContribution {
    #[must_use]
    pub fn new(factor: impl Into<String>, percentage: f64) -> Self {
        Self {
            factor: factor.into(),
            percentage,
        }
    }
}

/// Factor list for one dimension; every dimension has three signals
pub type FactorList = SmallVec<[FactorContribution; 3]>;

/// Factor breakdowns for the three scored dimensions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributingFactors {
    pub asthma: FactorList,
    pub heat: FactorList,
    pub dehydration: FactorList,
}

impl ContributingFactors {
    /// Sum of the percentages in a factor list
    #[must_use]
    pub fn total_percentage(factors: &[FactorContribution]) -> f64 {
        factors.iter().map(|f| f.percentage).sum()
    }
}
