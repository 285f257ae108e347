//! Risk score models
//!
//! A `RiskScore` can only be built from a numeric score, so its level always
//! agrees with the score.

use serde::Serialize;

pub use crate::algorithm::risk::level::RiskLevel;

/// Score for one risk dimension together with its level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RiskScore {
    level: RiskLevel,
    score: u8,
}

impl RiskScore {
    /// Build a score, deriving its level
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        Self {
            level: RiskLevel::from_score(score),
            score,
        }
    }

    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    #[must_use]
    pub const fn level(&self) -> RiskLevel {
        self.level
    }
}

/// The four scores produced by one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScoreSet {
    pub asthma_risk: RiskScore,
    pub heat_risk: RiskScore,
    pub dehydration_risk: RiskScore,
    pub overall_risk: RiskScore,
}
