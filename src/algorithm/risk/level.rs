//! Level classification for risk scores
//!
//! Every risk dimension is scored on an internal 0-5 scale and presented as
//! one of four levels. The overall score is additionally mapped to a letter
//! rating for display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical risk levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score 0 or 1
    Low,
    /// Score 2
    Moderate,
    /// Score 3
    High,
    /// Score 4 and above
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Classify a numeric score
    ///
    /// Total over the whole `u8` range: anything above 3 is `VeryHigh`.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Self::Low,
            2 => Self::Moderate,
            3 => Self::High,
            _ => Self::VeryHigh,
        }
    }

    /// Get a descriptive name for this level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Letter rating shown for the overall score, A being the safest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    A,
    B,
    C,
    D,
}

impl Rating {
    /// Map an overall score to a letter
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Self::A,
            2 => Self::B,
            3 => Self::C,
            _ => Self::D,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
