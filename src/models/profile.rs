//! Personal health profile
//!
//! Conditions are free text. Matching is a case-insensitive substring test
//! against two fixed keyword lists; anything else is carried but ignored.

use serde::{Deserialize, Serialize};

/// Age from which a person is treated as more vulnerable
pub const SENIOR_AGE: u32 = 65;

/// Keywords marking a respiratory condition
pub const RESPIRATORY_KEYWORDS: [&str; 4] = ["asthma", "copd", "bronchitis", "respiratory"];

/// Keywords marking a cardiovascular condition
pub const CARDIOVASCULAR_KEYWORDS: [&str; 4] =
    ["heart", "cardio", "hypertension", "cardiovascular"];

/// Optional health profile supplied with a request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthProfile {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl HealthProfile {
    #[must_use]
    pub fn new(age: Option<u32>, conditions: Vec<String>) -> Self {
        Self { age, conditions }
    }

    /// Whether the age is known and at least 65
    #[must_use]
    pub fn is_senior(&self) -> bool {
        self.age.is_some_and(|age| age >= SENIOR_AGE)
    }

    /// Whether any condition mentions a respiratory keyword
    #[must_use]
    pub fn has_respiratory_condition(&self) -> bool {
        self.matches_any(&RESPIRATORY_KEYWORDS)
    }

    /// Whether any condition mentions a cardiovascular keyword
    #[must_use]
    pub fn has_cardiovascular_condition(&self) -> bool {
        self.matches_any(&CARDIOVASCULAR_KEYWORDS)
    }

    fn matches_any(&self, keywords: &[&str]) -> bool {
        self.conditions.iter().any(|condition| {
            let lower = condition.to_lowercase();
            keywords.iter().any(|keyword| lower.contains(keyword))
        })
    }
}
