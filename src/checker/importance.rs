use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of an inspector message.
///
/// `Critical`, `BestPracticeViolation` and `BestPracticeSuggestion` form the in-band
/// scale used for thresholds. `Error` (internal failure during inspection) and
/// `Validation` (structural failure reported by the container reader) are out-of-band:
/// they never take part in threshold comparisons and are always reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Importance {
    Error,
    Validation,
    Critical,
    BestPracticeViolation,
    #[default]
    BestPracticeSuggestion,
}

impl Importance {
    /// Fixed order of levels in an organized report, most severe first.
    pub const REPORT_ORDER: [Self; 5] = [
        Self::Error,
        Self::Validation,
        Self::Critical,
        Self::BestPracticeViolation,
        Self::BestPracticeSuggestion,
    ];

    /// Levels a check may be registered at, most severe first.
    pub const IN_BAND: [Self; 3] = [
        Self::Critical,
        Self::BestPracticeViolation,
        Self::BestPracticeSuggestion,
    ];

    #[must_use]
    pub const fn is_in_band(self) -> bool {
        self.rank().is_some()
    }

    /// Position on the in-band scale (higher is more severe).
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::Critical => Some(2),
            Self::BestPracticeViolation => Some(1),
            Self::BestPracticeSuggestion => Some(0),
            Self::Error | Self::Validation => None,
        }
    }

    /// Whether a message or check at this level passes `threshold`.
    ///
    /// Out-of-band levels always pass. An out-of-band threshold admits nothing in-band.
    #[must_use]
    pub const fn meets(self, threshold: Self) -> bool {
        match (self.rank(), threshold.rank()) {
            (None, _) => true,
            (Some(level), Some(min)) => level >= min,
            (Some(_), None) => false,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Validation => "VALIDATION",
            Self::Critical => "CRITICAL",
            Self::BestPracticeViolation => "BEST_PRACTICE_VIOLATION",
            Self::BestPracticeSuggestion => "BEST_PRACTICE_SUGGESTION",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Importance {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        Self::REPORT_ORDER
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| format!("Unknown importance level: {s}"))
    }
}

#[cfg(test)]
#[path = "importance_tests.rs"]
mod tests;
