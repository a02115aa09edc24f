use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::checker::Importance;

/// Key of a configuration override bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverrideLevel {
    Critical,
    BestPracticeViolation,
    BestPracticeSuggestion,
    /// Remove the listed checks from the run.
    Skip,
}

impl OverrideLevel {
    /// Importance assigned by this bucket, `None` for `Skip`.
    #[must_use]
    pub const fn importance(self) -> Option<Importance> {
        match self {
            Self::Critical => Some(Importance::Critical),
            Self::BestPracticeViolation => Some(Importance::BestPracticeViolation),
            Self::BestPracticeSuggestion => Some(Importance::BestPracticeSuggestion),
            Self::Skip => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skip => "SKIP",
            Self::Critical => Importance::Critical.as_str(),
            Self::BestPracticeViolation => Importance::BestPracticeViolation.as_str(),
            Self::BestPracticeSuggestion => Importance::BestPracticeSuggestion.as_str(),
        }
    }
}

impl FromStr for OverrideLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        [
            Self::Critical,
            Self::BestPracticeViolation,
            Self::BestPracticeSuggestion,
            Self::Skip,
        ]
        .into_iter()
        .find(|level| level.as_str() == normalized)
        .ok_or_else(|| {
            format!(
                "unknown override level '{s}' (expected CRITICAL, BEST_PRACTICE_VIOLATION, \
                 BEST_PRACTICE_SUGGESTION or SKIP)"
            )
        })
    }
}

/// Per-check importance overrides, kept in the order they were declared.
///
/// ```yaml
/// CRITICAL:
///   - check_subject_exists
/// SKIP:
///   - check_regular_timestamps
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndexMap<String, Vec<String>>")]
pub struct ConfigOverrides {
    entries: IndexMap<OverrideLevel, Vec<String>>,
}

impl ConfigOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append check names to a bucket. A bucket keeps the position of its first
    /// declaration.
    #[must_use]
    pub fn with(mut self, level: OverrideLevel, checks: &[&str]) -> Self {
        self.entries
            .entry(level)
            .or_default()
            .extend(checks.iter().map(ToString::to_string));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (OverrideLevel, &[String])> {
        self.entries
            .iter()
            .map(|(level, names)| (*level, names.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}

impl TryFrom<IndexMap<String, Vec<String>>> for ConfigOverrides {
    type Error = String;

    fn try_from(raw: IndexMap<String, Vec<String>>) -> std::result::Result<Self, Self::Error> {
        let mut overrides = Self::new();
        for (key, names) in raw {
            let level = key.parse::<OverrideLevel>()?;
            overrides.entries.entry(level).or_default().extend(names);
        }
        Ok(overrides)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
