use std::collections::HashSet;

use crate::checker::{Importance, RegisteredCheck};
use crate::error::{InspectorError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Selection {
    #[default]
    All,
    Ignore(HashSet<String>),
    Select(HashSet<String>),
}

/// Decides which registered checks run for a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckFilter {
    threshold: Importance,
    selection: Selection,
}

impl CheckFilter {
    /// Build a filter from a minimum importance and an optional ignore or select list.
    ///
    /// # Errors
    /// Returns `ConflictingFilters` when both lists are given, even if empty, and
    /// `InvalidThreshold` for `ERROR` or `VALIDATION`.
    pub fn new(
        threshold: Importance,
        ignore: Option<Vec<String>>,
        select: Option<Vec<String>>,
    ) -> Result<Self> {
        if !threshold.is_in_band() {
            return Err(InspectorError::InvalidThreshold(threshold.to_string()));
        }
        let selection = match (ignore, select) {
            (Some(_), Some(_)) => return Err(InspectorError::ConflictingFilters),
            (Some(names), None) => Selection::Ignore(names.into_iter().collect()),
            (None, Some(names)) => Selection::Select(names.into_iter().collect()),
            (None, None) => Selection::All,
        };
        Ok(Self {
            threshold,
            selection,
        })
    }

    #[must_use]
    pub const fn threshold(&self) -> Importance {
        self.threshold
    }

    #[must_use]
    pub fn allows(&self, check: &RegisteredCheck) -> bool {
        if !check.importance().meets(self.threshold) {
            return false;
        }
        match &self.selection {
            Selection::All => true,
            Selection::Ignore(names) => !names.contains(check.name()),
            Selection::Select(names) => names.contains(check.name()),
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
