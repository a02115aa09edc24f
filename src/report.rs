//! Result organizer: shapes collected messages into deterministic per-file reports.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::checker::{Importance, InspectorMessage};

/// Messages collected for one file, grouped by importance in arrival order.
#[derive(Debug, Clone, Default)]
pub struct MessageBuckets {
    buckets: HashMap<Importance, Vec<InspectorMessage>>,
}

impl MessageBuckets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: InspectorMessage) {
        self.buckets
            .entry(message.importance)
            .or_default()
            .push(message);
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = InspectorMessage>) {
        for message in messages {
            self.push(message);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Order buckets by [`Importance::REPORT_ORDER`] and drop empty levels.
#[must_use]
pub fn organize(mut buckets: MessageBuckets) -> FileReport {
    let levels = Importance::REPORT_ORDER
        .into_iter()
        .filter_map(|level| {
            buckets
                .buckets
                .remove(&level)
                .filter(|messages| !messages.is_empty())
                .map(|messages| (level, messages))
        })
        .collect();
    FileReport { levels }
}

/// Messages for one file keyed by importance. Only non-empty levels are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileReport {
    levels: IndexMap<Importance, Vec<InspectorMessage>>,
}

impl FileReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[must_use]
    pub fn get(&self, level: Importance) -> Option<&[InspectorMessage]> {
        self.levels.get(&level).map(Vec::as_slice)
    }

    /// Levels present in the report, in report order.
    pub fn levels(&self) -> impl Iterator<Item = (Importance, &[InspectorMessage])> {
        self.levels
            .iter()
            .map(|(level, messages)| (*level, messages.as_slice()))
    }

    pub fn messages(&self) -> impl Iterator<Item = &InspectorMessage> {
        self.levels.values().flatten()
    }

    #[must_use]
    pub fn message_count(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }
}

/// Reports for a batch, keyed by file path in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InspectionResults {
    files: IndexMap<String, FileReport>,
}

impl InspectionResults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file's report. Re-inspecting a path replaces its earlier report.
    pub fn insert(&mut self, file_path: String, report: FileReport) {
        self.files.insert(file_path, report);
    }

    #[must_use]
    pub fn get(&self, file_path: &str) -> Option<&FileReport> {
        self.files.get(file_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileReport)> {
        self.files.iter().map(|(path, report)| (path.as_str(), report))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn message_count(&self) -> usize {
        self.files.values().map(FileReport::message_count).sum()
    }

    /// Total messages per level across all files, in report order.
    #[must_use]
    pub fn level_counts(&self) -> IndexMap<Importance, usize> {
        Importance::REPORT_ORDER
            .into_iter()
            .filter_map(|level| {
                let count: usize = self
                    .files
                    .values()
                    .filter_map(|report| report.get(level))
                    .map(<[InspectorMessage]>::len)
                    .sum();
                (count > 0).then_some((level, count))
            })
            .collect()
    }
}

impl FromIterator<(String, FileReport)> for InspectionResults {
    fn from_iter<I: IntoIterator<Item = (String, FileReport)>>(iter: I) -> Self {
        let mut results = Self::new();
        for (path, report) in iter {
            results.insert(path, report);
        }
        results
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
