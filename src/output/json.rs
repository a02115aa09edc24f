use indexmap::IndexMap;
use serde::Serialize;

use crate::checker::Importance;
use crate::error::Result;
use crate::report::InspectionResults;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: &'a InspectionResults,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    total_messages: usize,
    levels: IndexMap<Importance, usize>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &InspectionResults) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_files: results.len(),
                total_messages: results.message_count(),
                levels: results.level_counts(),
            },
            results,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
