use std::fmt::Write;

use crate::checker::InspectorMessage;
use crate::error::Result;
use crate::report::InspectionResults;

use super::{ColorMode, OutputFormatter, ansi, importance_color};

/// Console report grouped by file, then by importance, with numbered messages.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    /// With `verbose >= 1`, files without messages are listed too.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: mode.use_colors(),
            verbose,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_message(&self, index: usize, message: &InspectorMessage, output: &mut String) {
        let mut subject = String::new();
        if let Some(kind) = &message.object_type {
            let _ = write!(subject, " - '{kind}' object");
        }
        if let Some(name) = &message.object_name {
            let _ = write!(subject, " '{name}'");
        }
        if let Some(location) = &message.location {
            let _ = write!(subject, " at location '{location}'");
        }
        let check = self.paint(&message.check_name, ansi::BOLD);
        let _ = writeln!(output, "    {index}. {check}{subject}");
        let _ = writeln!(output, "       Message: {}", message.message);
    }

    fn format_summary(&self, results: &InspectionResults) -> String {
        let counts = results.level_counts();
        if counts.is_empty() {
            let ok = self.paint("No issues found", ansi::GREEN);
            return format!("Summary: {ok} in {} files", results.len());
        }
        let levels: Vec<String> = counts
            .iter()
            .map(|(level, count)| {
                let label = format!("{count} {level}");
                self.paint(&label, importance_color(*level))
            })
            .collect();
        format!(
            "Summary: {} messages in {} files ({})",
            results.message_count(),
            results.len(),
            levels.join(", ")
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &InspectionResults) -> Result<String> {
        let mut output = String::new();

        for (path, report) in results.iter() {
            if report.is_empty() {
                if self.verbose >= 1 {
                    let _ = writeln!(output, "{} {path}\n", self.paint("✓", ansi::GREEN));
                }
                continue;
            }

            let _ = writeln!(output, "{}", self.paint(path, ansi::BOLD));
            for (level, messages) in report.levels() {
                let header = format!("{level} ({})", messages.len());
                let _ = writeln!(output, "  {}", self.paint(&header, importance_color(level)));
                for (index, message) in messages.iter().enumerate() {
                    self.format_message(index + 1, message, &mut output);
                }
            }
            output.push('\n');
        }

        let _ = writeln!(output, "{}", self.format_summary(results));
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
