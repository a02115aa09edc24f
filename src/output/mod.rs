pub mod error_output;
mod json;
mod progress;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use progress::InspectProgress;
pub use text::TextFormatter;

use std::fs;
use std::path::Path;

use crate::checker::Importance;
use crate::error::{InspectorError, Result};
use crate::report::InspectionResults;

/// Trait for rendering inspection results.
pub trait OutputFormatter {
    /// Format the results into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, results: &InspectionResults) -> Result<String>;
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors when stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

pub(crate) const fn importance_color(level: Importance) -> &'static str {
    match level {
        Importance::Error | Importance::Critical => ansi::RED,
        Importance::Validation => ansi::MAGENTA,
        Importance::BestPracticeViolation => ansi::YELLOW,
        Importance::BestPracticeSuggestion => ansi::CYAN,
    }
}

/// Fail early when a report would replace an existing file without `overwrite`.
///
/// # Errors
/// Returns `ReportExists`.
pub fn ensure_report_target(path: &Path, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(InspectorError::ReportExists(path.to_path_buf()));
    }
    Ok(())
}

/// Write a report file, refusing to replace an existing one unless `overwrite` is set.
///
/// # Errors
/// Returns `ReportExists` when the file exists and `overwrite` is false, or an IO error.
pub fn write_report(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    ensure_report_target(path, overwrite)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
