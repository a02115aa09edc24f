//! Colored error lines for the terminal.
//!
//! Format: `✖ {type}: {message}` followed by an optional `help: {suggestion}` line.

use std::io::{IsTerminal, Write};

use crate::error::InspectorError;

use super::{ColorMode, ansi};

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    /// Formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn stderr_supports_color() -> bool {
        // https://no-color.org: presence of the variable disables color
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Print an orchestration error and its suggestion to stderr.
    pub fn print(&self, err: &InspectorError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, err.error_type(), &err.to_string(), err.suggestion());
    }

    /// Failing to write to stderr is ignored; there is nowhere left to report it.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_help(w, suggestion);
    }

    fn write_help<W: Write>(&self, w: &mut W, suggestion: Option<&str>) {
        let Some(s) = suggestion else {
            return;
        };
        if self.use_colors {
            let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
        } else {
            let _ = writeln!(w, "  help: {s}");
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
