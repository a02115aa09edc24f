use std::io::IsTerminal;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} Inspecting [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}";

/// Progress bar on stderr naming the file that finished last.
///
/// Drawn only when stderr is a TTY and the run is not quiet. Cloning shares the bar, so
/// rayon workers can report through their own handle.
#[derive(Clone)]
pub struct InspectProgress {
    bar: ProgressBar,
}

impl InspectProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        Self::new_with_visibility(total, quiet, std::io::stderr().is_terminal())
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        if quiet || !is_tty {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        Self {
            bar: ProgressBar::new(total).with_style(style),
        }
    }

    /// Record `path` as inspected.
    pub fn inc(&self, path: &Path) {
        if let Some(name) = path.file_name() {
            self.bar.set_message(name.to_string_lossy().into_owned());
        }
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
