use std::fs;

use crate::cli::InitArgs;
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, InspectorError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::stderr().print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Write a sample override file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(InspectorError::Config(format!(
            "Override file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_overrides_template())?;

    println!("Created override file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub const fn generate_overrides_template() -> &'static str {
    r"# nwb-inspect importance overrides
# Pass with: nwb-inspect inspect <PATH> --config nwb-inspect.yaml
#
# Keys: CRITICAL, BEST_PRACTICE_VIOLATION, BEST_PRACTICE_SUGGESTION, SKIP.
# Sections apply top to bottom; a check listed twice keeps the later level.
# Checks under SKIP are removed from the run.
# Run `nwb-inspect checks` to list check names.

CRITICAL:
  - check_subject_exists

BEST_PRACTICE_SUGGESTION:
  - check_description

SKIP:
  - check_regular_timestamps
"
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
