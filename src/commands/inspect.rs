use std::path::Path;

use tracing::info;

use crate::cli::{Cli, InspectArgs};
use crate::config::{ConfigLoader, ConfigOverrides, FileConfigLoader};
use crate::inspector::{InspectOptions, Inspector};
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormatter, TextFormatter, ensure_report_target,
    write_report,
};
use crate::report::InspectionResults;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, InspectorError, Result};

#[must_use]
pub fn run_inspect(args: &InspectArgs, cli: &Cli) -> i32 {
    match run_inspect_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color_mode(args, cli)).print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Inspect `args.path` and write the requested reports.
///
/// Findings never affect the outcome; only orchestration failures are errors.
///
/// # Errors
/// Returns an error for bad filters, config or modules, an invalid path, two reports aimed
/// at the same file, or a report file that already exists without `--overwrite`.
pub fn run_inspect_impl(args: &InspectArgs, cli: &Cli) -> Result<()> {
    if let (Some(json), Some(text)) = (&args.json_file_path, &args.report_file_path)
        && json == text
    {
        return Err(InspectorError::Config(format!(
            "JSON and text reports cannot share the path {}",
            json.display()
        )));
    }
    for target in [&args.json_file_path, &args.report_file_path]
        .into_iter()
        .flatten()
    {
        ensure_report_target(target, args.overwrite)?;
    }

    let options = InspectOptions {
        modules: args.modules.clone(),
        config: load_overrides(args.config.as_deref())?,
        ignore: args.ignore.clone(),
        select: args.select.clone(),
        threshold: args.threshold,
    };
    let inspector = Inspector::builtin()?.with_progress(!cli.quiet);
    let results = inspector.run(&args.path, &options)?;
    info!(
        files = results.len(),
        messages = results.message_count(),
        "inspection complete"
    );

    write_outputs(&results, args, cli)
}

fn write_outputs(results: &InspectionResults, args: &InspectArgs, cli: &Cli) -> Result<()> {
    if let Some(path) = &args.json_file_path {
        write_report(path, &JsonFormatter.format(results)?, args.overwrite)?;
        info!(path = %path.display(), "wrote JSON report");
    }
    if let Some(path) = &args.report_file_path {
        let text = TextFormatter::with_verbose(ColorMode::Never, cli.verbose).format(results)?;
        write_report(path, &text, args.overwrite)?;
        info!(path = %path.display(), "wrote text report");
    }
    if !cli.quiet {
        let formatter = TextFormatter::with_verbose(color_mode(args, cli), cli.verbose);
        print!("{}", formatter.format(results)?);
    }
    Ok(())
}

/// Load an override file, if one was given.
///
/// # Errors
/// Returns a config error if the file is missing, has an unknown extension, or fails to
/// parse.
pub fn load_overrides(path: Option<&Path>) -> Result<Option<ConfigOverrides>> {
    path.map(|p| FileConfigLoader::new().load_from_path(p))
        .transpose()
}

fn color_mode(args: &InspectArgs, cli: &Cli) -> ColorMode {
    if args.no_color {
        ColorMode::Never
    } else {
        cli.color.into()
    }
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
