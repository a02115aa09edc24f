use std::fmt::Write;

use crate::checker::{CheckRegistry, ModuleCatalog};
use crate::cli::{ChecksArgs, Cli};
use crate::inspector::Inspector;
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::inspect::load_overrides;

#[must_use]
pub fn run_checks(args: &ChecksArgs, cli: &Cli) -> i32 {
    match run_checks_impl(args) {
        Ok(listing) => {
            print!("{listing}");
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Build the check listing for the registry a run with these options would use.
///
/// # Errors
/// Returns an error if a module or the override file cannot be loaded.
pub fn run_checks_impl(args: &ChecksArgs) -> Result<String> {
    let inspector = Inspector::builtin()?;
    let overrides = load_overrides(args.config.as_deref())?;
    let prepared = inspector.prepare(&args.modules, overrides.as_ref())?;
    Ok(format_checks(&prepared.registry, inspector.modules()))
}

/// One row per check: name, target kind, effective importance. Reassigned checks show
/// their declared level too.
#[must_use]
pub fn format_checks(registry: &CheckRegistry, modules: &ModuleCatalog) -> String {
    let name_width = registry.names().map(str::len).max().unwrap_or(0);
    let kind_width = registry
        .all()
        .map(|check| check.target().as_str().len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for check in registry.all() {
        let _ = write!(
            output,
            "{:<name_width$}  {:<kind_width$}  {}",
            check.name(),
            check.target().as_str(),
            check.importance()
        );
        if check.importance() != check.declared_importance() {
            let _ = write!(output, " (declared {})", check.declared_importance());
        }
        output.push('\n');
    }

    let names: Vec<&str> = modules.names().collect();
    let _ = writeln!(output, "\n{} checks registered", registry.len());
    if !names.is_empty() {
        let _ = writeln!(output, "Available modules: {}", names.join(", "));
    }
    output
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
