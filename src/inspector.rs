//! Batch orchestration: configure a run-scoped registry, discover files and dispatch them.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::checker::{CheckRegistry, Importance, ModuleCatalog};
use crate::config::{AppliedOverrides, ConfigOverrides, apply_overrides};
use crate::container::{ContainerReader, JsonContainerReader};
use crate::dispatch::{CheckFilter, inspect_file};
use crate::error::Result;
use crate::output::InspectProgress;
use crate::report::InspectionResults;
use crate::scanner::{DirectoryScanner, ExtensionFilter, resolve_inputs};

/// Per-run options. Nothing here outlives the run.
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    /// Check modules to load before dispatch.
    pub modules: Vec<String>,
    pub config: Option<ConfigOverrides>,
    pub ignore: Option<Vec<String>>,
    pub select: Option<Vec<String>>,
    pub threshold: Importance,
}

impl InspectOptions {
    /// Build the check filter these options describe.
    ///
    /// # Errors
    /// Returns `ConflictingFilters` or `InvalidThreshold`.
    pub fn filter(&self) -> Result<CheckFilter> {
        CheckFilter::new(self.threshold, self.ignore.clone(), self.select.clone())
    }
}

/// A registry prepared for one run, with a record of the overrides applied to it.
#[derive(Debug, Clone)]
pub struct PreparedRun {
    pub registry: CheckRegistry,
    pub applied: AppliedOverrides,
}

pub struct Inspector {
    registry: CheckRegistry,
    modules: ModuleCatalog,
    reader: Box<dyn ContainerReader>,
    show_progress: bool,
}

impl Inspector {
    #[must_use]
    pub fn new(
        registry: CheckRegistry,
        modules: ModuleCatalog,
        reader: Box<dyn ContainerReader>,
    ) -> Self {
        Self {
            registry,
            modules,
            reader,
            show_progress: false,
        }
    }

    /// Inspector with the bundled checks, modules and JSON container reader.
    ///
    /// # Errors
    /// Returns an error if the bundled catalog cannot be registered.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(
            CheckRegistry::builtin()?,
            ModuleCatalog::builtin(),
            Box::new(JsonContainerReader::new()),
        ))
    }

    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Base registry. Runs never modify it.
    #[must_use]
    pub const fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn modules(&self) -> &ModuleCatalog {
        &self.modules
    }

    /// Copy the base registry, load `modules` into it and apply `config`.
    ///
    /// # Errors
    /// Returns `ModuleLoad` if a module is unknown or fails to load.
    pub fn prepare(
        &self,
        modules: &[String],
        config: Option<&ConfigOverrides>,
    ) -> Result<PreparedRun> {
        let mut registry = self.registry.clone();
        self.modules.load_all(modules, &mut registry)?;
        if !modules.is_empty() {
            info!(modules = ?modules, checks = registry.len(), "loaded check modules");
        }
        let applied = match config {
            Some(overrides) => apply_overrides(&mut registry, overrides)?,
            None => AppliedOverrides::default(),
        };
        Ok(PreparedRun { registry, applied })
    }

    /// Inspect a file or every container directly inside a directory.
    ///
    /// # Errors
    /// Fails before any file is opened if the filters conflict, the threshold is
    /// out-of-band, a module cannot be loaded, or `path` is neither a file nor a
    /// directory. Per-file failures are reported inside the results instead.
    pub fn run(&self, path: &Path, options: &InspectOptions) -> Result<InspectionResults> {
        let filter = options.filter()?;
        let prepared = self.prepare(&options.modules, options.config.as_ref())?;

        let scanner = DirectoryScanner::new(ExtensionFilter::new(self.reader.extension()));
        let files = resolve_inputs(path, &scanner)?;
        info!(files = files.len(), checks = prepared.registry.len(), "starting inspection");

        Ok(self.inspect_files(&files, &prepared.registry, &filter))
    }

    /// Dispatch `files` in parallel. Results keep the order of `files`.
    #[must_use]
    pub fn inspect_files(
        &self,
        files: &[PathBuf],
        registry: &CheckRegistry,
        filter: &CheckFilter,
    ) -> InspectionResults {
        let progress = InspectProgress::new(files.len() as u64, !self.show_progress);
        let reports: Vec<_> = files
            .par_iter()
            .map(|path| {
                let report = inspect_file(self.reader.as_ref(), path, registry, filter);
                debug!(file = %path.display(), messages = report.message_count(), "inspected");
                progress.inc(path);
                (path.display().to_string(), report)
            })
            .collect();
        progress.finish();
        reports.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "inspector_tests.rs"]
mod tests;
