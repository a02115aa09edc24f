use indexmap::IndexMap;

use crate::error::{InspectorError, Result};

use super::CheckRegistry;
use super::builtin::ecephys_checks;

/// Registers a module's checks into a run's registry.
pub type ModuleLoader = fn(&mut CheckRegistry) -> Result<()>;

/// Named check modules that can be loaded on request before a run.
///
/// Loading is explicit: a module's checks are invisible until its name is passed in
/// the run options.
#[derive(Debug, Clone, Default)]
pub struct ModuleCatalog {
    loaders: IndexMap<String, ModuleLoader>,
}

impl ModuleCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the modules shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.add("ecephys", load_ecephys);
        catalog
    }

    /// Add or replace a module loader.
    pub fn add(&mut self, name: &str, loader: ModuleLoader) {
        self.loaders.insert(name.to_string(), loader);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.loaders.keys().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.loaders.contains_key(name)
    }

    /// Load one module into `registry`.
    ///
    /// # Errors
    /// Returns `ModuleLoad` if the module is unknown or its loader fails.
    pub fn load(&self, name: &str, registry: &mut CheckRegistry) -> Result<()> {
        let loader = self
            .loaders
            .get(name)
            .ok_or_else(|| InspectorError::ModuleLoad {
                module: name.to_string(),
                reason: "unknown module".to_string(),
            })?;
        loader(registry).map_err(|e| InspectorError::ModuleLoad {
            module: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Load every module in `names`, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the first `ModuleLoad` error.
    pub fn load_all(&self, names: &[String], registry: &mut CheckRegistry) -> Result<()> {
        names
            .iter()
            .try_for_each(|name| self.load(name, registry))
    }
}

fn load_ecephys(registry: &mut CheckRegistry) -> Result<()> {
    ecephys_checks()
        .into_iter()
        .try_for_each(|check| registry.register(check))
}

#[cfg(test)]
#[path = "modules_tests.rs"]
mod tests;
