use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::container::{DataObject, ObjectKind};
use crate::error::{InspectorError, Result};

use super::{Check, CheckOutput, Importance, builtin_checks};

/// A check together with its importance for the current run.
#[derive(Clone)]
pub struct RegisteredCheck {
    check: Arc<dyn Check>,
    importance: Importance,
}

impl RegisteredCheck {
    #[must_use]
    pub fn name(&self) -> &str {
        self.check.name()
    }

    #[must_use]
    pub fn target(&self) -> ObjectKind {
        self.check.target()
    }

    /// Effective importance, after any configuration override.
    #[must_use]
    pub const fn importance(&self) -> Importance {
        self.importance
    }

    #[must_use]
    pub fn declared_importance(&self) -> Importance {
        self.check.importance()
    }

    #[must_use]
    pub fn applies_to(&self, object: &DataObject) -> bool {
        object.kind.is_a(self.target())
    }

    /// # Errors
    /// Propagates the check's own error.
    pub fn run(&self, object: &DataObject) -> Result<CheckOutput> {
        self.check.run(object)
    }
}

impl fmt::Debug for RegisteredCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredCheck")
            .field("name", &self.name())
            .field("target", &self.target())
            .field("importance", &self.importance)
            .finish()
    }
}

/// Checks keyed by name, iterated in registration order.
///
/// Cloning is cheap; the orchestrator clones the base registry for every run so that
/// configuration overrides stay run-scoped.
#[derive(Debug, Clone, Default)]
pub struct CheckRegistry {
    checks: IndexMap<String, RegisteredCheck>,
}

impl CheckRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the bundled check catalog.
    ///
    /// # Errors
    /// Returns an error if two bundled checks share a name.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for check in builtin_checks() {
            registry.register(check)?;
        }
        Ok(registry)
    }

    /// Add a check.
    ///
    /// # Errors
    /// Returns `DuplicateCheck` if the name is taken, or `Config` if the check declares
    /// an out-of-band importance.
    pub fn register(&mut self, check: impl Check + 'static) -> Result<()> {
        self.register_arc(Arc::new(check))
    }

    /// Add a shared check.
    ///
    /// # Errors
    /// Same as [`CheckRegistry::register`].
    pub fn register_arc(&mut self, check: Arc<dyn Check>) -> Result<()> {
        let name = check.name().to_string();
        if self.checks.contains_key(&name) {
            return Err(InspectorError::DuplicateCheck(name));
        }
        let importance = check.importance();
        if !importance.is_in_band() {
            return Err(InspectorError::Config(format!(
                "check '{name}' declares out-of-band importance {importance}"
            )));
        }
        self.checks
            .insert(name, RegisteredCheck { check, importance });
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegisteredCheck> {
        self.checks.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    /// All checks in registration order.
    pub fn all(&self) -> impl Iterator<Item = &RegisteredCheck> {
        self.checks.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Reassign the importance of a registered check. Returns `false` if no check has
    /// that name.
    ///
    /// # Errors
    /// Returns `Config` for out-of-band levels.
    pub fn set_importance(&mut self, name: &str, importance: Importance) -> Result<bool> {
        if !importance.is_in_band() {
            return Err(InspectorError::Config(format!(
                "cannot assign out-of-band importance {importance} to check '{name}'"
            )));
        }
        Ok(self.checks.get_mut(name).is_some_and(|entry| {
            entry.importance = importance;
            true
        }))
    }

    /// Remove a check, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<RegisteredCheck> {
        self.checks.shift_remove(name)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
