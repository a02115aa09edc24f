mod builtin;
mod importance;
mod message;
mod modules;
mod registry;

pub use builtin::builtin_checks;
pub use importance::Importance;
pub use message::{CheckOutput, Finding, InspectorMessage};
pub use modules::{ModuleCatalog, ModuleLoader};
pub use registry::{CheckRegistry, RegisteredCheck};

use crate::container::{DataObject, ObjectKind};
use crate::error::Result;

/// A named validation rule applied to every object of its target kind.
pub trait Check: Send + Sync {
    /// Unique name used for registration, filtering and configuration.
    fn name(&self) -> &str;

    /// Objects of this kind, or any kind below it, are passed to [`Check::run`].
    fn target(&self) -> ObjectKind;

    /// Importance declared by the check author. Configuration may override it per run.
    fn importance(&self) -> Importance;

    /// Inspect one object.
    ///
    /// # Errors
    /// An error aborts inspection of the current file and is reported as an `ERROR`
    /// message.
    fn run(&self, object: &DataObject) -> Result<CheckOutput>;
}

pub type CheckFn = fn(&DataObject) -> Result<CheckOutput>;

/// Adapts a plain function into a [`Check`].
#[derive(Debug, Clone)]
pub struct FnCheck {
    name: String,
    target: ObjectKind,
    importance: Importance,
    func: CheckFn,
}

impl FnCheck {
    #[must_use]
    pub fn new(name: &str, target: ObjectKind, importance: Importance, func: CheckFn) -> Self {
        Self {
            name: name.to_string(),
            target,
            importance,
            func,
        }
    }
}

impl Check for FnCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn target(&self) -> ObjectKind {
        self.target
    }

    fn importance(&self) -> Importance {
        self.importance
    }

    fn run(&self, object: &DataObject) -> Result<CheckOutput> {
        (self.func)(object)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
