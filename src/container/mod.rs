//! Container model consumed by the dispatch engine.
//!
//! A container is one opened data file. Its reader owns parsing and structural
//! validation; the engine only sees the validation issues and the flat, ordered list of
//! typed objects the container exposes.

mod json;
mod kind;

pub use json::{JsonContainerReader, NWB_EXTENSION};
pub use kind::ObjectKind;

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// One typed object inside a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataObject {
    pub kind: ObjectKind,
    pub name: String,
    /// Path of the object inside the container, e.g. `/acquisition/lfp`.
    pub location: String,
    #[serde(default)]
    pub attributes: IndexMap<String, Value>,
}

impl DataObject {
    #[must_use]
    pub fn new(kind: ObjectKind, name: &str, location: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            location: location.to_string(),
            attributes: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// String attribute, treating `null` as absent.
    #[must_use]
    pub fn str_attribute(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(Value::as_str)
    }

    /// Numeric array attribute. Returns `None` if absent or if any element is not a number.
    #[must_use]
    pub fn number_array(&self, key: &str) -> Option<Vec<f64>> {
        self.attribute(key)?
            .as_array()?
            .iter()
            .map(Value::as_f64)
            .collect()
    }
}

/// A structural problem reported by the container's validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub reason: String,
    pub location: String,
    /// Name of the failing component, usually the object kind.
    pub name: String,
}

/// An opened container. Dropping it releases the underlying handle.
pub trait Container {
    /// Run structural validation and return every issue found.
    ///
    /// # Errors
    /// Returns an error if the validator itself cannot run.
    fn validate(&self) -> Result<Vec<ValidationIssue>>;

    /// All contained objects in a stable walk order.
    ///
    /// # Errors
    /// Returns an error if the objects cannot be read.
    fn objects(&self) -> Result<&[DataObject]>;
}

/// Opens containers of a single on-disk format.
pub trait ContainerReader: Send + Sync {
    /// File extension (without the dot) used to discover containers in a directory.
    fn extension(&self) -> &str;

    /// Open the container at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid container.
    fn open(&self, path: &Path) -> Result<Box<dyn Container>>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
