use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{InspectorError, Result};

use super::{Container, ContainerReader, DataObject, ObjectKind, ValidationIssue};

/// Default extension of inspected containers.
pub const NWB_EXTENSION: &str = "nwb";

/// Reads containers stored as a JSON object graph:
///
/// ```json
/// { "objects": [ { "kind": "NWBFile", "name": "root", "location": "/",
///                  "attributes": { "identifier": "abc" } } ] }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonContainerReader;

impl JsonContainerReader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ContainerReader for JsonContainerReader {
    fn extension(&self) -> &str {
        NWB_EXTENSION
    }

    fn open(&self, path: &Path) -> Result<Box<dyn Container>> {
        let content = fs::read_to_string(path).map_err(|e| InspectorError::Container {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let container: JsonContainer =
            serde_json::from_str(&content).map_err(|e| InspectorError::Container {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Box::new(container))
    }
}

#[derive(Debug, Deserialize)]
struct JsonContainer {
    #[serde(default)]
    objects: Vec<DataObject>,
}

impl JsonContainer {
    fn root_issues(&self) -> Option<ValidationIssue> {
        let roots = self
            .objects
            .iter()
            .filter(|o| o.kind == ObjectKind::NwbFile)
            .count();
        (roots != 1).then(|| ValidationIssue {
            reason: format!("expected exactly one NWBFile object, found {roots}"),
            location: "/".to_string(),
            name: ObjectKind::NwbFile.to_string(),
        })
    }

    fn attribute_issues(object: &DataObject) -> impl Iterator<Item = ValidationIssue> + '_ {
        object
            .kind
            .required_attributes()
            .iter()
            .filter(|attr| object.attribute(attr).is_none_or(serde_json::Value::is_null))
            .map(|attr| ValidationIssue {
                reason: format!("missing required attribute '{attr}'"),
                location: object.location.clone(),
                name: object.kind.to_string(),
            })
    }
}

impl Container for JsonContainer {
    fn validate(&self) -> Result<Vec<ValidationIssue>> {
        let mut issues: Vec<ValidationIssue> = self.root_issues().into_iter().collect();

        let mut seen = HashSet::new();
        for object in &self.objects {
            issues.extend(Self::attribute_issues(object));
            if !seen.insert(object.location.as_str()) {
                issues.push(ValidationIssue {
                    reason: "duplicate object location".to_string(),
                    location: object.location.clone(),
                    name: object.kind.to_string(),
                });
            }
        }

        Ok(issues)
    }

    fn objects(&self) -> Result<&[DataObject]> {
        Ok(&self.objects)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
