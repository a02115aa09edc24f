use serde::Serialize;

use crate::container::{DataObject, ValidationIssue};
use crate::error::InspectorError;

use super::importance::Importance;

/// What a check reports before the engine attaches importance and provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub message: String,
    /// Overrides the location of the inspected object.
    pub location: Option<String>,
    /// Overrides the name of the check that produced it.
    pub check_name: Option<String>,
}

impl Finding {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            check_name: None,
        }
    }

    #[must_use]
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn from_check(mut self, check_name: impl Into<String>) -> Self {
        self.check_name = Some(check_name.into());
        self
    }
}

/// Everything a single check invocation can return.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckOutput {
    #[default]
    None,
    One(Finding),
    Many(Vec<Finding>),
}

impl CheckOutput {
    /// Flatten into findings in the order the check produced them.
    #[must_use]
    pub fn into_findings(self) -> Vec<Finding> {
        match self {
            Self::None => Vec::new(),
            Self::One(finding) => vec![finding],
            Self::Many(findings) => findings,
        }
    }
}

impl From<Finding> for CheckOutput {
    fn from(finding: Finding) -> Self {
        Self::One(finding)
    }
}

impl From<Option<Finding>> for CheckOutput {
    fn from(finding: Option<Finding>) -> Self {
        finding.map_or(Self::None, Self::One)
    }
}

impl From<Vec<Finding>> for CheckOutput {
    fn from(findings: Vec<Finding>) -> Self {
        Self::Many(findings)
    }
}

/// A reported finding with its importance and provenance resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectorMessage {
    pub message: String,
    pub importance: Importance,
    pub check_name: String,
    pub object_type: Option<String>,
    pub object_name: Option<String>,
    pub location: Option<String>,
    pub file_path: String,
}

impl InspectorMessage {
    #[must_use]
    pub fn from_finding(
        finding: Finding,
        check_name: &str,
        importance: Importance,
        object: &DataObject,
        file_path: &str,
    ) -> Self {
        Self {
            message: finding.message,
            importance,
            check_name: finding.check_name.unwrap_or_else(|| check_name.to_string()),
            object_type: Some(object.kind.to_string()),
            object_name: Some(object.name.clone()),
            location: Some(finding.location.unwrap_or_else(|| object.location.clone())),
            file_path: file_path.to_string(),
        }
    }

    #[must_use]
    pub fn validation(issue: ValidationIssue, file_path: &str) -> Self {
        Self {
            message: issue.reason,
            importance: Importance::Validation,
            check_name: issue.name,
            object_type: None,
            object_name: None,
            location: Some(issue.location),
            file_path: file_path.to_string(),
        }
    }

    #[must_use]
    pub fn error(err: &InspectorError, file_path: &str) -> Self {
        let check_name = match err {
            InspectorError::CheckFailed { check, .. } => check.clone(),
            other => other.error_type().to_string(),
        };
        Self {
            message: err.to_string(),
            importance: Importance::Error,
            check_name,
            object_type: None,
            object_name: None,
            location: None,
            file_path: file_path.to_string(),
        }
    }
}
