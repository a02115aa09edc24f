use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectorError {
    #[error("Options 'ignore' and 'select' cannot both be used")]
    ConflictingFilters,

    #[error("Invalid importance threshold: {0}")]
    InvalidThreshold(String),

    #[error("{} should be a directory or an NWB file", .0.display())]
    InvalidPath(PathBuf),

    #[error("A check named '{0}' is already registered")]
    DuplicateCheck(String),

    #[error("Failed to load check module '{module}': {reason}")]
    ModuleLoad { module: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Check '{check}' failed: {reason}")]
    CheckFailed { check: String, reason: String },

    #[error("Failed to read container {}: {reason}", path.display())]
    Container { path: PathBuf, reason: String },

    #[error("Report file already exists: {}", .0.display())]
    ReportExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl InspectorError {
    /// Short category label used by the CLI error printer.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::ConflictingFilters | Self::InvalidThreshold(_) => "Filter",
            Self::InvalidPath(_) => "Path",
            Self::DuplicateCheck(_) => "Registry",
            Self::ModuleLoad { .. } => "Module",
            Self::Config(_) | Self::YamlParse(_) | Self::TomlParse(_) => "Config",
            Self::CheckFailed { .. } => "Check",
            Self::Container { .. } => "Container",
            Self::ReportExists(_) => "Report",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Actionable hint shown below the error, when one exists.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConflictingFilters => Some("pass either --ignore or --select, not both"),
            Self::InvalidThreshold(_) => Some(
                "choose one of CRITICAL, BEST_PRACTICE_VIOLATION, BEST_PRACTICE_SUGGESTION",
            ),
            Self::InvalidPath(_) => Some("point at an existing .nwb file or a directory"),
            Self::ModuleLoad { .. } => Some("run `nwb-inspect checks` to list known modules"),
            Self::ReportExists(_) => Some("pass --overwrite to replace the existing report"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, InspectorError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
