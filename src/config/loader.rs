use std::path::Path;

use crate::error::{InspectorError, Result};

use super::ConfigOverrides;

/// On-disk encodings accepted for override files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse override content in the given format.
///
/// # Errors
/// Returns a parse error if the content is malformed or names an unknown level.
pub fn parse_overrides(content: &str, format: ConfigFormat) -> Result<ConfigOverrides> {
    // An empty or comment-only document means "no overrides".
    if content.trim().is_empty() {
        return Ok(ConfigOverrides::default());
    }
    let overrides = match format {
        ConfigFormat::Yaml => {
            serde_yaml::from_str::<Option<ConfigOverrides>>(content)?.unwrap_or_default()
        }
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(overrides)
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load overrides from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<ConfigOverrides>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Loads override files, choosing the parser from the file extension.
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load_from_path(&self, path: &Path) -> Result<ConfigOverrides> {
        if !self.fs.exists(path) {
            return Err(InspectorError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            InspectorError::Config(format!(
                "Unsupported config file type: {} (expected .yaml, .yml, .toml or .json)",
                path.display()
            ))
        })?;
        let content = self.fs.read_to_string(path)?;
        parse_overrides(&content, format)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
