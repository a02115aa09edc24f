mod filter;
mod natural;

pub use filter::{ExtensionFilter, FileFilter};
pub use natural::natural_cmp;

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{InspectorError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Lists the matching files directly inside a directory, in natural order of their names.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));
        Ok(files)
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.scan_impl(root)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Expand an input path into the files to inspect.
///
/// A file is returned as-is whatever its extension; a directory is scanned.
///
/// # Errors
/// Returns `InvalidPath` if `path` is neither a file nor a directory.
pub fn resolve_inputs(path: &Path, scanner: &dyn FileScanner) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if path.is_dir() {
        let files = scanner.scan(path)?;
        debug!(dir = %path.display(), count = files.len(), "discovered files");
        return Ok(files);
    }
    Err(InspectorError::InvalidPath(path.to_path_buf()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
