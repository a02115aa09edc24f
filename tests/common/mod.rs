#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the nwb-inspect binary.
#[macro_export]
macro_rules! nwb_inspect {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("nwb-inspect"))
    };
}

/// Creates a temporary directory with NWB containers for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a container holding the given objects.
    pub fn create_container(&self, relative_path: &str, objects: &[Value]) -> PathBuf {
        let content = json!({ "objects": objects });
        self.create_file(relative_path, &content.to_string())
    }

    /// Writes a structurally valid session whose only findings are suggestions
    /// (no experimenter, institution or subject).
    pub fn create_session(&self, relative_path: &str) -> PathBuf {
        self.create_container(relative_path, &[root_object()])
    }

    /// Writes a session with one finding at each in-band level.
    pub fn create_noisy_session(&self, relative_path: &str) -> PathBuf {
        self.create_container(
            relative_path,
            &[
                root_object(),
                json!({
                    "kind": "TimeSeries",
                    "name": "running",
                    "location": "/acquisition/running",
                    "attributes": {
                        "data": [1, 2, 3],
                        "timestamps": [0.0, 0.1],
                        "description": "placeholder"
                    }
                }),
            ],
        )
    }
}

pub fn root_object() -> Value {
    json!({
        "kind": "NWBFile",
        "name": "root",
        "location": "/",
        "attributes": {
            "identifier": "session-1",
            "session_description": "mouse running on a wheel",
            "session_start_time": "2021-03-04T10:00:00"
        }
    })
}
