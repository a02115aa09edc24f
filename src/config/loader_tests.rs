use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::super::OverrideLevel;
use super::*;

#[derive(Default)]
struct MockFileSystem {
    files: HashMap<PathBuf, String>,
}

impl MockFileSystem {
    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

fn levels(overrides: &ConfigOverrides) -> Vec<OverrideLevel> {
    overrides.entries().map(|(level, _)| level).collect()
}

#[test]
fn format_detected_from_extension() {
    assert_eq!(
        ConfigFormat::from_path(Path::new("a/config.yaml")),
        Some(ConfigFormat::Yaml)
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("config.YML")),
        Some(ConfigFormat::Yaml)
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("config.toml")),
        Some(ConfigFormat::Toml)
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("config.json")),
        Some(ConfigFormat::Json)
    );
    assert_eq!(ConfigFormat::from_path(Path::new("config.ini")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("config")), None);
}

#[test]
fn yaml_keeps_declared_order() {
    let content = "SKIP:\n  - check_a\nCRITICAL:\n  - check_b\n  - check_c\n";
    let overrides = parse_overrides(content, ConfigFormat::Yaml).unwrap();

    assert_eq!(
        levels(&overrides),
        vec![OverrideLevel::Skip, OverrideLevel::Critical]
    );
    let (_, critical) = overrides.entries().nth(1).unwrap();
    assert_eq!(critical, ["check_b", "check_c"]);
}

#[test]
fn toml_overrides_parse() {
    let content = "CRITICAL = [\"check_a\"]\nBEST_PRACTICE_SUGGESTION = [\"check_b\"]\n";
    let overrides = parse_overrides(content, ConfigFormat::Toml).unwrap();

    let (_, names) = overrides
        .entries()
        .find(|(level, _)| *level == OverrideLevel::Critical)
        .unwrap();
    assert_eq!(names, ["check_a"]);
}

#[test]
fn json_overrides_parse() {
    let content = r#"{"BEST_PRACTICE_VIOLATION": ["check_a"]}"#;
    let overrides = parse_overrides(content, ConfigFormat::Json).unwrap();
    assert_eq!(levels(&overrides), vec![OverrideLevel::BestPracticeViolation]);
}

#[test]
fn unknown_level_is_rejected() {
    let result = parse_overrides("SEVERE:\n  - check_a\n", ConfigFormat::Yaml);
    let err = result.unwrap_err();
    assert!(matches!(err, InspectorError::YamlParse(_)));
    assert!(err.to_string().contains("unknown override level 'SEVERE'"));
}

#[test]
fn out_of_band_level_is_rejected() {
    assert!(parse_overrides("ERROR:\n  - check_a\n", ConfigFormat::Yaml).is_err());
    assert!(parse_overrides("VALIDATION:\n  - check_a\n", ConfigFormat::Yaml).is_err());
}

#[test]
fn empty_content_means_no_overrides() {
    let overrides = parse_overrides("\n", ConfigFormat::Yaml).unwrap();
    assert!(overrides.is_empty());
}

#[test]
fn loader_reads_through_filesystem() {
    let fs = MockFileSystem::default().with_file("/cfg/overrides.yml", "SKIP:\n  - check_a\n");
    let loader = FileConfigLoader::with_fs(fs);

    let overrides = loader
        .load_from_path(Path::new("/cfg/overrides.yml"))
        .unwrap();

    assert_eq!(levels(&overrides), vec![OverrideLevel::Skip]);
}

#[test]
fn loader_reports_missing_file() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::default());
    let err = loader
        .load_from_path(Path::new("/cfg/missing.yaml"))
        .unwrap_err();

    assert!(matches!(err, InspectorError::Config(_)));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn loader_rejects_unknown_extension() {
    let fs = MockFileSystem::default().with_file("/cfg/overrides.ini", "CRITICAL=a");
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader
        .load_from_path(Path::new("/cfg/overrides.ini"))
        .unwrap_err();

    assert!(err.to_string().contains("Unsupported config file type"));
}

#[test]
fn comment_only_yaml_means_no_overrides() {
    let overrides = parse_overrides("# nothing yet\n", ConfigFormat::Yaml).unwrap();
    assert!(overrides.is_empty());
}
