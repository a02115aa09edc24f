use tempfile::TempDir;

use super::*;
use crate::checker::CheckRegistry;
use crate::config::{ConfigFormat, apply_overrides, parse_overrides};

#[test]
fn template_parses_and_names_registered_checks() {
    let overrides = parse_overrides(generate_overrides_template(), ConfigFormat::Yaml).unwrap();
    let mut registry = CheckRegistry::builtin().unwrap();

    let applied = apply_overrides(&mut registry, &overrides).unwrap();

    assert!(applied.unknown.is_empty());
    assert_eq!(applied.skipped, vec!["check_regular_timestamps".to_string()]);
}

#[test]
fn run_init_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("overrides.yaml");
    let args = InitArgs {
        output: path.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("SKIP:"));
}

#[test]
fn run_init_refuses_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("overrides.yaml");
    fs::write(&path, "mine").unwrap();
    let args = InitArgs {
        output: path.clone(),
        force: false,
    };

    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
    assert_eq!(fs::read_to_string(&path).unwrap(), "mine");
}

#[test]
fn run_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("overrides.yaml");
    fs::write(&path, "mine").unwrap();
    let args = InitArgs {
        output: path.clone(),
        force: true,
    };

    assert_eq!(run_init(&args), EXIT_SUCCESS);
    assert_ne!(fs::read_to_string(&path).unwrap(), "mine");
}
