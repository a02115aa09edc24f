use super::super::FnCheck;
use super::*;

fn noop(_: &DataObject) -> Result<CheckOutput> {
    Ok(CheckOutput::None)
}

fn check(name: &str, target: ObjectKind, importance: Importance) -> FnCheck {
    FnCheck::new(name, target, importance, noop)
}

fn sample_registry() -> CheckRegistry {
    let mut registry = CheckRegistry::new();
    registry
        .register(check("check_a", ObjectKind::TimeSeries, Importance::Critical))
        .unwrap();
    registry
        .register(check(
            "check_b",
            ObjectKind::NwbFile,
            Importance::BestPracticeSuggestion,
        ))
        .unwrap();
    registry
        .register(check(
            "check_c",
            ObjectKind::NwbContainer,
            Importance::BestPracticeViolation,
        ))
        .unwrap();
    registry
}

#[test]
fn all_returns_registration_order() {
    let registry = sample_registry();
    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, vec!["check_a", "check_b", "check_c"]);
    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
}

#[test]
fn duplicate_name_is_rejected() {
    let mut registry = sample_registry();
    let result = registry.register(check("check_a", ObjectKind::Device, Importance::Critical));

    assert!(matches!(result, Err(InspectorError::DuplicateCheck(name)) if name == "check_a"));
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.get("check_a").unwrap().target(), ObjectKind::TimeSeries);
}

#[test]
fn out_of_band_declaration_is_rejected() {
    let mut registry = CheckRegistry::new();
    let result = registry.register(check("check_x", ObjectKind::Device, Importance::Error));
    assert!(matches!(result, Err(InspectorError::Config(_))));
    assert!(registry.is_empty());
}

#[test]
fn set_importance_changes_effective_level_only() {
    let mut registry = sample_registry();

    let changed = registry
        .set_importance("check_b", Importance::Critical)
        .unwrap();

    assert!(changed);
    let entry = registry.get("check_b").unwrap();
    assert_eq!(entry.importance(), Importance::Critical);
    assert_eq!(entry.declared_importance(), Importance::BestPracticeSuggestion);
}

#[test]
fn set_importance_on_unknown_check_returns_false() {
    let mut registry = sample_registry();
    assert!(!registry.set_importance("nope", Importance::Critical).unwrap());
}

#[test]
fn set_importance_rejects_out_of_band_level() {
    let mut registry = sample_registry();
    assert!(registry.set_importance("check_a", Importance::Validation).is_err());
    assert_eq!(registry.get("check_a").unwrap().importance(), Importance::Critical);
}

#[test]
fn remove_preserves_order_of_remaining_checks() {
    let mut registry = sample_registry();

    assert!(registry.remove("check_b").is_some());
    assert!(registry.remove("check_b").is_none());

    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, vec!["check_a", "check_c"]);
    assert!(!registry.contains("check_b"));
}

#[test]
fn clones_are_independent() {
    let base = sample_registry();
    let mut run = base.clone();
    run.remove("check_a");
    run.set_importance("check_c", Importance::Critical).unwrap();

    assert!(base.contains("check_a"));
    assert_eq!(
        base.get("check_c").unwrap().importance(),
        Importance::BestPracticeViolation
    );
}

#[test]
fn applies_to_matches_subkinds() {
    let registry = sample_registry();
    let entry = registry.get("check_a").unwrap();

    let series = DataObject::new(ObjectKind::ElectricalSeries, "es", "/acquisition/es");
    let device = DataObject::new(ObjectKind::Device, "probe", "/general/devices/probe");

    assert!(entry.applies_to(&series));
    assert!(!entry.applies_to(&device));
}

#[test]
fn builtin_catalog_registers_cleanly() {
    let registry = CheckRegistry::builtin().unwrap();
    assert!(!registry.is_empty());
    assert!(registry.all().all(|c| c.importance().is_in_band()));
}
