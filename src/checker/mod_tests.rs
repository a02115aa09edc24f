use crate::container::ValidationIssue;
use crate::error::InspectorError;

use super::*;

fn flag_everything(object: &DataObject) -> Result<CheckOutput> {
    Ok(Finding::new(format!("saw {}", object.name)).into())
}

fn series() -> DataObject {
    DataObject::new(ObjectKind::ElectricalSeries, "lfp", "/acquisition/lfp")
}

#[test]
fn fn_check_exposes_declaration() {
    let check = FnCheck::new(
        "check_anything",
        ObjectKind::TimeSeries,
        Importance::Critical,
        flag_everything,
    );

    assert_eq!(check.name(), "check_anything");
    assert_eq!(check.target(), ObjectKind::TimeSeries);
    assert_eq!(check.importance(), Importance::Critical);
    assert_eq!(
        check.run(&series()).unwrap(),
        CheckOutput::One(Finding::new("saw lfp"))
    );
}

#[test]
fn check_output_flattens_every_shape() {
    assert!(CheckOutput::None.into_findings().is_empty());
    assert_eq!(CheckOutput::from(Finding::new("a")).into_findings().len(), 1);
    assert!(CheckOutput::from(None::<Finding>).into_findings().is_empty());

    let many = CheckOutput::from(vec![Finding::new("a"), Finding::new("b")]);
    let messages: Vec<_> = many.into_findings().into_iter().map(|f| f.message).collect();
    assert_eq!(messages, vec!["a", "b"]);
}

#[test]
fn message_inherits_check_name_and_object_location() {
    let message = InspectorMessage::from_finding(
        Finding::new("bad"),
        "check_anything",
        Importance::BestPracticeViolation,
        &series(),
        "session.nwb",
    );

    assert_eq!(message.check_name, "check_anything");
    assert_eq!(message.importance, Importance::BestPracticeViolation);
    assert_eq!(message.object_type.as_deref(), Some("ElectricalSeries"));
    assert_eq!(message.object_name.as_deref(), Some("lfp"));
    assert_eq!(message.location.as_deref(), Some("/acquisition/lfp"));
    assert_eq!(message.file_path, "session.nwb");
}

#[test]
fn message_keeps_tags_set_by_the_check() {
    let finding = Finding::new("bad")
        .at("/acquisition/lfp/data")
        .from_check("check_custom_origin");
    let message = InspectorMessage::from_finding(
        finding,
        "check_anything",
        Importance::Critical,
        &series(),
        "session.nwb",
    );

    assert_eq!(message.check_name, "check_custom_origin");
    assert_eq!(message.location.as_deref(), Some("/acquisition/lfp/data"));
}

#[test]
fn validation_message_is_attributed_to_issue() {
    let issue = ValidationIssue {
        reason: "missing required attribute 'data'".to_string(),
        location: "/acquisition/ts".to_string(),
        name: "TimeSeries".to_string(),
    };
    let message = InspectorMessage::validation(issue, "session.nwb");

    assert_eq!(message.importance, Importance::Validation);
    assert_eq!(message.check_name, "TimeSeries");
    assert_eq!(message.location.as_deref(), Some("/acquisition/ts"));
}

#[test]
fn error_message_names_failing_check() {
    let err = InspectorError::CheckFailed {
        check: "check_anything".to_string(),
        reason: "boom".to_string(),
    };
    let message = InspectorMessage::error(&err, "session.nwb");

    assert_eq!(message.importance, Importance::Error);
    assert_eq!(message.check_name, "check_anything");
    assert!(message.message.contains("boom"));
}

#[test]
fn error_message_from_container_failure_uses_error_type() {
    let err = InspectorError::Container {
        path: "session.nwb".into(),
        reason: "truncated".to_string(),
    };
    let message = InspectorMessage::error(&err, "session.nwb");

    assert_eq!(message.check_name, "Container");
    assert!(message.location.is_none());
}
