//! Bundled check catalog.
//!
//! The catalog is intentionally small: it gives the engine something useful to run out
//! of the box. Domain packages add their own checks through [`super::ModuleCatalog`].

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::container::{DataObject, ObjectKind};
use crate::error::Result;

use super::{CheckOutput, FnCheck, Finding, Importance};

/// Relative tolerance when comparing sampling intervals.
const RATE_TOLERANCE: f64 = 1e-9;

static PLACEHOLDER_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: Pattern is a static string known to compile
    Regex::new(r"(?i)^\s*(no description|description|placeholder|todo|tbd|n/?a)?\.?\s*$")
        .expect("valid placeholder pattern")
});

/// Checks registered by [`super::CheckRegistry::builtin`], in report order.
#[must_use]
pub fn builtin_checks() -> Vec<FnCheck> {
    vec![
        FnCheck::new(
            "check_timestamps_match_first_dimension",
            ObjectKind::TimeSeries,
            Importance::Critical,
            check_timestamps_match_first_dimension,
        ),
        FnCheck::new(
            "check_description",
            ObjectKind::NwbContainer,
            Importance::BestPracticeViolation,
            check_description,
        ),
        FnCheck::new(
            "check_subject_species_exists",
            ObjectKind::Subject,
            Importance::BestPracticeViolation,
            check_subject_species_exists,
        ),
        FnCheck::new(
            "check_timestamps_ascending",
            ObjectKind::TimeSeries,
            Importance::BestPracticeViolation,
            check_timestamps_ascending,
        ),
        FnCheck::new(
            "check_units_spike_times",
            ObjectKind::Units,
            Importance::BestPracticeViolation,
            check_units_spike_times,
        ),
        FnCheck::new(
            "check_experimenter_exists",
            ObjectKind::NwbFile,
            Importance::BestPracticeSuggestion,
            check_experimenter_exists,
        ),
        FnCheck::new(
            "check_institution",
            ObjectKind::NwbFile,
            Importance::BestPracticeSuggestion,
            check_institution,
        ),
        FnCheck::new(
            "check_subject_exists",
            ObjectKind::NwbFile,
            Importance::BestPracticeSuggestion,
            check_subject_exists,
        ),
        FnCheck::new(
            "check_regular_timestamps",
            ObjectKind::TimeSeries,
            Importance::BestPracticeSuggestion,
            check_regular_timestamps,
        ),
    ]
}

/// Checks loaded by the `ecephys` module.
#[must_use]
pub fn ecephys_checks() -> Vec<FnCheck> {
    vec![FnCheck::new(
        "check_electrical_series_electrodes",
        ObjectKind::ElectricalSeries,
        Importance::Critical,
        check_electrical_series_electrodes,
    )]
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

/// Length of `data` along `axis`, preferring an explicit `data_shape`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn data_dimension(object: &DataObject, axis: usize) -> Option<usize> {
    if let Some(shape) = object.number_array("data_shape") {
        return shape.get(axis).map(|&n| n as usize);
    }
    let mut value = object.attribute("data")?;
    for _ in 0..axis {
        value = value.as_array()?.first()?;
    }
    value.as_array().map(Vec::len)
}

fn check_timestamps_match_first_dimension(object: &DataObject) -> Result<CheckOutput> {
    let Some(timestamps) = object.number_array("timestamps") else {
        return Ok(CheckOutput::None);
    };
    let Some(length) = data_dimension(object, 0) else {
        return Ok(CheckOutput::None);
    };
    if length == timestamps.len() {
        return Ok(CheckOutput::None);
    }
    Ok(Finding::new(format!(
        "The length of the first dimension of data ({length}) does not match the length of \
         timestamps ({}).",
        timestamps.len()
    ))
    .into())
}

fn check_description(object: &DataObject) -> Result<CheckOutput> {
    let Some(description) = object.str_attribute("description") else {
        return Ok(CheckOutput::None);
    };
    if !PLACEHOLDER_DESCRIPTION.is_match(description) {
        return Ok(CheckOutput::None);
    }
    Ok(Finding::new(format!("Description ('{description}') is a placeholder.")).into())
}

fn check_subject_species_exists(object: &DataObject) -> Result<CheckOutput> {
    if !is_blank(object.attribute("species")) {
        return Ok(CheckOutput::None);
    }
    Ok(Finding::new("Subject species is missing.").into())
}

fn check_timestamps_ascending(object: &DataObject) -> Result<CheckOutput> {
    let Some(timestamps) = object.number_array("timestamps") else {
        return Ok(CheckOutput::None);
    };
    if timestamps.windows(2).all(|pair| pair[0] <= pair[1]) {
        return Ok(CheckOutput::None);
    }
    Ok(Finding::new(format!("{} timestamps are not ascending.", object.kind)).into())
}

fn check_units_spike_times(object: &DataObject) -> Result<CheckOutput> {
    let has_spike_times = object
        .attribute("colnames")
        .and_then(Value::as_array)
        .is_some_and(|cols| cols.iter().any(|c| c.as_str() == Some("spike_times")));
    if has_spike_times {
        return Ok(CheckOutput::None);
    }
    Ok(Finding::new("Units table has no 'spike_times' column.").into())
}

fn check_experimenter_exists(object: &DataObject) -> Result<CheckOutput> {
    if !is_blank(object.attribute("experimenter")) {
        return Ok(CheckOutput::None);
    }
    Ok(Finding::new("Experimenter is missing.").into())
}

fn check_institution(object: &DataObject) -> Result<CheckOutput> {
    if !is_blank(object.attribute("institution")) {
        return Ok(CheckOutput::None);
    }
    Ok(Finding::new("Metadata /general/institution is missing.").into())
}

fn check_subject_exists(object: &DataObject) -> Result<CheckOutput> {
    if !is_blank(object.attribute("subject")) {
        return Ok(CheckOutput::None);
    }
    Ok(Finding::new("Subject is missing.").into())
}

fn check_regular_timestamps(object: &DataObject) -> Result<CheckOutput> {
    let Some(timestamps) = object.number_array("timestamps") else {
        return Ok(CheckOutput::None);
    };
    if timestamps.len() <= 2 {
        return Ok(CheckOutput::None);
    }
    let step = timestamps[1] - timestamps[0];
    if step <= 0.0 {
        return Ok(CheckOutput::None);
    }
    let regular = timestamps
        .windows(2)
        .all(|pair| ((pair[1] - pair[0]) - step).abs() <= step * RATE_TOLERANCE);
    if !regular {
        return Ok(CheckOutput::None);
    }
    Ok(Finding::new(format!(
        "{} appears to have a constant sampling rate. Consider specifying \
         starting_time={} and rate={} instead of timestamps.",
        object.kind,
        timestamps[0],
        1.0 / step
    ))
    .into())
}

fn check_electrical_series_electrodes(object: &DataObject) -> Result<CheckOutput> {
    let Some(electrodes) = object.attribute("electrodes").and_then(Value::as_array) else {
        return Ok(CheckOutput::None);
    };
    let Some(channels) = data_dimension(object, 1) else {
        return Ok(CheckOutput::None);
    };
    if channels == electrodes.len() {
        return Ok(CheckOutput::None);
    }
    Ok(Finding::new(format!(
        "The second dimension of data ({channels}) does not match the number of electrodes \
         ({}).",
        electrodes.len()
    ))
    .into())
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
