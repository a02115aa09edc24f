use super::*;

#[test]
fn in_band_levels_are_ranked() {
    assert_eq!(Importance::Critical.rank(), Some(2));
    assert_eq!(Importance::BestPracticeViolation.rank(), Some(1));
    assert_eq!(Importance::BestPracticeSuggestion.rank(), Some(0));
    assert!(Importance::Error.rank().is_none());
    assert!(Importance::Validation.rank().is_none());
}

#[test]
fn meets_follows_in_band_order_for_every_threshold() {
    for threshold in Importance::IN_BAND {
        for level in Importance::IN_BAND {
            let expected = level.rank() >= threshold.rank();
            assert_eq!(
                level.meets(threshold),
                expected,
                "{level} against threshold {threshold}"
            );
        }
    }
}

#[test]
fn out_of_band_levels_always_meet_threshold() {
    for threshold in Importance::IN_BAND {
        assert!(Importance::Error.meets(threshold));
        assert!(Importance::Validation.meets(threshold));
    }
}

#[test]
fn out_of_band_threshold_admits_no_in_band_level() {
    assert!(!Importance::Critical.meets(Importance::Error));
    assert!(!Importance::BestPracticeSuggestion.meets(Importance::Validation));
}

#[test]
fn parses_names_case_insensitively() {
    assert_eq!("CRITICAL".parse::<Importance>(), Ok(Importance::Critical));
    assert_eq!(
        "best_practice_violation".parse::<Importance>(),
        Ok(Importance::BestPracticeViolation)
    );
    assert_eq!(
        "best-practice-suggestion".parse::<Importance>(),
        Ok(Importance::BestPracticeSuggestion)
    );
    assert!("SEVERE".parse::<Importance>().is_err());
}

#[test]
fn serializes_by_name() {
    let json = serde_json::to_string(&Importance::BestPracticeViolation).unwrap();
    assert_eq!(json, "\"BEST_PRACTICE_VIOLATION\"");
    assert_eq!(Importance::Validation.to_string(), "VALIDATION");
}

#[test]
fn report_order_starts_with_out_of_band_levels() {
    assert_eq!(Importance::REPORT_ORDER[0], Importance::Error);
    assert_eq!(Importance::REPORT_ORDER[1], Importance::Validation);
    assert_eq!(&Importance::REPORT_ORDER[2..], &Importance::IN_BAND);
}
