use super::*;

fn message(text: &str, importance: Importance) -> InspectorMessage {
    InspectorMessage {
        message: text.to_string(),
        importance,
        check_name: "check_test".to_string(),
        object_type: None,
        object_name: None,
        location: None,
        file_path: "a.nwb".to_string(),
    }
}

#[test]
fn organize_orders_levels_and_keeps_arrival_order() {
    let mut buckets = MessageBuckets::new();
    buckets.push(message("s1", Importance::BestPracticeSuggestion));
    buckets.push(message("c1", Importance::Critical));
    buckets.push(message("e1", Importance::Error));
    buckets.push(message("c2", Importance::Critical));
    buckets.push(message("v1", Importance::Validation));

    let report = organize(buckets);

    let levels: Vec<_> = report.levels().map(|(level, _)| level).collect();
    assert_eq!(
        levels,
        vec![
            Importance::Error,
            Importance::Validation,
            Importance::Critical,
            Importance::BestPracticeSuggestion,
        ]
    );
    let critical: Vec<_> = report
        .get(Importance::Critical)
        .unwrap()
        .iter()
        .map(|m| m.message.as_str())
        .collect();
    assert_eq!(critical, vec!["c1", "c2"]);
    assert!(report.get(Importance::BestPracticeViolation).is_none());
    assert_eq!(report.message_count(), 5);
}

#[test]
fn organize_empty_buckets_yields_empty_report() {
    let report = organize(MessageBuckets::new());
    assert!(report.is_empty());
    assert_eq!(report.message_count(), 0);
}

#[test]
fn buckets_count_pushed_messages() {
    let mut buckets = MessageBuckets::new();
    assert!(buckets.is_empty());
    buckets.extend([
        message("a", Importance::Critical),
        message("b", Importance::Error),
    ]);
    assert_eq!(buckets.len(), 2);
}

#[test]
fn results_keep_insertion_order_and_empty_reports() {
    let mut with_messages = MessageBuckets::new();
    with_messages.push(message("x", Importance::Critical));

    let results: InspectionResults = [
        ("b.nwb".to_string(), FileReport::default()),
        ("a.nwb".to_string(), organize(with_messages)),
    ]
    .into_iter()
    .collect();

    let paths: Vec<_> = results.iter().map(|(path, _)| path).collect();
    assert_eq!(paths, vec!["b.nwb", "a.nwb"]);
    assert!(results.get("b.nwb").unwrap().is_empty());
    assert_eq!(results.message_count(), 1);
}

#[test]
fn level_counts_sum_across_files() {
    let mut first = MessageBuckets::new();
    first.push(message("a", Importance::Critical));
    first.push(message("b", Importance::BestPracticeSuggestion));
    let mut second = MessageBuckets::new();
    second.push(message("c", Importance::Critical));

    let mut results = InspectionResults::new();
    results.insert("one.nwb".to_string(), organize(first));
    results.insert("two.nwb".to_string(), organize(second));

    let counts: Vec<_> = results.level_counts().into_iter().collect();
    assert_eq!(
        counts,
        vec![
            (Importance::Critical, 2),
            (Importance::BestPracticeSuggestion, 1),
        ]
    );
}

#[test]
fn report_serializes_as_level_map() {
    let mut buckets = MessageBuckets::new();
    buckets.push(message("x", Importance::Critical));
    let mut results = InspectionResults::new();
    results.insert("a.nwb".to_string(), organize(buckets));
    results.insert("b.nwb".to_string(), FileReport::default());

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json["a.nwb"]["CRITICAL"][0]["message"], "x");
    assert_eq!(json["b.nwb"], serde_json::json!({}));
}
