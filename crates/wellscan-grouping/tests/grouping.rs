use wellscan_core::models::condition::Condition;
use wellscan_core::models::grouping::{BiologicalInflammationGrouping, OrganIndicatorGrouping};
use wellscan_core::models::scan_report::{ScanReport, ScanTypeAggregate};
use wellscan_grouping::aggregate::round_one_decimal;
use wellscan_grouping::{
    first_matching_grouping, first_matching_organ_grouping, matched_inflammation_summary,
    scan_type_aggregate, scan_type_aggregates,
};

fn grouping(name: &str, inflammations: &[&str]) -> BiologicalInflammationGrouping {
    BiologicalInflammationGrouping {
        group_name: name.to_string(),
        inflammations: inflammations.iter().map(|i| i.to_string()).collect(),
    }
}

fn report(scan_type: u32, names: &[&str]) -> ScanReport {
    ScanReport {
        scan_type,
        report: names.iter().map(|n| Condition::named(*n)).collect(),
    }
}

fn scored(name: &str, scale: Option<u32>, percentage: Option<&str>) -> Condition {
    Condition {
        name: Some(name.to_string()),
        scale,
        percentage: percentage.map(str::to_string),
        ..Condition::default()
    }
}

#[test]
fn grouping_matches_on_subset_containment() {
    let catalog = vec![grouping("Gut", &["A", "B"])];

    assert!(first_matching_grouping(&report(1, &["A", "B", "C"]), &catalog).is_some());
    assert!(first_matching_grouping(&report(1, &["A"]), &catalog).is_none());
}

#[test]
fn first_grouping_in_catalog_order_wins() {
    let catalog = vec![
        grouping("Joints", &["Rheumatoid Arthritis ++"]),
        grouping("Gut", &["Diverticulitis ++"]),
        grouping("Joints and gut", &["Rheumatoid Arthritis ++", "Diverticulitis ++"]),
    ];
    let scan = report(2, &["Diverticulitis ++", "Rheumatoid Arthritis ++"]);

    let matched = first_matching_grouping(&scan, &catalog).unwrap();
    assert_eq!(matched.group_name, "Joints");
}

#[test]
fn empty_catalog_matches_nothing() {
    assert!(first_matching_grouping(&report(1, &["A"]), &[]).is_none());
    assert!(scan_type_aggregates(&[report(1, &["A"])], &[]).is_empty());
}

#[test]
fn aggregate_averages_scale_and_percentage() {
    let catalog = vec![grouping("Pair", &["A", "B"])];
    let scan = ScanReport {
        scan_type: 4,
        report: vec![
            scored("A", Some(10), Some("50%")),
            scored("B", Some(20), Some("30%")),
        ],
    };

    assert_eq!(
        scan_type_aggregate(&scan, &catalog),
        Some(ScanTypeAggregate {
            scan_type: 4,
            avg_scale: 15.0,
            avg_percentage: 40.0,
        })
    );
}

#[test]
fn aggregate_counts_missing_values_as_zero_and_covers_all_conditions() {
    let catalog = vec![grouping("Single", &["A"])];
    let scan = ScanReport {
        scan_type: 1,
        report: vec![
            scored("A", Some(7), Some("33.3%")),
            scored("Unrelated", None, None),
            scored("Other", Some(3), Some("garbled")),
        ],
    };

    let aggregate = scan_type_aggregate(&scan, &catalog).unwrap();
    assert_eq!(aggregate.avg_scale, 3.3);
    assert_eq!(aggregate.avg_percentage, 11.1);
}

#[test]
fn unmatched_reports_are_dropped_and_rest_sorted_by_scan_type() {
    let catalog = vec![grouping("Any A", &["A"])];
    let reports = vec![
        ScanReport {
            scan_type: 5,
            report: vec![scored("A", Some(2), Some("10%"))],
        },
        report(3, &["B"]),
        ScanReport {
            scan_type: 1,
            report: vec![scored("A", Some(4), Some("20%"))],
        },
    ];

    let aggregates = scan_type_aggregates(&reports, &catalog);
    let scan_types: Vec<u32> = aggregates.iter().map(|a| a.scan_type).collect();
    assert_eq!(scan_types, vec![1, 5]);
    assert_eq!(aggregates[0].avg_scale, 4.0);
    assert_eq!(aggregates[1].avg_percentage, 10.0);
}

#[test]
fn grouping_without_requirements_matches_empty_report() {
    let catalog = vec![grouping("Catch-all", &[])];
    let aggregate = scan_type_aggregate(&report(9, &[]), &catalog).unwrap();

    assert_eq!(aggregate.avg_scale, 0.0);
    assert_eq!(aggregate.avg_percentage, 0.0);
}

#[test]
fn summary_collects_every_match_across_reports() {
    let catalog = vec![
        grouping("Joints", &["Rheumatoid Arthritis ++"]),
        grouping("Gut", &["Diverticulitis ++", "Proctocolitis ++"]),
        grouping("Joints and gut", &["Rheumatoid Arthritis ++", "Diverticulitis ++"]),
        grouping("Thyroid", &["Hypothyroidism +"]),
    ];
    let reports = vec![
        report(1, &["Rheumatoid Arthritis ++", "Diverticulitis ++"]),
        report(2, &["Diverticulitis ++", "Proctocolitis ++", "Rheumatoid Arthritis ++"]),
    ];

    let summary = matched_inflammation_summary(&reports, &catalog);
    assert_eq!(summary.group_names, vec!["Joints", "Joints and gut", "Gut"]);
    assert_eq!(
        summary.inflammations,
        vec!["Rheumatoid Arthritis ++", "Diverticulitis ++", "Proctocolitis ++"]
    );
}

#[test]
fn summary_of_no_reports_is_empty() {
    let catalog = vec![grouping("Joints", &["Rheumatoid Arthritis ++"])];
    let summary = matched_inflammation_summary(&[], &catalog);
    assert!(summary.group_names.is_empty());
    assert!(summary.inflammations.is_empty());
}

#[test]
fn organ_grouping_first_match() {
    let catalog = vec![
        OrganIndicatorGrouping {
            group_health_area: "Digestive".to_string(),
            health_areas: vec!["Stomach".to_string(), "Colon".to_string()],
            explanation: "Digestive tract load".to_string(),
        },
        OrganIndicatorGrouping {
            group_health_area: "Stomach only".to_string(),
            health_areas: vec!["Stomach".to_string()],
            explanation: "Stomach load".to_string(),
        },
    ];

    let indicators = vec!["Stomach".to_string(), "Liver".to_string()];
    let matched = first_matching_organ_grouping(&indicators, &catalog).unwrap();
    assert_eq!(matched.group_health_area, "Stomach only");

    assert!(first_matching_organ_grouping(&["Liver".to_string()], &catalog).is_none());
}

#[test]
fn rounding_to_one_decimal() {
    assert_eq!(round_one_decimal(15.0), 15.0);
    assert_eq!(round_one_decimal(3.333), 3.3);
    assert_eq!(round_one_decimal(2.25), 2.3);
    assert_eq!(round_one_decimal(0.04), 0.0);
}
