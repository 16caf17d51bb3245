use wellscan_core::merge::{merge_scan_report, MergeOutcome};
use wellscan_core::models::condition::Condition;
use wellscan_core::models::processed::IdnCollection;
use wellscan_core::models::scan_report::ScanReport;

fn report(scan_type: u32, names: &[&str]) -> ScanReport {
    ScanReport {
        scan_type,
        report: names.iter().map(|n| Condition::named(*n)).collect(),
    }
}

fn stored() -> IdnCollection {
    IdnCollection {
        idn_data: vec![report(1, &["Depression II"]), report(2, &["Gastroparesis ++"])],
        idn_report_document_name: vec!["scan-1.txt".to_string(), "scan-2.txt".to_string()],
    }
}

#[test]
fn new_scan_type_is_appended_with_document_name() {
    let mut collection = stored();
    let outcome = merge_scan_report(&mut collection, report(3, &["Hypothyroidism +"]), "scan-3.txt");

    assert_eq!(outcome, MergeOutcome::Appended { position: 2 });
    assert_eq!(collection.idn_data.len(), 3);
    assert_eq!(collection.idn_data[2].scan_type, 3);
    assert_eq!(
        collection.idn_report_document_name,
        vec!["scan-1.txt", "scan-2.txt", "scan-3.txt"]
    );
}

#[test]
fn existing_scan_type_is_replaced_in_place() {
    let mut collection = stored();
    let replacement = report(2, &["Diverticulitis ++", "Proctocolitis ++"]);
    let outcome = merge_scan_report(&mut collection, replacement.clone(), "scan-2-rerun.txt");

    assert_eq!(outcome, MergeOutcome::Replaced { position: 1 });
    assert_eq!(collection.idn_data.len(), 2);
    assert_eq!(collection.idn_data[0], report(1, &["Depression II"]));
    assert_eq!(collection.idn_data[1], replacement);
    assert_eq!(collection.idn_report_document_name, vec!["scan-1.txt", "scan-2.txt"]);
}

#[test]
fn merging_twice_equals_merging_once() {
    let upload = report(4, &["Fibromyalgia Part 3"]);

    let mut once = stored();
    merge_scan_report(&mut once, upload.clone(), "scan-4.txt");

    let mut twice = stored();
    merge_scan_report(&mut twice, upload.clone(), "scan-4.txt");
    let second = merge_scan_report(&mut twice, upload, "scan-4.txt");

    assert_eq!(second, MergeOutcome::Replaced { position: 2 });
    assert_eq!(once, twice);
}

#[test]
fn first_upload_into_empty_collection() {
    let mut collection = IdnCollection::default();
    let outcome = merge_scan_report(&mut collection, report(0, &[]), "untyped.txt");

    assert_eq!(outcome, MergeOutcome::Appended { position: 0 });
    assert_eq!(collection.idn_data, vec![report(0, &[])]);
    assert_eq!(collection.idn_report_document_name, vec!["untyped.txt"]);
}

#[test]
fn stored_json_uses_camel_case_fields() {
    let json = serde_json::to_value(stored()).unwrap();
    assert!(json.get("idnData").is_some());
    assert!(json.get("idnReportDocumentName").is_some());
    assert_eq!(json["idnData"][1]["scanType"], 2);
    assert_eq!(json["idnData"][1]["report"][0]["name"], "Gastroparesis ++");
    assert_eq!(
        json["idnData"][1]["report"][0]["realFreq"],
        serde_json::json!([])
    );
}

#[test]
fn percentage_value_strips_percent_sign() {
    let mut condition = Condition::named("Arachnoiditis ++");
    assert_eq!(condition.percentage_value(), None);

    condition.percentage = Some("45.5%".to_string());
    assert_eq!(condition.percentage_value(), Some(45.5));

    condition.percentage = Some("n/a%".to_string());
    assert_eq!(condition.percentage_value(), None);
}
