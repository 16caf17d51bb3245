//! Upsert-by-scan-type merge of a freshly parsed report into a client's
//! stored collection.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::processed::IdnCollection;
use crate::models::scan_report::ScanReport;

/// What a merge did to the stored collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum MergeOutcome {
    /// A report with the same scan type was overwritten at `position`.
    Replaced { position: usize },
    /// The report was new for its scan type and now sits at `position`.
    Appended { position: usize },
}

/// Merge `report` into `collection`, keyed by scan type.
///
/// A stored report with the same scan type is replaced in place and the
/// document-name list is left alone. Otherwise the report is appended and
/// `document_name` is appended alongside it. Merging the same report twice
/// leaves the collection as a single merge would.
pub fn merge_scan_report(
    collection: &mut IdnCollection,
    report: ScanReport,
    document_name: &str,
) -> MergeOutcome {
    match collection
        .idn_data
        .iter()
        .position(|stored| stored.scan_type == report.scan_type)
    {
        Some(position) => {
            collection.idn_data[position] = report;
            MergeOutcome::Replaced { position }
        }
        None => {
            collection.idn_data.push(report);
            collection
                .idn_report_document_name
                .push(document_name.to_string());
            MergeOutcome::Appended {
                position: collection.idn_data.len() - 1,
            }
        }
    }
}
