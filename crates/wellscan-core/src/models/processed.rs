use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::grouping::{InflammationSummary, OrganIndicatorGrouping};
use super::scan_report::{ScanReport, ScanTypeAggregate};

/// Stored IDN results for one client: one scan report per scan type, plus
/// the names of the documents they were parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IdnCollection {
    #[serde(default)]
    pub idn_data: Vec<ScanReport>,
    #[serde(default)]
    pub idn_report_document_name: Vec<String>,
}

/// The value persisted per client id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProcessedClientData {
    pub client_id: Uuid,
    #[serde(flatten)]
    pub idn: IdnCollection,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl ProcessedClientData {
    pub fn new(client_id: Uuid, now: jiff::Timestamp) -> Self {
        Self {
            client_id,
            idn: IdnCollection::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Read model returned to callers: stored data plus freshly computed
/// aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProcessedClientView {
    #[serde(flatten)]
    pub idn: IdnCollection,
    pub scan_types: Vec<ScanTypeAggregate>,
}

/// Everything document generation needs from a client's IDN data, computed
/// from a single catalog read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DocumentSummary {
    pub inflammation: InflammationSummary,
    pub scan_types: Vec<ScanTypeAggregate>,
    pub organ_grouping: Option<OrganIndicatorGrouping>,
}
