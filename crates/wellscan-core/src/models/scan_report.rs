use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::condition::Condition;

/// The parsed result of one uploaded IDN text document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScanReport {
    /// Instrument scan mode. `0` when the document carries no `Scantype:` marker.
    #[serde(default)]
    pub scan_type: u32,
    /// Conditions in order of appearance in the source text.
    #[serde(default)]
    pub report: Vec<Condition>,
}

impl ScanReport {
    /// Names of all conditions in the report, skipping unnamed ones.
    pub fn condition_names(&self) -> impl Iterator<Item = &str> {
        self.report.iter().filter_map(|c| c.name.as_deref())
    }
}

/// Per-scan-type averages over a report that matched a grouping.
///
/// Derived on every read; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScanTypeAggregate {
    pub scan_type: u32,
    pub avg_scale: f64,
    pub avg_percentage: f64,
}
