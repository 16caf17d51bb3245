use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Catalog entry naming a set of conditions that together indicate a
/// higher-level biological inflammation category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BiologicalInflammationGrouping {
    pub group_name: String,
    /// Condition names that must all be present for the grouping to match.
    pub inflammations: Vec<String>,
}

/// Catalog entry grouping organ indicators from the visual report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrganIndicatorGrouping {
    pub group_health_area: String,
    pub health_areas: Vec<String>,
    pub explanation: String,
}

/// All groupings matched across a client's scan reports, for document
/// generation. Both lists are deduplicated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InflammationSummary {
    pub group_names: Vec<String>,
    pub inflammations: Vec<String>,
}
