use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One finding detected in a scan, as printed in the instrument export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Condition {
    pub name: Option<String>,
    pub scale: Option<u32>,
    /// Literal `"<number>%"` as it appears in the export.
    pub percentage: Option<String>,
    #[serde(default)]
    pub real_freq: Vec<String>,
    #[serde(default)]
    pub brain_freq: Vec<String>,
}

impl Condition {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Numeric value of `percentage` with the `%` stripped.
    ///
    /// Returns `None` when the percentage is missing or not a number.
    pub fn percentage_value(&self) -> Option<f64> {
        let raw = self.percentage.as_deref()?.trim();
        raw.strip_suffix('%').unwrap_or(raw).trim().parse().ok()
    }
}
