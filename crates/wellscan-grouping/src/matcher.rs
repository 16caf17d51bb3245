use std::collections::HashSet;

use wellscan_core::models::grouping::{BiologicalInflammationGrouping, OrganIndicatorGrouping};
use wellscan_core::models::scan_report::ScanReport;

/// A catalog entry that matches when all of its required names are present.
pub trait Grouping {
    /// Display name of the grouping.
    fn label(&self) -> &str;

    /// Names that must all be present for a match.
    fn required(&self) -> &[String];

    /// Subset containment: extra names in `present` don't prevent a match.
    fn is_satisfied_by(&self, present: &HashSet<&str>) -> bool {
        self.required()
            .iter()
            .all(|name| present.contains(name.as_str()))
    }
}

impl Grouping for BiologicalInflammationGrouping {
    fn label(&self) -> &str {
        &self.group_name
    }

    fn required(&self) -> &[String] {
        &self.inflammations
    }
}

impl Grouping for OrganIndicatorGrouping {
    fn label(&self) -> &str {
        &self.group_health_area
    }

    fn required(&self) -> &[String] {
        &self.health_areas
    }
}

/// The first grouping, in catalog order, satisfied by `present`.
pub fn first_match<'a, G: Grouping>(catalog: &'a [G], present: &HashSet<&str>) -> Option<&'a G> {
    catalog.iter().find(|grouping| grouping.is_satisfied_by(present))
}

/// Condition names present in a report.
pub fn report_names(report: &ScanReport) -> HashSet<&str> {
    report.condition_names().collect()
}

/// The first inflammation grouping whose names are all in `report`.
///
/// Only one grouping is ever returned per report, even when several would
/// match.
pub fn first_matching_grouping<'a>(
    report: &ScanReport,
    catalog: &'a [BiologicalInflammationGrouping],
) -> Option<&'a BiologicalInflammationGrouping> {
    first_match(catalog, &report_names(report))
}

/// The first organ indicator grouping whose health areas are all among
/// `indicators`.
pub fn first_matching_organ_grouping<'a>(
    indicators: &[String],
    catalog: &'a [OrganIndicatorGrouping],
) -> Option<&'a OrganIndicatorGrouping> {
    let present: HashSet<&str> = indicators.iter().map(String::as_str).collect();
    first_match(catalog, &present)
}
