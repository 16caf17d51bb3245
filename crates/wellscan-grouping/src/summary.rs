use std::collections::HashSet;

use wellscan_core::models::grouping::{BiologicalInflammationGrouping, InflammationSummary};
use wellscan_core::models::scan_report::ScanReport;

use crate::matcher::{report_names, Grouping};

/// Every grouping matched by any report, with the union of their
/// inflammation names.
///
/// Unlike [`scan_type_aggregates`](crate::aggregate::scan_type_aggregates),
/// this collects all matches per report, not just the first.
pub fn matched_inflammation_summary(
    reports: &[ScanReport],
    catalog: &[BiologicalInflammationGrouping],
) -> InflammationSummary {
    let mut summary = InflammationSummary::default();
    let mut seen_groups = HashSet::new();
    let mut seen_inflammations = HashSet::new();

    for report in reports {
        let present = report_names(report);
        for grouping in catalog.iter().filter(|g| g.is_satisfied_by(&present)) {
            if seen_groups.insert(grouping.group_name.as_str()) {
                summary.group_names.push(grouping.group_name.clone());
            }
            for name in &grouping.inflammations {
                if seen_inflammations.insert(name.as_str()) {
                    summary.inflammations.push(name.clone());
                }
            }
        }
    }

    summary
}
