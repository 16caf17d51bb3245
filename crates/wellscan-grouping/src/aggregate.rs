use tracing::debug;

use wellscan_core::models::grouping::BiologicalInflammationGrouping;
use wellscan_core::models::scan_report::{ScanReport, ScanTypeAggregate};

use crate::matcher::{first_matching_grouping, Grouping};

/// Averages for `report` if any grouping in `catalog` matches it.
///
/// Means run over every condition in the report, not only the ones named by
/// the grouping. Missing scales and percentages count as 0.
pub fn scan_type_aggregate(
    report: &ScanReport,
    catalog: &[BiologicalInflammationGrouping],
) -> Option<ScanTypeAggregate> {
    let Some(grouping) = first_matching_grouping(report, catalog) else {
        debug!(scan_type = report.scan_type, "no grouping matched scan report");
        return None;
    };
    debug!(
        scan_type = report.scan_type,
        group = grouping.label(),
        "scan report matched grouping"
    );
    Some(averages(report))
}

/// Aggregates for every matched report, ascending by scan type.
pub fn scan_type_aggregates(
    reports: &[ScanReport],
    catalog: &[BiologicalInflammationGrouping],
) -> Vec<ScanTypeAggregate> {
    let mut aggregates: Vec<_> = reports
        .iter()
        .filter_map(|report| scan_type_aggregate(report, catalog))
        .collect();
    aggregates.sort_by_key(|a| a.scan_type);
    aggregates
}

fn averages(report: &ScanReport) -> ScanTypeAggregate {
    let count = report.report.len();
    if count == 0 {
        return ScanTypeAggregate {
            scan_type: report.scan_type,
            avg_scale: 0.0,
            avg_percentage: 0.0,
        };
    }

    let total_scale: u64 = report
        .report
        .iter()
        .map(|c| u64::from(c.scale.unwrap_or(0)))
        .sum();
    let total_percentage: f64 = report
        .report
        .iter()
        .map(|c| c.percentage_value().unwrap_or(0.0))
        .sum();

    ScanTypeAggregate {
        scan_type: report.scan_type,
        avg_scale: round_one_decimal(total_scale as f64 / count as f64),
        avg_percentage: round_one_decimal(total_percentage / count as f64),
    }
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
