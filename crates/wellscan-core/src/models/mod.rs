pub mod condition;
pub mod grouping;
pub mod processed;
pub mod scan_report;
