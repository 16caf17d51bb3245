//! wellscan-parser
//!
//! Turns the plain-text IDN scanner export into a [`ScanReport`]. Pure text
//! processing, with no storage or AWS dependency.
//!
//! [`ScanReport`]: wellscan_core::models::scan_report::ScanReport

pub mod error;
pub mod parser;
pub mod reassemble;

pub use parser::{parse_idn_report, parse_idn_report_file};
