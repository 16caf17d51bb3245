//! wellscan-grouping
//!
//! Matches scan reports against the grouping catalogs and derives the
//! per-scan-type aggregates. Pure functions over already-loaded data; the
//! catalog itself is read elsewhere.

pub mod aggregate;
pub mod matcher;
pub mod summary;

pub use aggregate::{scan_type_aggregate, scan_type_aggregates};
pub use matcher::{first_matching_grouping, first_matching_organ_grouping};
pub use summary::matched_inflammation_summary;
