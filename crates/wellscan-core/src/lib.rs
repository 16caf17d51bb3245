//! wellscan-core
//!
//! Pure domain types, storage key conventions, and the scan-report merge
//! policy. No AWS SDK dependency; this is the shared vocabulary of the
//! Wellscan system.

pub mod merge;
pub mod models;
pub mod s3_keys;
