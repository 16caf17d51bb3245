//! wellscan-storage
//!
//! Key-value persistence for processed client data and read access to the
//! grouping catalogs. S3-backed implementations wrap the AWS S3 SDK; the
//! in-memory ones serve tests and local runs.

pub mod catalog;
pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod state;
pub mod store;
