//! wellscan-ingest
//!
//! The IDN upload pipeline: parse an uploaded export off the async runtime,
//! merge it into the client's stored results under a per-client lock, and
//! serve the stored results with freshly computed grouping aggregates.

pub mod config;
pub mod error;
pub mod events;
pub mod ingest;
pub mod locks;
pub mod telemetry;
pub mod view;

pub use ingest::{IdnIngestor, IngestReceipt};
