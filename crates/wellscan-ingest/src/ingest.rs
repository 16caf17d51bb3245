use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use wellscan_core::merge::{merge_scan_report, MergeOutcome};
use wellscan_core::models::processed::ProcessedClientData;
use wellscan_core::models::scan_report::ScanReport;
use wellscan_parser::{parse_idn_report, parse_idn_report_file};
use wellscan_storage::catalog::{GroupingCatalog, S3GroupingCatalog};
use wellscan_storage::error::StorageError;
use wellscan_storage::store::{ProcessedDataStore, S3ProcessedDataStore};

use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::events::IngestEvent;
use crate::locks::ClientLocks;

/// Summary of one upload handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReceipt {
    pub client_id: Uuid,
    pub scan_type: u32,
    pub conditions: usize,
    pub outcome: MergeOutcome,
}

/// Parses uploaded IDN exports and keeps each client's stored scan reports
/// up to date.
pub struct IdnIngestor {
    pub(crate) store: Arc<dyn ProcessedDataStore>,
    pub(crate) catalog: Arc<dyn GroupingCatalog>,
    locks: ClientLocks,
}

impl IdnIngestor {
    pub fn new(store: Arc<dyn ProcessedDataStore>, catalog: Arc<dyn GroupingCatalog>) -> Self {
        Self {
            store,
            catalog,
            locks: ClientLocks::new(),
        }
    }

    /// Build an ingestor backed by the S3 bucket named in `config`.
    pub async fn from_config(config: &IngestConfig) -> Self {
        let s3 = wellscan_storage::client::build_client(&config.region).await;
        info!(bucket = %config.bucket, region = %config.region, "using S3 storage");
        Self::new(
            Arc::new(S3ProcessedDataStore::new(s3.clone(), config.bucket.clone())),
            Arc::new(S3GroupingCatalog::new(s3, config.bucket.clone())),
        )
    }

    /// Parse the export at `path` and merge it into the client's results.
    ///
    /// A file that cannot be read fails the upload before anything is
    /// stored.
    #[instrument(skip_all, fields(%client_id, document_name))]
    pub async fn ingest_file(
        &self,
        client_id: Uuid,
        path: impl Into<PathBuf>,
        document_name: &str,
    ) -> Result<IngestReceipt, IngestError> {
        let path = path.into();
        let report = tokio::task::spawn_blocking(move || parse_idn_report_file(&path))
            .await
            .map_err(|e| IngestError::Worker(e.to_string()))??;
        self.merge_report(client_id, report, document_name).await
    }

    /// Parse already-loaded export text and merge it into the client's
    /// results.
    #[instrument(skip_all, fields(%client_id, document_name))]
    pub async fn ingest_text(
        &self,
        client_id: Uuid,
        text: String,
        document_name: &str,
    ) -> Result<IngestReceipt, IngestError> {
        let report = tokio::task::spawn_blocking(move || parse_idn_report(&text))
            .await
            .map_err(|e| IngestError::Worker(e.to_string()))?;
        self.merge_report(client_id, report, document_name).await
    }

    /// Fetch, merge and persist under the client's lock.
    ///
    /// The write is conditional on the version that was read, so a writer
    /// outside this process racing the same client surfaces as
    /// [`IngestError::ConcurrentModification`] instead of a lost update.
    pub async fn merge_report(
        &self,
        client_id: Uuid,
        report: ScanReport,
        document_name: &str,
    ) -> Result<IngestReceipt, IngestError> {
        let _guard = self.locks.acquire(client_id).await;

        let now = jiff::Timestamp::now();
        let (mut data, etag) = match self.store.load(client_id).await? {
            Some(stored) => (stored.value, Some(stored.etag)),
            None => (ProcessedClientData::new(client_id, now), None),
        };

        let scan_type = report.scan_type;
        let conditions = report.report.len();
        let outcome = merge_scan_report(&mut data.idn, report, document_name);
        data.updated_at = now;

        self.store
            .upsert(data, etag)
            .await
            .map_err(|e| match e {
                StorageError::PreconditionFailed { .. } => {
                    IngestError::ConcurrentModification { client_id }
                }
                other => IngestError::Storage(other),
            })?;

        IngestEvent::new("idn_report.merged", client_id)
            .with_document(document_name)
            .with_details(serde_json::json!({
                "scanType": scan_type,
                "conditions": conditions,
                "outcome": outcome,
            }))
            .emit();

        Ok(IngestReceipt {
            client_id,
            scan_type,
            conditions,
            outcome,
        })
    }
}
