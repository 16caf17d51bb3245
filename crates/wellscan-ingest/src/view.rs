//! Read side: stored scan reports with aggregates computed on every read.

use tracing::debug;
use uuid::Uuid;

use wellscan_core::models::processed::{DocumentSummary, IdnCollection, ProcessedClientView};
use wellscan_grouping::{
    first_matching_organ_grouping, matched_inflammation_summary, scan_type_aggregates,
};

use crate::error::IngestError;
use crate::ingest::IdnIngestor;

impl IdnIngestor {
    async fn stored_collection(&self, client_id: Uuid) -> Result<IdnCollection, IngestError> {
        Ok(self
            .store
            .load(client_id)
            .await?
            .map(|stored| stored.value.idn)
            .unwrap_or_default())
    }

    /// Stored results for `client_id` plus per-scan-type aggregates.
    pub async fn processed_view(&self, client_id: Uuid) -> Result<ProcessedClientView, IngestError> {
        let idn = self.stored_collection(client_id).await?;
        let catalog = self.catalog.biological_inflammation_groupings().await?;
        let scan_types = scan_type_aggregates(&idn.idn_data, &catalog);

        debug!(
            %client_id,
            reports = idn.idn_data.len(),
            aggregates = scan_types.len(),
            "processed view computed"
        );

        Ok(ProcessedClientView { idn, scan_types })
    }

    /// Grouping results for document generation.
    ///
    /// `organ_indicators` come from the client's visual report, if any.
    pub async fn document_summary(
        &self,
        client_id: Uuid,
        organ_indicators: &[String],
    ) -> Result<DocumentSummary, IngestError> {
        let idn = self.stored_collection(client_id).await?;
        let inflammation_catalog = self.catalog.biological_inflammation_groupings().await?;
        let organ_catalog = self.catalog.organ_indicator_groupings().await?;

        Ok(DocumentSummary {
            inflammation: matched_inflammation_summary(&idn.idn_data, &inflammation_catalog),
            scan_types: scan_type_aggregates(&idn.idn_data, &inflammation_catalog),
            organ_grouping: first_matching_organ_grouping(organ_indicators, &organ_catalog)
                .cloned(),
        })
    }
}
