use std::collections::HashMap;

use tokio::sync::Mutex;
use uuid::Uuid;

use wellscan_core::models::processed::ProcessedClientData;
use wellscan_core::s3_keys;

use crate::error::StorageError;
use crate::store::{BoxFuture, ProcessedDataStore, Versioned};

#[derive(Default)]
struct Records {
    by_client: HashMap<Uuid, Versioned<ProcessedClientData>>,
    version: u64,
}

/// In-process [`ProcessedDataStore`] with the same precondition rules as the
/// S3 store. Tags are a monotonically increasing counter.
#[derive(Default)]
pub struct MemoryProcessedDataStore {
    records: Mutex<Records>,
}

impl MemoryProcessedDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.by_client.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl ProcessedDataStore for MemoryProcessedDataStore {
    fn load(
        &self,
        client_id: Uuid,
    ) -> BoxFuture<'_, Result<Option<Versioned<ProcessedClientData>>, StorageError>> {
        Box::pin(async move { Ok(self.records.lock().await.by_client.get(&client_id).cloned()) })
    }

    fn upsert(
        &self,
        data: ProcessedClientData,
        expected_etag: Option<String>,
    ) -> BoxFuture<'_, Result<String, StorageError>> {
        Box::pin(async move {
            let mut records = self.records.lock().await;
            let current = records.by_client.get(&data.client_id).map(|v| v.etag.as_str());
            if current != expected_etag.as_deref() {
                return Err(StorageError::PreconditionFailed {
                    key: s3_keys::processed_client_data(data.client_id),
                });
            }

            records.version += 1;
            let etag = records.version.to_string();
            records.by_client.insert(
                data.client_id,
                Versioned {
                    value: data,
                    etag: etag.clone(),
                },
            );
            Ok(etag)
        })
    }
}
