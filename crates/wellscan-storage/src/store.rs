use std::future::Future;
use std::pin::Pin;

use aws_sdk_s3::Client;
use tracing::debug;
use uuid::Uuid;

use wellscan_core::models::processed::ProcessedClientData;
use wellscan_core::s3_keys;

use crate::error::StorageError;
use crate::state;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A stored value together with the version tag it was read at.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<T> {
    pub value: T,
    pub etag: String,
}

/// Processed IDN data, keyed by client id.
///
/// Methods return boxed futures for dyn compatibility.
pub trait ProcessedDataStore: Send + Sync {
    /// Fetch a client's processed data. `Ok(None)` for a client with nothing
    /// stored yet.
    fn load(
        &self,
        client_id: Uuid,
    ) -> BoxFuture<'_, Result<Option<Versioned<ProcessedClientData>>, StorageError>>;

    /// Insert or update a client's processed data and return the new tag.
    ///
    /// With `expected_etag = None` the write succeeds only if nothing is
    /// stored for the client; with `Some(tag)` only if the stored version
    /// still carries `tag`. Otherwise `StorageError::PreconditionFailed`.
    fn upsert(
        &self,
        data: ProcessedClientData,
        expected_etag: Option<String>,
    ) -> BoxFuture<'_, Result<String, StorageError>>;
}

/// Processed data as one JSON object per client in S3.
pub struct S3ProcessedDataStore {
    s3: Client,
    bucket: String,
}

impl S3ProcessedDataStore {
    pub fn new(s3: Client, bucket: impl Into<String>) -> Self {
        Self {
            s3,
            bucket: bucket.into(),
        }
    }
}

impl ProcessedDataStore for S3ProcessedDataStore {
    fn load(
        &self,
        client_id: Uuid,
    ) -> BoxFuture<'_, Result<Option<Versioned<ProcessedClientData>>, StorageError>> {
        Box::pin(async move {
            let key = s3_keys::processed_client_data(client_id);
            match state::load_state::<ProcessedClientData>(&self.s3, &self.bucket, &key).await {
                Ok((value, etag)) => Ok(Some(Versioned { value, etag })),
                Err(StorageError::NotFound { .. }) => {
                    debug!(%client_id, "no processed data stored yet");
                    Ok(None)
                }
                Err(e) => Err(e),
            }
        })
    }

    fn upsert(
        &self,
        data: ProcessedClientData,
        expected_etag: Option<String>,
    ) -> BoxFuture<'_, Result<String, StorageError>> {
        Box::pin(async move {
            let key = s3_keys::processed_client_data(data.client_id);
            let etag = match expected_etag {
                Some(expected) => {
                    state::save_state_if_match(&self.s3, &self.bucket, &key, &data, &expected)
                        .await?
                }
                None => state::save_state_if_absent(&self.s3, &self.bucket, &key, &data).await?,
            };
            debug!(
                client_id = %data.client_id,
                bucket = %self.bucket,
                key = %key,
                "processed data saved"
            );
            Ok(etag)
        })
    }
}
