//! Read access to the grouping reference tables.
//!
//! Every consumer (aggregates, document summary, organ grouping) reads the
//! catalogs through [`GroupingCatalog`] so they always see the same data.

use aws_sdk_s3::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use wellscan_core::models::grouping::{BiologicalInflammationGrouping, OrganIndicatorGrouping};
use wellscan_core::s3_keys;

use crate::error::StorageError;
use crate::state;
use crate::store::BoxFuture;

pub trait GroupingCatalog: Send + Sync {
    fn biological_inflammation_groupings(
        &self,
    ) -> BoxFuture<'_, Result<Vec<BiologicalInflammationGrouping>, StorageError>>;

    fn organ_indicator_groupings(
        &self,
    ) -> BoxFuture<'_, Result<Vec<OrganIndicatorGrouping>, StorageError>>;
}

/// Catalogs stored as JSON arrays in S3. A missing object is an empty catalog.
pub struct S3GroupingCatalog {
    s3: Client,
    bucket: String,
}

impl S3GroupingCatalog {
    pub fn new(s3: Client, bucket: impl Into<String>) -> Self {
        Self {
            s3,
            bucket: bucket.into(),
        }
    }

    async fn load_table<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageError> {
        match state::load_state::<Vec<T>>(&self.s3, &self.bucket, key).await {
            Ok((rows, _etag)) => {
                debug!(key, rows = rows.len(), "catalog loaded");
                Ok(rows)
            }
            Err(StorageError::NotFound { .. }) => {
                debug!(key, "catalog object missing, treating as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl GroupingCatalog for S3GroupingCatalog {
    fn biological_inflammation_groupings(
        &self,
    ) -> BoxFuture<'_, Result<Vec<BiologicalInflammationGrouping>, StorageError>> {
        Box::pin(self.load_table(s3_keys::BIOLOGICAL_INFLAMMATION_GROUPINGS))
    }

    fn organ_indicator_groupings(
        &self,
    ) -> BoxFuture<'_, Result<Vec<OrganIndicatorGrouping>, StorageError>> {
        Box::pin(self.load_table(s3_keys::ORGAN_INDICATOR_GROUPINGS))
    }
}

/// Catalogs held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticGroupingCatalog {
    pub biological_inflammation: Vec<BiologicalInflammationGrouping>,
    pub organ_indicator: Vec<OrganIndicatorGrouping>,
}

impl StaticGroupingCatalog {
    pub fn new(biological_inflammation: Vec<BiologicalInflammationGrouping>) -> Self {
        Self {
            biological_inflammation,
            organ_indicator: Vec::new(),
        }
    }
}

impl GroupingCatalog for StaticGroupingCatalog {
    fn biological_inflammation_groupings(
        &self,
    ) -> BoxFuture<'_, Result<Vec<BiologicalInflammationGrouping>, StorageError>> {
        let rows = self.biological_inflammation.clone();
        Box::pin(async move { Ok(rows) })
    }

    fn organ_indicator_groupings(
        &self,
    ) -> BoxFuture<'_, Result<Vec<OrganIndicatorGrouping>, StorageError>> {
        let rows = self.organ_indicator.clone();
        Box::pin(async move { Ok(rows) })
    }
}
