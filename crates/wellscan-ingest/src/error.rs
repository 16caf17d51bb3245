use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("parse error: {0}")]
    Parse(#[from] wellscan_parser::error::ParseError),

    #[error("storage error: {0}")]
    Storage(#[from] wellscan_storage::error::StorageError),

    #[error("processed data for client {client_id} was modified by another writer")]
    ConcurrentModification { client_id: Uuid },

    #[error("parse worker failed: {0}")]
    Worker(String),

    #[error("tracing subscriber init failed: {0}")]
    Telemetry(String),
}
