use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// A structured record of something the pipeline did to a client's data.
///
/// Emitted through `tracing` so it lands in the same log stream as
/// everything else.
#[derive(Debug, Clone, Serialize)]
pub struct IngestEvent {
    pub action: String,
    pub client_id: Uuid,
    pub document_name: Option<String>,
    pub details: Option<serde_json::Value>,
}

impl IngestEvent {
    pub fn new(action: impl Into<String>, client_id: Uuid) -> Self {
        Self {
            action: action.into(),
            client_id,
            document_name: None,
            details: None,
        }
    }

    pub fn with_document(mut self, document_name: impl Into<String>) -> Self {
        self.document_name = Some(document_name.into());
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            event.action = %self.action,
            event.client_id = %self.client_id,
            event.document_name = self.document_name.as_deref().unwrap_or(""),
            event.details = %details,
            "ingest event"
        );
    }
}
