use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;
use crate::error::IngestError;

/// Install the global `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(format: LogFormat) -> Result<(), IngestError> {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    result.map_err(|e| IngestError::Telemetry(e.to_string()))
}
