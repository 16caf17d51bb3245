use serde::{Deserialize, Serialize};

const DEFAULT_BUCKET: &str = "wellscan";
const DEFAULT_REGION: &str = "us-east-1";

/// Runtime settings for the ingest service, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Bucket holding processed client data and the reference catalogs.
    pub bucket: String,
    pub region: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per line, for log aggregation.
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Unrecognized values fall back to JSON.
    fn from_setting(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            region: DEFAULT_REGION.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl IngestConfig {
    /// `WELLSCAN_BUCKET`, `AWS_REGION`, `WELLSCAN_LOG_FORMAT`; unset or empty
    /// variables take their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            bucket: get("WELLSCAN_BUCKET").unwrap_or(defaults.bucket),
            region: get("AWS_REGION").unwrap_or(defaults.region),
            log_format: get("WELLSCAN_LOG_FORMAT")
                .map(|v| LogFormat::from_setting(&v))
                .unwrap_or(defaults.log_format),
        }
    }
}
