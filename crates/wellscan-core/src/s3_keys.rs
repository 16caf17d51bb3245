//! S3 key/path conventions.
//!
//! Pure string functions. No AWS SDK dependency. These define the canonical
//! layout of objects in the Wellscan S3 bucket.

use uuid::Uuid;

pub fn processed_client_data(client_id: Uuid) -> String {
    format!("processed/{client_id}/idn.json")
}

pub const BIOLOGICAL_INFLAMMATION_GROUPINGS: &str =
    "reference/biological-inflammation-groupings.json";

pub const ORGAN_INDICATOR_GROUPINGS: &str = "reference/organ-indicator-groupings.json";
