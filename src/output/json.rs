//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Organization the data belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T, organization: Option<&str>) -> Self {
        Self {
            data,
            meta: Metadata {
                organization: organization.map(str::to_string),
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(
    data: &T,
    organization: Option<&str>,
) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(data, organization);
    serde_json::to_string_pretty(&output)
}
