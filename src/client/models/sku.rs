//! SKU rule models

use serde::{Deserialize, Serialize};

/// SKU rule: maps a SKU name to the quota group it is counted against
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkuRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// SKU name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Quota group identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_id: Option<String>,

    /// Cost of one unit of this SKU against its quota group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
}
