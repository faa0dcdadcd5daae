//! Resource quota and quota cost models

use serde::{Deserialize, Serialize};

/// Resource quota record bound to an organization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceQuota {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Assignment type, e.g. `Manual`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub quota_type: Option<String>,

    /// Allowed count
    #[serde(default)]
    pub sku_count: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body for creating or updating a resource quota
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceQuotaRequest {
    pub sku: String,
    pub sku_count: i64,
    #[serde(rename = "type")]
    pub quota_type: String,
}

/// Allowed/consumed counts of one quota group within an organization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuotaCost {
    #[serde(default)]
    pub quota_id: String,

    #[serde(default)]
    pub allowed: i64,

    #[serde(default)]
    pub consumed: i64,
}
