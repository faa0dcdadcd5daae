//! Quota usage display model

use serde::Serialize;
use tabled::Tabled;

use crate::quota::UsageRow;

/// One usage row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UsageDisplay {
    /// SKU name(s)
    #[tabled(rename = "Name")]
    pub name: String,

    /// Quota group
    #[tabled(rename = "QuotaID")]
    pub quota_id: String,

    #[tabled(rename = "Allowed")]
    pub allowed: i64,

    #[tabled(rename = "Consumed")]
    pub consumed: i64,
}

impl From<UsageRow> for UsageDisplay {
    fn from(row: UsageRow) -> Self {
        Self {
            name: row.name,
            quota_id: row.quota_id,
            allowed: row.allowed,
            consumed: row.consumed,
        }
    }
}
