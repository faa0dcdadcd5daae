//! Quota operations: SKU catalog, organization lookup, assignment, removal,
//! and usage reporting.
//!
//! Each operation takes the API client explicitly and performs a short,
//! strictly sequential chain of requests. None of them retry or roll back.

pub mod assign;
pub mod catalog;
pub mod org;
pub mod remove;
pub mod usage;

pub use assign::{assign_quota, find_assigned};
pub use catalog::{SkuCatalog, load_catalog};
pub use org::resolve_org_id;
pub use remove::{RemoveOutcome, remove_quota};
pub use usage::{UsageRow, get_usage, quota_cost_rows, usage_for_skus};

/// Assignment type used when none is given
pub const MANUAL_QUOTA_TYPE: &str = "Manual";

/// A catalog SKU, optionally carrying the caller's requested count and type
/// or the usage observed for its quota group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sku {
    /// SKU name, the catalog key
    pub name: String,

    /// Quota group the SKU is counted against
    pub quota_id: String,

    /// Assignment type, e.g. `Manual`
    pub qtype: String,

    /// Allowed count
    pub allowed: i64,

    /// Consumed count
    pub consumed: i64,
}

impl Sku {
    pub fn new(name: impl Into<String>, quota_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quota_id: quota_id.into(),
            qtype: MANUAL_QUOTA_TYPE.to_string(),
            allowed: 0,
            consumed: 0,
        }
    }

    /// Attach the requested assignment type.
    pub fn with_type(mut self, qtype: impl Into<String>) -> Self {
        self.qtype = qtype.into();
        self
    }

    /// Attach the requested allowed count.
    pub fn with_allowed(mut self, allowed: i64) -> Self {
        self.allowed = allowed;
        self
    }

    /// `<name>_<type>` label used in messages
    pub fn label(&self) -> String {
        format!("{}_{}", self.name, self.qtype)
    }
}
