//! Collection envelope shared by every list endpoint

use serde::{Deserialize, Serialize};

/// A page of items as returned by list endpoints.
///
/// ```json
/// { "kind": "SkuRuleList", "page": 1, "size": 2, "total": 2, "items": [] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemList<T> {
    /// Collection kind, e.g. `AccountList`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Page number (1-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of items in this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Total number of items across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,

    /// The items themselves
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> ItemList<T> {
    /// Wrap items into a single complete page.
    #[cfg(test)]
    pub fn from_items(kind: &str, items: Vec<T>) -> Self {
        let len = items.len() as u32;
        Self {
            kind: Some(kind.to_string()),
            page: Some(1),
            size: Some(len),
            total: Some(len),
            items,
        }
    }

    /// Whether the service reported more items than it returned.
    pub fn is_truncated(&self) -> bool {
        match self.total {
            Some(total) => (total as usize) > self.items.len(),
            None => false,
        }
    }
}
