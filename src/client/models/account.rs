//! Account models

use serde::{Deserialize, Serialize};

/// Account resource, as returned by the account search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Organization the account belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationRef>,
}

/// Organization reference embedded in an account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizationRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Account {
    /// Non-empty organization ID of this account, if any.
    pub fn organization_id(&self) -> Option<&str> {
        self.organization
            .as_ref()
            .and_then(|org| org.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}
