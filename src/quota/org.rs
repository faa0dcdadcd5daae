//! Username to organization resolution

use log::debug;

use crate::client::{AmsApi, ListParams, Search};
use crate::error::{Error, Result};

/// Resolve the organization the given username belongs to.
///
/// Exactly one matching account is required. Every failure here is an
/// [`Error::OrgResolution`], which the CLI reports without a failing exit
/// status.
pub async fn resolve_org_id<C: AmsApi + ?Sized>(client: &C, username: &str) -> Result<String> {
    let params = ListParams::new().search(Search::is("username", username));

    let accounts = client
        .list_accounts(&params)
        .await
        .map_err(|e| Error::OrgResolution(format!("Failed to list accounts: {}", e)))?;

    if accounts.items.len() != 1 {
        return Err(Error::OrgResolution(format!(
            "Expect 1 but find {} for the account '{}'",
            accounts.items.len(),
            username
        )));
    }

    let org_id = accounts.items[0].organization_id().ok_or_else(|| {
        Error::OrgResolution(format!(
            "The organization id is empty for the account '{}'",
            username
        ))
    })?;

    debug!("Account '{}' belongs to organization {}", username, org_id);
    Ok(org_id.to_string())
}
