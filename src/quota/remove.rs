//! Quota removal guarded by current consumption

use log::debug;

use super::{Sku, find_assigned, get_usage};
use crate::client::AmsApi;
use crate::error::{Error, Result};

/// Result of a removal attempt that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// No record exists for the SKU and type; nothing was done
    NotAssigned,
    /// The quota is consumed and `force` was not given; nothing was done.
    /// Carries the SKU with its observed usage.
    InUse(Sku),
    /// The record with this ID was deleted
    Removed(String),
}

/// Remove the SKU's resource quota from the organization.
///
/// The consumption check and the delete are separate requests; usage that
/// starts in between is not detected.
pub async fn remove_quota<C: AmsApi + ?Sized>(
    client: &C,
    org_id: &str,
    sku: Sku,
    force: bool,
) -> Result<RemoveOutcome> {
    let Some(record_id) = find_assigned(client, org_id, &sku).await? else {
        return Ok(RemoveOutcome::NotAssigned);
    };

    let sku = get_usage(client, org_id, sku).await?;
    if sku.consumed != 0 && !force {
        return Ok(RemoveOutcome::InUse(sku));
    }

    debug!(
        "Deleting resource quota {} ({} consumed) of {}",
        record_id, sku.consumed, org_id
    );
    client
        .delete_resource_quota(org_id, &record_id)
        .await
        .map_err(|source| Error::RemoveFailed {
            org_id: org_id.to_string(),
            sku: sku.name.clone(),
            qtype: sku.qtype.clone(),
            record_id: record_id.clone(),
            source,
        })?;

    Ok(RemoveOutcome::Removed(record_id))
}
