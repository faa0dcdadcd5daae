//! Quota assignment: create the resource quota record, or update the one that
//! already exists for the same SKU and type.

use log::debug;

use super::Sku;
use crate::client::{AmsApi, ListParams, ResourceQuotaRequest, Search};
use crate::error::{ApiError, Error, Result};

/// Find the resource quota record for this SKU name and type.
///
/// Returns the ID of the first match, or `None` when the SKU is not assigned.
pub async fn find_assigned<C: AmsApi + ?Sized>(
    client: &C,
    org_id: &str,
    sku: &Sku,
) -> Result<Option<String>> {
    let params =
        ListParams::new().search(Search::is("sku", &sku.name).and_is("type", &sku.qtype));

    let quotas = client
        .list_resource_quotas(org_id, &params)
        .await
        .map_err(|source| Error::QuotaLookup {
            org_id: org_id.to_string(),
            source,
        })?;

    let Some(first) = quotas.items.into_iter().next() else {
        return Ok(None);
    };

    match first.id.filter(|id| !id.is_empty()) {
        Some(id) => Ok(Some(id)),
        None => Err(Error::QuotaLookup {
            org_id: org_id.to_string(),
            source: ApiError::InvalidResponse("resource quota without id".to_string()),
        }),
    }
}

/// Assign `sku.allowed` units of the SKU with `sku.qtype` to the organization.
///
/// Returns the ID of the created or updated record.
pub async fn assign_quota<C: AmsApi + ?Sized>(client: &C, org_id: &str, sku: &Sku) -> Result<String> {
    let existing = find_assigned(client, org_id, sku).await?;

    let request = ResourceQuotaRequest {
        sku: sku.name.clone(),
        sku_count: sku.allowed,
        quota_type: sku.qtype.clone(),
    };

    let result = match existing {
        Some(ref quota_id) => {
            debug!("Updating resource quota {} of {}", quota_id, org_id);
            client
                .update_resource_quota(org_id, quota_id, &request)
                .await
        }
        None => {
            debug!("Creating resource quota {} in {}", sku.label(), org_id);
            client.create_resource_quota(org_id, &request).await
        }
    };

    let fail = |source: ApiError| Error::AssignFailed {
        org_id: org_id.to_string(),
        sku: sku.name.clone(),
        qtype: sku.qtype.clone(),
        count: sku.allowed,
        source,
    };

    let quota = result.map_err(fail)?;
    quota
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| fail(ApiError::InvalidResponse("resource quota without id".to_string())))
}
