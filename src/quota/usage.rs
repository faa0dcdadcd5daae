//! Allowed/consumed lookups for SKUs and whole organizations

use super::{Sku, SkuCatalog};
use crate::client::{AmsApi, ListParams, Search};
use crate::error::{Error, Result};

/// One row of a usage report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRow {
    /// SKU name, or comma-joined SKU names sharing the quota group
    pub name: String,
    pub quota_id: String,
    pub allowed: i64,
    pub consumed: i64,
}

impl From<Sku> for UsageRow {
    fn from(sku: Sku) -> Self {
        Self {
            name: sku.name,
            quota_id: sku.quota_id,
            allowed: sku.allowed,
            consumed: sku.consumed,
        }
    }
}

/// Overlay the organization's allowed/consumed counts for the SKU's quota
/// group onto the SKU.
///
/// Only an exact single match is used. No match leaves the SKU unchanged and
/// is not an error.
pub async fn get_usage<C: AmsApi + ?Sized>(client: &C, org_id: &str, sku: Sku) -> Result<Sku> {
    let params = ListParams::new().search(Search::is("quota_id", &sku.quota_id));

    let costs = client
        .list_quota_cost(org_id, &params)
        .await
        .map_err(|source| Error::QuotaCost {
            org_id: org_id.to_string(),
            source,
        })?;

    match costs.items.as_slice() {
        [cost] => Ok(Sku {
            allowed: cost.allowed,
            consumed: cost.consumed,
            ..sku
        }),
        _ => Ok(sku),
    }
}

/// Usage rows for the given SKUs, in order.
pub async fn usage_for_skus<C: AmsApi + ?Sized>(
    client: &C,
    org_id: &str,
    skus: Vec<Sku>,
) -> Result<Vec<UsageRow>> {
    let mut rows = Vec::with_capacity(skus.len());
    for sku in skus {
        rows.push(get_usage(client, org_id, sku).await?.into());
    }
    Ok(rows)
}

/// Usage rows for every quota cost entry of the organization.
///
/// Each row is labelled with the names of the SKUs the organization has
/// resource quotas for in that quota group.
pub async fn quota_cost_rows<C: AmsApi + ?Sized>(
    client: &C,
    org_id: &str,
    catalog: &SkuCatalog,
) -> Result<Vec<UsageRow>> {
    let quotas = client
        .list_resource_quotas(org_id, &ListParams::all())
        .await
        .map_err(|source| Error::QuotaLookup {
            org_id: org_id.to_string(),
            source,
        })?;
    let labels = catalog.quota_labels(quotas.items.iter().filter_map(|q| q.sku.as_deref()));

    let costs = client
        .list_quota_cost(org_id, &ListParams::all())
        .await
        .map_err(|source| Error::QuotaCost {
            org_id: org_id.to_string(),
            source,
        })?;

    Ok(costs
        .items
        .into_iter()
        .map(|cost| UsageRow {
            name: labels.get(&cost.quota_id).cloned().unwrap_or_default(),
            quota_id: cost.quota_id,
            allowed: cost.allowed,
            consumed: cost.consumed,
        })
        .collect())
}
