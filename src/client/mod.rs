//! Accounts management API client

use async_trait::async_trait;

use crate::error::ApiResult;

pub mod ams;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod params;

pub use ams::AmsClient;
#[cfg(test)]
pub use mock::MockAmsClient;
pub use models::{
    Account, ItemList, QuotaCost, ResourceQuota, ResourceQuotaRequest, SkuRule,
};
pub use params::{ListParams, Search};

/// Accounts management API operations used by the quota commands.
///
/// Every method is one HTTP exchange. A response whose status differs from the
/// one the operation expects is an error.
#[async_trait]
pub trait AmsApi: Send + Sync {
    /// Search accounts (`GET /accounts`), expects 200.
    async fn list_accounts(&self, params: &ListParams) -> ApiResult<ItemList<Account>>;

    /// List SKU rules (`GET /sku_rules`), expects 200.
    async fn list_sku_rules(&self, params: &ListParams) -> ApiResult<ItemList<SkuRule>>;

    /// List resource quotas of an organization, expects 200.
    async fn list_resource_quotas(
        &self,
        org_id: &str,
        params: &ListParams,
    ) -> ApiResult<ItemList<ResourceQuota>>;

    /// Create a resource quota in an organization, expects 201.
    async fn create_resource_quota(
        &self,
        org_id: &str,
        request: &ResourceQuotaRequest,
    ) -> ApiResult<ResourceQuota>;

    /// Patch an existing resource quota, expects 200.
    async fn update_resource_quota(
        &self,
        org_id: &str,
        quota_id: &str,
        request: &ResourceQuotaRequest,
    ) -> ApiResult<ResourceQuota>;

    /// Delete a resource quota, expects 204.
    async fn delete_resource_quota(&self, org_id: &str, quota_id: &str) -> ApiResult<()>;

    /// Allowed/consumed counts per quota group of an organization, expects 200.
    async fn list_quota_cost(
        &self,
        org_id: &str,
        params: &ListParams,
    ) -> ApiResult<ItemList<QuotaCost>>;
}
