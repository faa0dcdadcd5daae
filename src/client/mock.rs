//! Mock accounts management client for testing
//!
//! Keeps accounts, SKU rules, resource quotas and quota costs in memory and
//! answers searches the same way the service does, so quota operations can be
//! exercised end to end without HTTP.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{
    Account, AmsApi, ItemList, ListParams, QuotaCost, ResourceQuota, ResourceQuotaRequest,
    Search, SkuRule,
};
use super::models::account::OrganizationRef;
use crate::error::{ApiError, ApiResult};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockAmsClient::new()
///     .with_account("alice", "org1")
///     .await
///     .with_sku_rule("addon-foo", "Q1")
///     .await;
/// ```
#[derive(Default)]
pub struct MockAmsClient {
    accounts: Arc<Mutex<Vec<Account>>>,
    sku_rules: Arc<Mutex<Vec<SkuRule>>>,
    /// Resource quotas by organization
    quotas: Arc<Mutex<HashMap<String, Vec<ResourceQuota>>>>,
    /// Quota costs by organization
    costs: Arc<Mutex<HashMap<String, Vec<QuotaCost>>>>,
    /// Errors to return, keyed by operation name, consumed on first use
    errors: Arc<Mutex<HashMap<&'static str, ApiError>>>,
    next_id: Arc<Mutex<usize>>,
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "create_resource_quota")
    pub method: &'static str,
    /// Organization ID if the endpoint is organization scoped
    pub org_id: Option<String>,
    /// Resource quota ID for single-record operations
    pub quota_id: Option<String>,
    /// Search expression, if any
    pub search: Option<String>,
    /// Request body for create/update
    pub body: Option<ResourceQuotaRequest>,
}

impl CapturedRequest {
    fn new(method: &'static str) -> Self {
        Self {
            method,
            org_id: None,
            quota_id: None,
            search: None,
            body: None,
        }
    }
}

impl MockAmsClient {
    /// Create a new mock client with no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account belonging to an organization.
    pub async fn with_account(self, username: &str, org_id: &str) -> Self {
        self.accounts.lock().await.push(Account {
            id: Some(format!("acc-{}", username)),
            username: Some(username.to_string()),
            email: None,
            organization: Some(OrganizationRef {
                id: Some(org_id.to_string()),
                name: None,
            }),
        });
        self
    }

    /// Add a SKU rule.
    pub async fn with_sku_rule(self, sku: &str, quota_id: &str) -> Self {
        self.sku_rules.lock().await.push(SkuRule {
            id: Some(format!("rule-{}", sku)),
            sku: Some(sku.to_string()),
            quota_id: Some(quota_id.to_string()),
            cost: Some(1),
        });
        self
    }

    /// Add an existing resource quota record with its quota cost entry.
    pub async fn with_quota(
        self,
        org_id: &str,
        sku: &str,
        quota_type: &str,
        allowed: i64,
        consumed: i64,
    ) -> Self {
        let id = self.allocate_id().await;
        self.quotas
            .lock()
            .await
            .entry(org_id.to_string())
            .or_default()
            .push(ResourceQuota {
                id: Some(id),
                organization_id: Some(org_id.to_string()),
                sku: Some(sku.to_string()),
                quota_type: Some(quota_type.to_string()),
                sku_count: allowed,
                created_at: None,
                updated_at: None,
            });

        if let Some(quota_id) = self.quota_id_of(sku).await {
            let mut costs = self.costs.lock().await;
            let entries = costs.entry(org_id.to_string()).or_default();
            match entries.iter_mut().find(|c| c.quota_id == quota_id) {
                Some(cost) => {
                    cost.allowed += allowed;
                    cost.consumed += consumed;
                }
                None => entries.push(QuotaCost {
                    quota_id,
                    allowed,
                    consumed,
                }),
            }
        }
        self
    }

    /// Add a quota cost entry without a backing resource quota record.
    pub async fn with_cost(self, org_id: &str, quota_id: &str, allowed: i64, consumed: i64) -> Self {
        self.costs
            .lock()
            .await
            .entry(org_id.to_string())
            .or_default()
            .push(QuotaCost {
                quota_id: quota_id.to_string(),
                allowed,
                consumed,
            });
        self
    }

    /// Configure an error for the next call of the named operation.
    pub async fn with_error(self, method: &'static str, error: ApiError) -> Self {
        self.errors.lock().await.insert(method, error);
        self
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Names of the captured calls, in order.
    pub async fn call_log(&self) -> Vec<&'static str> {
        self.captured_requests
            .lock()
            .await
            .iter()
            .map(|r| r.method)
            .collect()
    }

    /// Resource quota records currently stored for an organization.
    pub async fn quotas_of(&self, org_id: &str) -> Vec<ResourceQuota> {
        self.quotas
            .lock()
            .await
            .get(org_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn capture(&self, request: CapturedRequest) -> ApiResult<()> {
        let method = request.method;
        self.captured_requests.lock().await.push(request);

        match self.errors.lock().await.remove(method) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn allocate_id(&self) -> String {
        let mut next = self.next_id.lock().await;
        *next += 1;
        format!("rq-{}", *next)
    }

    async fn quota_id_of(&self, sku: &str) -> Option<String> {
        self.sku_rules
            .lock()
            .await
            .iter()
            .find(|rule| rule.sku.as_deref() == Some(sku))
            .and_then(|rule| rule.quota_id.clone())
    }

    /// Recompute the allowed count of a quota group from its records,
    /// keeping the consumed count.
    async fn refresh_cost(&self, org_id: &str, sku: &str) {
        let Some(quota_id) = self.quota_id_of(sku).await else {
            return;
        };

        let mut skus_in_group = Vec::new();
        for rule in self.sku_rules.lock().await.iter() {
            if rule.quota_id.as_deref() == Some(quota_id.as_str()) {
                if let Some(ref name) = rule.sku {
                    skus_in_group.push(name.clone());
                }
            }
        }

        let allowed: i64 = self
            .quotas_of(org_id)
            .await
            .iter()
            .filter(|q| {
                q.sku
                    .as_ref()
                    .is_some_and(|name| skus_in_group.contains(name))
            })
            .map(|q| q.sku_count)
            .sum();

        let mut costs = self.costs.lock().await;
        let entries = costs.entry(org_id.to_string()).or_default();
        match entries.iter_mut().find(|c| c.quota_id == quota_id) {
            Some(cost) => cost.allowed = allowed,
            None => entries.push(QuotaCost {
                quota_id,
                allowed,
                consumed: 0,
            }),
        }
        entries.retain(|c| c.allowed != 0 || c.consumed != 0);
    }
}

fn truncate<T>(mut items: Vec<T>, params: &ListParams) -> Vec<T> {
    if let Some(size) = params.size {
        items.truncate(size);
    }
    items
}

#[async_trait]
impl AmsApi for MockAmsClient {
    async fn list_accounts(&self, params: &ListParams) -> ApiResult<ItemList<Account>> {
        self.capture(CapturedRequest {
            search: params.search.as_ref().map(|s| s.to_string()),
            ..CapturedRequest::new("list_accounts")
        })
        .await?;

        let items: Vec<Account> = self
            .accounts
            .lock()
            .await
            .iter()
            .filter(|a| {
                let username = a.username.as_deref().unwrap_or_default();
                params.matches(&Search::is("username", username))
            })
            .cloned()
            .collect();

        Ok(ItemList::from_items("AccountList", truncate(items, params)))
    }

    async fn list_sku_rules(&self, params: &ListParams) -> ApiResult<ItemList<SkuRule>> {
        self.capture(CapturedRequest::new("list_sku_rules")).await?;

        let items = self.sku_rules.lock().await.clone();
        let total = items.len() as u32;
        let mut list = ItemList::from_items("SkuRuleList", truncate(items, params));
        list.total = Some(total);
        Ok(list)
    }

    async fn list_resource_quotas(
        &self,
        org_id: &str,
        params: &ListParams,
    ) -> ApiResult<ItemList<ResourceQuota>> {
        self.capture(CapturedRequest {
            org_id: Some(org_id.to_string()),
            search: params.search.as_ref().map(|s| s.to_string()),
            ..CapturedRequest::new("list_resource_quotas")
        })
        .await?;

        let items: Vec<ResourceQuota> = self
            .quotas_of(org_id)
            .await
            .into_iter()
            .filter(|q| {
                let sku = q.sku.as_deref().unwrap_or_default();
                let quota_type = q.quota_type.as_deref().unwrap_or_default();
                params.matches(&Search::is("sku", sku).and_is("type", quota_type))
            })
            .collect();

        Ok(ItemList::from_items(
            "ResourceQuotaList",
            truncate(items, params),
        ))
    }

    async fn create_resource_quota(
        &self,
        org_id: &str,
        request: &ResourceQuotaRequest,
    ) -> ApiResult<ResourceQuota> {
        self.capture(CapturedRequest {
            org_id: Some(org_id.to_string()),
            body: Some(request.clone()),
            ..CapturedRequest::new("create_resource_quota")
        })
        .await?;

        let quota = ResourceQuota {
            id: Some(self.allocate_id().await),
            organization_id: Some(org_id.to_string()),
            sku: Some(request.sku.clone()),
            quota_type: Some(request.quota_type.clone()),
            sku_count: request.sku_count,
            created_at: None,
            updated_at: None,
        };

        self.quotas
            .lock()
            .await
            .entry(org_id.to_string())
            .or_default()
            .push(quota.clone());
        self.refresh_cost(org_id, &request.sku).await;

        Ok(quota)
    }

    async fn update_resource_quota(
        &self,
        org_id: &str,
        quota_id: &str,
        request: &ResourceQuotaRequest,
    ) -> ApiResult<ResourceQuota> {
        self.capture(CapturedRequest {
            org_id: Some(org_id.to_string()),
            quota_id: Some(quota_id.to_string()),
            body: Some(request.clone()),
            ..CapturedRequest::new("update_resource_quota")
        })
        .await?;

        let updated = {
            let mut quotas = self.quotas.lock().await;
            let quota = quotas
                .get_mut(org_id)
                .and_then(|records| {
                    records
                        .iter_mut()
                        .find(|q| q.id.as_deref() == Some(quota_id))
                })
                .ok_or_else(|| ApiError::NotFound(format!("Resource quota {}", quota_id)))?;

            quota.sku_count = request.sku_count;
            quota.clone()
        };
        self.refresh_cost(org_id, &request.sku).await;

        Ok(updated)
    }

    async fn delete_resource_quota(&self, org_id: &str, quota_id: &str) -> ApiResult<()> {
        self.capture(CapturedRequest {
            org_id: Some(org_id.to_string()),
            quota_id: Some(quota_id.to_string()),
            ..CapturedRequest::new("delete_resource_quota")
        })
        .await?;

        let removed = {
            let mut quotas = self.quotas.lock().await;
            let records = quotas
                .get_mut(org_id)
                .ok_or_else(|| ApiError::NotFound(format!("Resource quota {}", quota_id)))?;
            let index = records
                .iter()
                .position(|q| q.id.as_deref() == Some(quota_id))
                .ok_or_else(|| ApiError::NotFound(format!("Resource quota {}", quota_id)))?;
            records.remove(index)
        };

        if let Some(ref sku) = removed.sku {
            self.refresh_cost(org_id, sku).await;
        }
        Ok(())
    }

    async fn list_quota_cost(
        &self,
        org_id: &str,
        params: &ListParams,
    ) -> ApiResult<ItemList<QuotaCost>> {
        self.capture(CapturedRequest {
            org_id: Some(org_id.to_string()),
            search: params.search.as_ref().map(|s| s.to_string()),
            ..CapturedRequest::new("list_quota_cost")
        })
        .await?;

        let items: Vec<QuotaCost> = self
            .costs
            .lock()
            .await
            .get(org_id)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|c| params.matches(&Search::is("quota_id", &c.quota_id)))
            .collect();

        Ok(ItemList::from_items("QuotaCostList", truncate(items, params)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_filters_accounts_by_username() {
        let mock = MockAmsClient::new()
            .with_account("alice", "org1")
            .await
            .with_account("bob", "org2")
            .await;

        let params = ListParams::new().search(Search::is("username", "bob"));
        let accounts = mock.list_accounts(&params).await.unwrap();

        assert_eq!(accounts.items.len(), 1);
        assert_eq!(accounts.items[0].organization_id(), Some("org2"));
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed() {
        let mock = MockAmsClient::new()
            .with_error("list_sku_rules", ApiError::Forbidden)
            .await;

        assert!(mock.list_sku_rules(&ListParams::all()).await.is_err());
        assert!(mock.list_sku_rules(&ListParams::all()).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_create_updates_cost() {
        let mock = MockAmsClient::new().with_sku_rule("addon-foo", "Q1").await;

        let request = ResourceQuotaRequest {
            sku: "addon-foo".to_string(),
            sku_count: 4,
            quota_type: "Manual".to_string(),
        };
        mock.create_resource_quota("org1", &request).await.unwrap();

        let costs = mock.list_quota_cost("org1", &ListParams::all()).await.unwrap();
        assert_eq!(costs.items.len(), 1);
        assert_eq!(costs.items[0].quota_id, "Q1");
        assert_eq!(costs.items[0].allowed, 4);
    }
}
