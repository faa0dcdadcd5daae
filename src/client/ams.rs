//! Accounts management API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{
    Account, AmsApi, ItemList, ListParams, QuotaCost, ResourceQuota, ResourceQuotaRequest,
    SkuRule,
};
use crate::config::Settings;
use crate::error::{ApiError, ApiResult, ConfigError, Result};

/// Path prefix of every accounts management endpoint
const API_PREFIX: &str = "/api/accounts_mgmt/v1";

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn accounts_path() -> String {
    format!("{}/accounts", API_PREFIX)
}

fn sku_rules_path() -> String {
    format!("{}/sku_rules", API_PREFIX)
}

fn quota_cost_path(org_id: &str) -> String {
    format!("{}/organizations/{}/quota_cost", API_PREFIX, org_id)
}

fn resource_quotas_path(org_id: &str) -> String {
    format!("{}/organizations/{}/resource_quota", API_PREFIX, org_id)
}

fn resource_quota_path(org_id: &str, quota_id: &str) -> String {
    format!(
        "{}/organizations/{}/resource_quota/{}",
        API_PREFIX, org_id, quota_id
    )
}

/// Accounts management API client bound to one gateway and one bearer token
pub struct AmsClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl AmsClient {
    /// Create a new client from resolved settings.
    ///
    /// A missing token is not fatal: requests go out unauthenticated and the
    /// service answers 401.
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(settings.insecure)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        if settings.token.is_none() {
            warn!("Token shouldn't be empty");
        }

        Ok(Self {
            http,
            base_url: settings.base_url.clone(),
            token: settings.token.clone(),
        })
    }

    /// Gateway base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let builder = self.http.request(method, &url);
        match self.token {
            Some(ref token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and require the expected status.
    async fn send(&self, builder: RequestBuilder, expected: StatusCode) -> ApiResult<Response> {
        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status();
        debug!("-> {}", status);

        if status == expected {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, body))
    }

    /// Send a request and decode the JSON body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        expected: StatusCode,
    ) -> ApiResult<T> {
        let response = self.send(builder, expected).await?;

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!(
                "Failed to parse response: {}. Body was: {}",
                e, text
            ))
        })
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &ListParams,
    ) -> ApiResult<ItemList<T>> {
        let builder = self
            .request(Method::GET, path)
            .query(&params.to_query_params());
        self.send_json(builder, StatusCode::OK).await
    }
}

/// Map an unexpected status to an API error.
fn status_error(status: StatusCode, body: String) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(body),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::BadRequest(body),
        status if status.is_server_error() => ApiError::ServerError(format!("{}: {}", status, body)),
        status => ApiError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        },
    }
}

#[async_trait]
impl AmsApi for AmsClient {
    async fn list_accounts(&self, params: &ListParams) -> ApiResult<ItemList<Account>> {
        self.get_list(&accounts_path(), params).await
    }

    async fn list_sku_rules(&self, params: &ListParams) -> ApiResult<ItemList<SkuRule>> {
        self.get_list(&sku_rules_path(), params).await
    }

    async fn list_resource_quotas(
        &self,
        org_id: &str,
        params: &ListParams,
    ) -> ApiResult<ItemList<ResourceQuota>> {
        self.get_list(&resource_quotas_path(org_id), params).await
    }

    async fn create_resource_quota(
        &self,
        org_id: &str,
        request: &ResourceQuotaRequest,
    ) -> ApiResult<ResourceQuota> {
        let builder = self
            .request(Method::POST, &resource_quotas_path(org_id))
            .json(request);
        self.send_json(builder, StatusCode::CREATED).await
    }

    async fn update_resource_quota(
        &self,
        org_id: &str,
        quota_id: &str,
        request: &ResourceQuotaRequest,
    ) -> ApiResult<ResourceQuota> {
        let builder = self
            .request(Method::PATCH, &resource_quota_path(org_id, quota_id))
            .json(request);
        self.send_json(builder, StatusCode::OK).await
    }

    async fn delete_resource_quota(&self, org_id: &str, quota_id: &str) -> ApiResult<()> {
        let builder = self.request(Method::DELETE, &resource_quota_path(org_id, quota_id));
        self.send(builder, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    async fn list_quota_cost(
        &self,
        org_id: &str,
        params: &ListParams,
    ) -> ApiResult<ItemList<QuotaCost>> {
        self.get_list(&quota_cost_path(org_id), params).await
    }
}
