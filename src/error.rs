//! Error types for the myquota CLI

use thiserror::Error;

/// Result type alias for myquota operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for single API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Top-level error type for the application.
///
/// `main` is the only place that turns these into exit codes: usage errors and
/// fatal errors exit non-zero, organization resolution failures exit zero.
#[derive(Debug, Error)]
pub enum Error {
    #[error("[E] {0}")]
    Api(#[from] ApiError),

    #[error("[E] {0}")]
    Config(#[from] ConfigError),

    #[error("[E] {0}")]
    Io(#[from] std::io::Error),

    #[error("[E] JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing mandatory argument
    #[error("[E] {0}")]
    Usage(String),

    /// The username could not be mapped to exactly one organization
    #[error("[E] {0}")]
    OrgResolution(String),

    #[error("[E] The input sku '{0}' is invalid")]
    InvalidSku(String),

    #[error("[E] No valid skus in the catalog")]
    EmptyCatalog,

    #[error("[E] Failed to list skus: {0}")]
    CatalogLoad(#[source] ApiError),

    #[error("[E] Failed to list resource quota of the organization {org_id}: {source}")]
    QuotaLookup {
        org_id: String,
        #[source]
        source: ApiError,
    },

    #[error("[E] Failed to get the quota cost of the organization {org_id}: {source}")]
    QuotaCost {
        org_id: String,
        #[source]
        source: ApiError,
    },

    #[error(
        "[E] Failed to assign {count} {sku}_{qtype} resource quota to the organization {org_id}: {source}"
    )]
    AssignFailed {
        org_id: String,
        sku: String,
        qtype: String,
        count: i64,
        #[source]
        source: ApiError,
    },

    #[error(
        "[E] Failed to remove the {sku}_{qtype} resource quota({record_id}) from the organization {org_id}: {source}"
    )]
    RemoveFailed {
        org_id: String,
        sku: String,
        qtype: String,
        record_id: String,
        #[source]
        source: ApiError,
    },

    #[error(
        "[W] The resource quota is in use. If you truly want to remove the quota, use the option '--force'"
    )]
    QuotaInUse,
}

impl Error {
    /// Whether this error ends the process with a zero exit status.
    ///
    /// Organization resolution failures are reported but not treated as crashes.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::OrgResolution(_))
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the SUPER_ADMIN_USER_TOKEN environment variable.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API URL '{0}'")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}
