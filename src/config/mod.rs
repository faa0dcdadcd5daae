//! Runtime settings for myquota
//!
//! There is no config file. Everything comes from CLI flags and their
//! environment variable fallbacks (`OCM_ENV`, `SUPER_ADMIN_USER_TOKEN`,
//! `OCM_Debug_Mode`), collected here into one [`Settings`] value that is used
//! to build the API client once per process.

use std::fmt;

use crate::cli::args::GlobalOptions;
use crate::error::{ConfigError, Result};

const PRODUCTION_URL: &str = "https://api.openshift.com";
const STAGING_URL: &str = "https://api.stage.openshift.com";
const INTEGRATION_URL: &str = "https://api.integration.openshift.com";

/// Deployment environment of the accounts management service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Staging,
    Integration,
}

impl Environment {
    /// Parse the `OCM_ENV` value.
    ///
    /// Unknown or missing values fall back to staging.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("production") => Environment::Production,
            Some("integration") => Environment::Integration,
            _ => Environment::Staging,
        }
    }

    /// Gateway URL for this environment
    pub fn gateway_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Staging => STAGING_URL,
            Environment::Integration => INTEGRATION_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Production => "production",
            Environment::Staging => "staging",
            Environment::Integration => "integration",
        };
        f.write_str(name)
    }
}

/// Resolved connection settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Gateway base URL without trailing slash
    pub base_url: String,

    /// Bearer token for the privileged connection
    pub token: Option<String>,

    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl Settings {
    /// Resolve settings from global CLI options.
    ///
    /// An explicit `--api-url` wins over the environment selection.
    pub fn from_options(opts: &GlobalOptions) -> Result<Self> {
        let base_url = match opts.api_url_ref() {
            Some(url) => normalize_url(url)?,
            None => {
                let env = Environment::from_name(opts.ocm_env_ref());
                log::debug!("Using {} environment", env);
                env.gateway_url().to_string()
            }
        };

        let token = opts
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Ok(Self {
            base_url,
            token,
            insecure: opts.insecure,
        })
    }
}

fn normalize_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl(url.to_string()).into());
    }
    Ok(trimmed.to_string())
}
