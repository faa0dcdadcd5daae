//! Global CLI options shared across all commands

use std::env;

use crate::cli::{Cli, OutputFormat};

/// Environment variable that turns on debug logging when set to `true`
pub const DEBUG_MODE_ENV: &str = "OCM_Debug_Mode";

/// Global CLI options passed to all command handlers.
///
/// Captures the flag/environment layer once in `main.rs`; connection settings
/// are resolved from it in `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Verbose diagnostics
    pub debug: bool,

    /// Target environment name (`OCM_ENV`)
    pub ocm_env: Option<String>,

    /// Bearer token (`SUPER_ADMIN_USER_TOKEN`)
    pub token: Option<String>,

    /// Gateway URL override
    pub api_url: Option<String>,

    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            debug: cli.debug || debug_mode(env::var(DEBUG_MODE_ENV).ok().as_deref()),
            ocm_env: cli.ocm_env.clone(),
            token: cli.token.clone(),
            api_url: cli.api_url.clone(),
            insecure: cli.insecure,
        }
    }

    /// Get environment name as `Option<&str>`.
    pub fn ocm_env_ref(&self) -> Option<&str> {
        self.ocm_env.as_deref()
    }

    /// Get API URL override as `Option<&str>`.
    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }
}

/// Only the exact value `true` enables debug mode; anything else is ignored.
fn debug_mode(value: Option<&str>) -> bool {
    value == Some("true")
}
