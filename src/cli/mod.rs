//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod assign;
pub mod completions;
pub mod context;
pub mod list;
pub mod remove;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::error::{Error, Result};

/// Command line tool for managing OCM resource quotas.
#[derive(Parser, Debug)]
#[command(name = "myquota")]
#[command(version, about, long_about = None)]
#[command(after_help = "\
The default environment is staging. Set OCM_ENV=production or \
OCM_ENV=integration to target another gateway. The bearer token is read \
from SUPER_ADMIN_USER_TOKEN.")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Print rich diagnostic logs (also enabled by OCM_Debug_Mode=true)
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "MYQUOTA_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Target environment (production, staging, integration)
    #[arg(long = "ocm-env", global = true, env = "OCM_ENV", hide_env = true)]
    pub ocm_env: Option<String>,

    /// Bearer token for the accounts management API
    #[arg(
        long,
        global = true,
        env = "SUPER_ADMIN_USER_TOKEN",
        hide = true,
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Override the gateway URL selected by the environment
    #[arg(long, global = true, env = "MYQUOTA_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, global = true, env = "MYQUOTA_INSECURE", hide_env = true)]
    pub insecure: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assign the resource quota to the account's organization.
    ///
    /// Creates the resource quota if it does not exist, otherwise updates it
    /// to the given number.
    Assign(AssignArgs),

    /// Remove the resource quota from the account's organization
    Remove(RemoveArgs),

    /// List the quota cost of the account's organization.
    ///
    /// Lists every quota of the organization when no SKUs are given.
    List(ListArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `assign`
#[derive(Debug, Clone, Args)]
pub struct AssignArgs {
    /// SKU to assign
    #[arg(value_name = "SKU_ID")]
    pub sku: Option<String>,

    /// The username of the account
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// The type of the quota
    #[arg(long, short = 't', default_value = crate::quota::MANUAL_QUOTA_TYPE)]
    pub qtype: String,

    /// The allowed count to apply
    #[arg(long, short = 'n', default_value_t = 0, allow_negative_numbers = true)]
    pub number: i64,
}

/// Arguments for `remove`
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// SKU to remove
    #[arg(value_name = "SKU_ID")]
    pub sku: Option<String>,

    /// The username of the account
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// The type of the quota
    #[arg(long, short = 't', default_value = crate::quota::MANUAL_QUOTA_TYPE)]
    pub qtype: String,

    /// Remove the quota even if it is consumed
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for `list`
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// SKUs to report; all quotas of the organization when empty
    #[arg(value_name = "SKU_IDS")]
    pub skus: Vec<String>,

    /// The username of the account
    #[arg(long, short = 'u')]
    pub username: Option<String>,
}

/// Require the `--username` option.
pub fn require_username(username: Option<&str>) -> Result<&str> {
    username
        .filter(|u| !u.is_empty())
        .ok_or_else(|| Error::Usage("The option '--username' is mandatory.".to_string()))
}

/// Require the positional SKU argument.
pub fn require_sku(sku: Option<&str>) -> Result<&str> {
    sku.filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Usage("The sku id is required.".to_string()))
}
