//! Command execution context
//!
//! Resolves connection settings once and hands every command the same
//! client and output preference.

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::AmsClient;
use crate::config::Settings;
use crate::error::Result;

/// Context for command execution containing the API client and output format.
pub struct CommandContext {
    /// Client bound to the selected gateway and token
    pub client: AmsClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Build the context from global options.
    ///
    /// # Errors
    /// Returns error if the gateway URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let settings = Settings::from_options(opts)?;
        let client = AmsClient::new(&settings)?;
        debug!("Using gateway {}", client.base_url());

        Ok(Self {
            client,
            format: opts.format,
        })
    }
}
