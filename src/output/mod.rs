//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::UsageDisplay;
use crate::quota::UsageRow;

pub mod json;
pub mod table;

/// Render a usage report for an organization.
///
/// Table output is preceded by a line naming the organization; JSON output
/// carries it in the metadata.
pub fn format_usage_report(
    org_id: &str,
    rows: Vec<UsageRow>,
    format: OutputFormat,
) -> Result<String> {
    let display: Vec<UsageDisplay> = rows.into_iter().map(UsageDisplay::from).collect();

    match format {
        OutputFormat::Table => Ok(format!(
            "\n>>> The quota under the organization {}: \n{}",
            org_id,
            table::format_table(&display)
        )),
        OutputFormat::Json => Ok(json::format_json(&display, Some(org_id))?),
    }
}
