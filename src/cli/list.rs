//! `list` command handler

use std::io::{self, Write};

use crate::cli::{CommandContext, ListArgs, OutputFormat, require_username};
use crate::client::AmsApi;
use crate::error::Result;
use crate::output::format_usage_report;
use crate::quota::{load_catalog, quota_cost_rows, resolve_org_id, usage_for_skus};

/// Run the `list` command.
///
/// Without SKU arguments every quota group of the organization is reported;
/// otherwise one row per requested SKU.
pub async fn run(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    execute(&ctx.client, args, ctx.format, &mut io::stdout()).await
}

async fn execute<C: AmsApi + ?Sized, W: Write>(
    client: &C,
    args: &ListArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let username = require_username(args.username.as_deref())?;
    let org_id = resolve_org_id(client, username).await?;
    let catalog = load_catalog(client).await?;

    let rows = if args.skus.is_empty() {
        quota_cost_rows(client, &org_id, &catalog).await?
    } else {
        let skus = catalog.get_all(args.skus.as_slice())?;
        usage_for_skus(client, &org_id, skus).await?
    };

    writeln!(out, "{}", format_usage_report(&org_id, rows, format)?)?;
    Ok(())
}
