//! `remove` command handler

use std::io::{self, Write};

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat, RemoveArgs, require_sku, require_username};
use crate::client::AmsApi;
use crate::error::{Error, Result};
use crate::output::format_usage_report;
use crate::quota::{RemoveOutcome, load_catalog, remove_quota, resolve_org_id};

/// Run the `remove` command.
pub async fn run(ctx: &CommandContext, args: &RemoveArgs) -> Result<()> {
    execute(&ctx.client, args, ctx.format, &mut io::stdout()).await
}

async fn execute<C: AmsApi + ?Sized, W: Write>(
    client: &C,
    args: &RemoveArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let username = require_username(args.username.as_deref())?;
    let org_id = resolve_org_id(client, username).await?;
    let sku_name = require_sku(args.sku.as_deref())?;

    let catalog = load_catalog(client).await?;
    let sku = catalog.get(sku_name)?.with_type(&args.qtype);
    let label = sku.label();

    match remove_quota(client, &org_id, sku, args.force).await? {
        RemoveOutcome::NotAssigned => {
            writeln!(
                out,
                "{} The resource quota with the sku '{}' is not assigned. Give up removing.",
                "[W]".yellow(),
                label
            )?;
            Ok(())
        }
        RemoveOutcome::InUse(sku) => {
            writeln!(out, "{}", format_usage_report(&org_id, vec![sku.into()], format)?)?;
            Err(Error::QuotaInUse)
        }
        RemoveOutcome::Removed(_) => {
            writeln!(
                out,
                "Successfully remove the {} resource quota from the organization {}",
                label, org_id
            )?;
            Ok(())
        }
    }
}
