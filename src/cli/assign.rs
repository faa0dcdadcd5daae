//! `assign` command handler

use std::io::{self, Write};

use crate::cli::{AssignArgs, CommandContext, OutputFormat, require_sku, require_username};
use crate::client::AmsApi;
use crate::error::Result;
use crate::output::format_usage_report;
use crate::quota::{assign_quota, get_usage, load_catalog, resolve_org_id};

/// Run the `assign` command.
pub async fn run(ctx: &CommandContext, args: &AssignArgs) -> Result<()> {
    execute(&ctx.client, args, ctx.format, &mut io::stdout()).await
}

/// Assign the quota, then write the confirmation and the usage report.
async fn execute<C: AmsApi + ?Sized, W: Write>(
    client: &C,
    args: &AssignArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let username = require_username(args.username.as_deref())?;
    let org_id = resolve_org_id(client, username).await?;
    let sku_name = require_sku(args.sku.as_deref())?;

    let catalog = load_catalog(client).await?;
    let sku = catalog
        .get(sku_name)?
        .with_type(&args.qtype)
        .with_allowed(args.number);

    assign_quota(client, &org_id, &sku).await?;

    writeln!(
        out,
        "Successfully assign {} {} resource quota to the organization {}",
        sku.allowed,
        sku.label(),
        org_id
    )?;

    let usage = get_usage(client, &org_id, sku).await?;
    writeln!(out, "{}", format_usage_report(&org_id, vec![usage.into()], format)?)?;
    Ok(())
}
