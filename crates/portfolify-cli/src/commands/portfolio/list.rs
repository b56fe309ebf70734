//! List portfolios command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let portfolios = client
        .portfolios()
        .list()
        .await
        .context("Failed to list portfolios")?;

    if portfolios.is_empty() {
        eprintln!("{}", "No portfolios found.".dimmed());
        return Ok(());
    }

    for portfolio in &portfolios {
        if args.pretty {
            output::json_pretty(portfolio)?;
        } else {
            output::json(portfolio)?;
        }
    }

    Ok(())
}
