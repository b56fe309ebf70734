//! List case studies command implementation.

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

    let case_studies = client
        .case_studies()
        .list()
        .await
        .context("Failed to list case studies")?;

    if case_studies.is_empty() {
        eprintln!("{}", "No case studies found.".dimmed());
        return Ok(());
    }

    for case_study in &case_studies {
        if args.pretty {
            output::json_pretty(case_study)?;
        } else {
            output::json(case_study)?;
        }
    }

    Ok(())
}
