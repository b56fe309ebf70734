//! Create portfolio command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context;
use crate::input;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Portfolio title
    pub title: String,

    /// JSON file with the site config (use - for stdin)
    #[arg(long)]
    pub config: Option<String>,

    /// Subdomain to serve the site under
    #[arg(long)]
    pub subdomain: Option<String>,
}

pub async fn run(args: CreateArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let config = match &args.config {
        Some(source) => input::read_json(source)?,
        None => serde_json::json!({}),
    };

    let portfolio = client
        .portfolios()
        .create(&args.title, &config, args.subdomain.as_deref())
        .await
        .context("Failed to create portfolio")?;

    println!("{}", portfolio.id);
    output::success(&format!("Created portfolio: {}", portfolio.title));

    Ok(())
}
