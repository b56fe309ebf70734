//! Update portfolio command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use portfolify_core::{Id, PortfolioPatch};

use crate::context;
use crate::input;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Portfolio ID
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// JSON file with a new site config (use - for stdin)
    #[arg(long)]
    pub config: Option<String>,

    /// New subdomain
    #[arg(long)]
    pub subdomain: Option<String>,

    /// Publish the site
    #[arg(long, conflicts_with = "unpublish")]
    pub publish: bool,

    /// Unpublish the site
    #[arg(long)]
    pub unpublish: bool,
}

pub async fn run(args: UpdateArgs, api_url: &str) -> Result<()> {
    let is_published = if args.publish {
        Some(true)
    } else if args.unpublish {
        Some(false)
    } else {
        None
    };

    if args.title.is_none()
        && args.config.is_none()
        && args.subdomain.is_none()
        && is_published.is_none()
    {
        bail!("Nothing to update. Pass --title, --config, --subdomain, --publish or --unpublish.");
    }

    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let id = Id::new(&args.id).context("Invalid portfolio ID")?;

    let config = match &args.config {
        Some(source) => Some(input::read_json(source)?),
        None => None,
    };

    let patch = PortfolioPatch {
        title: args.title,
        config,
        subdomain: args.subdomain,
        is_published,
    };

    let portfolio = client
        .portfolios()
        .update(&id, &patch)
        .await
        .context("Failed to update portfolio")?;

    output::success(&format!("Updated portfolio: {}", portfolio.title));

    Ok(())
}
