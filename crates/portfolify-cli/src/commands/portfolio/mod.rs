//! Portfolio subcommand implementations.

mod create;
mod delete;
mod generate_bio;
mod get;
mod list;
mod update;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct PortfolioCommand {
    #[command(subcommand)]
    pub command: PortfolioSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PortfolioSubcommand {
    /// List your portfolio sites
    List(list::ListArgs),

    /// Create a new portfolio site
    Create(create::CreateArgs),

    /// Fetch a single portfolio site
    Get(get::GetArgs),

    /// Update a portfolio's title, config, subdomain or publish state
    Update(update::UpdateArgs),

    /// Delete a portfolio site
    Delete(delete::DeleteArgs),

    /// Generate a tagline and bio for a landing page
    GenerateBio(generate_bio::GenerateBioArgs),
}

pub async fn handle(cmd: PortfolioCommand, api_url: &str) -> Result<()> {
    match cmd.command {
        PortfolioSubcommand::List(args) => list::run(args, api_url).await,
        PortfolioSubcommand::Create(args) => create::run(args, api_url).await,
        PortfolioSubcommand::Get(args) => get::run(args, api_url).await,
        PortfolioSubcommand::Update(args) => update::run(args, api_url).await,
        PortfolioSubcommand::Delete(args) => delete::run(args, api_url).await,
        PortfolioSubcommand::GenerateBio(args) => generate_bio::run(args, api_url).await,
    }
}
