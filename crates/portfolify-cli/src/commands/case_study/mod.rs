//! Case study subcommand implementations.

mod create;
mod generate;
mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct CaseStudyCommand {
    #[command(subcommand)]
    pub command: CaseStudySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CaseStudySubcommand {
    /// List your case studies
    List(list::ListArgs),

    /// Create a new case study from project notes
    Create(create::CreateArgs),

    /// Generate the written case study from its inputs
    Generate(generate::GenerateArgs),
}

pub async fn handle(cmd: CaseStudyCommand, api_url: &str) -> Result<()> {
    match cmd.command {
        CaseStudySubcommand::List(args) => list::run(args, api_url).await,
        CaseStudySubcommand::Create(args) => create::run(args, api_url).await,
        CaseStudySubcommand::Generate(args) => generate::run(args, api_url).await,
    }
}
