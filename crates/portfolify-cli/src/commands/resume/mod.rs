//! Resume subcommand implementations.

mod ai_summary;
mod create;
mod delete;
mod enhance_bullet;
mod get;
mod list;
mod suggest_skills;
mod update;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ResumeCommand {
    #[command(subcommand)]
    pub command: ResumeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ResumeSubcommand {
    /// List your resumes
    List(list::ListArgs),

    /// Create a new resume
    Create(create::CreateArgs),

    /// Fetch a single resume
    Get(get::GetArgs),

    /// Update a resume's title and/or content
    Update(update::UpdateArgs),

    /// Delete a resume
    Delete(delete::DeleteArgs),

    /// Generate a professional summary for a resume
    AiSummary(ai_summary::AiSummaryArgs),

    /// Rewrite an experience bullet with stronger wording
    EnhanceBullet(enhance_bullet::EnhanceBulletArgs),

    /// Suggest skills for a target job title
    SuggestSkills(suggest_skills::SuggestSkillsArgs),
}

pub async fn handle(cmd: ResumeCommand, api_url: &str) -> Result<()> {
    match cmd.command {
        ResumeSubcommand::List(args) => list::run(args, api_url).await,
        ResumeSubcommand::Create(args) => create::run(args, api_url).await,
        ResumeSubcommand::Get(args) => get::run(args, api_url).await,
        ResumeSubcommand::Update(args) => update::run(args, api_url).await,
        ResumeSubcommand::Delete(args) => delete::run(args, api_url).await,
        ResumeSubcommand::AiSummary(args) => ai_summary::run(args, api_url).await,
        ResumeSubcommand::EnhanceBullet(args) => enhance_bullet::run(args, api_url).await,
        ResumeSubcommand::SuggestSkills(args) => suggest_skills::run(args, api_url).await,
    }
}
