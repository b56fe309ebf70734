//! Enhance bullet command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context;

#[derive(Args, Debug)]
pub struct EnhanceBulletArgs {
    /// Bullet text to rewrite
    pub bullet: String,

    /// Job title the bullet belongs to
    #[arg(long)]
    pub job_title: String,

    /// Company the role was at
    #[arg(long)]
    pub company: String,
}

pub async fn run(args: EnhanceBulletArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let enhanced = client
        .resumes()
        .enhance_bullet(&args.bullet, &args.job_title, &args.company)
        .await
        .context("Failed to enhance bullet")?;

    println!("{}", enhanced.enhanced);

    Ok(())
}
