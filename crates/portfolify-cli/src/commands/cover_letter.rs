//! Cover letter command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use portfolify_core::Id;

use crate::context;
use crate::input;

#[derive(Args, Debug)]
pub struct CoverLetterArgs {
    /// Resume ID to base the letter on
    pub resume_id: String,

    /// Company the letter is addressed to
    #[arg(long)]
    pub company: String,

    /// File with the job description (use - for stdin)
    #[arg(long, default_value = "-")]
    pub job_description: String,
}

pub async fn run(args: CoverLetterArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let resume_id = Id::new(&args.resume_id).context("Invalid resume ID")?;
    let job_description = input::read_text(&args.job_description)?;

    eprintln!("{}", "Generating cover letter...".dimmed());

    let letter = client
        .cover_letters()
        .generate(&resume_id, &job_description, &args.company)
        .await
        .context("Failed to generate cover letter")?;

    println!("{}", letter.cover_letter);

    Ok(())
}
