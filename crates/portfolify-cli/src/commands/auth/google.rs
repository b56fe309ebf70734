//! Google login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use portfolify_client::SessionStore;

use crate::context;
use crate::input;
use crate::output;

#[derive(Args, Debug)]
pub struct GoogleArgs {
    /// File containing the Google ID token (use - for stdin)
    #[arg(long, default_value = "-")]
    pub token: String,
}

pub async fn run(args: GoogleArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    let session = SessionStore::new(&client);

    let id_token = input::read_text(&args.token)?;
    let id_token = id_token.trim();

    eprintln!("{}", "Logging in with Google...".dimmed());

    let user = session
        .login_with_google(id_token)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("Email", &user.email);
    output::field("Name", &user.full_name);

    Ok(())
}
