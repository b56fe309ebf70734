//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use portfolify_client::SessionStore;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    let session = SessionStore::new(&client);

    eprintln!("{}", "Logging in...".dimmed());

    let user = session
        .login(&args.email, &args.password)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("Email", &user.email);
    output::field("Name", &user.full_name);

    Ok(())
}
