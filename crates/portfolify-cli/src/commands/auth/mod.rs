//! Auth subcommand implementations.

mod google;
mod login;
mod logout;
mod signup;
mod update_profile;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Create a new account
    Signup(signup::SignupArgs),

    /// Log in with email and password
    Login(login::LoginArgs),

    /// Log in with a Google ID token
    Google(google::GoogleArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Update the current user's profile
    UpdateProfile(update_profile::UpdateProfileArgs),

    /// Discard the stored session
    Logout(logout::LogoutArgs),
}

pub async fn handle(cmd: AuthCommand, api_url: &str) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Signup(args) => signup::run(args, api_url).await,
        AuthSubcommand::Login(args) => login::run(args, api_url).await,
        AuthSubcommand::Google(args) => google::run(args, api_url).await,
        AuthSubcommand::Whoami(args) => whoami::run(args, api_url).await,
        AuthSubcommand::UpdateProfile(args) => update_profile::run(args, api_url).await,
        AuthSubcommand::Logout(args) => logout::run(args, api_url).await,
    }
}
