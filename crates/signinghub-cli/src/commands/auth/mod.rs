//! Authentication subcommand implementations.

mod login;
mod logout;
mod refresh;
mod sso;
mod status;
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
    /// Authenticate and store the session (login)
    Login(login::LoginArgs),

    /// Authenticate with a single sign-on token
    Sso(sso::SsoArgs),

    /// Obtain a new access token with the stored refresh token
    Refresh(refresh::RefreshArgs),

    /// Show the stored session and its token expiry
    Status(status::StatusArgs),

    /// Show the profile of the authenticated user
    Whoami(whoami::WhoamiArgs),

    /// End the session on the server and forget it locally
    Logout(logout::LogoutArgs),
}

pub async fn handle(cmd: AuthCommand) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(args).await,
        AuthSubcommand::Sso(args) => sso::run(args).await,
        AuthSubcommand::Refresh(args) => refresh::run(args).await,
        AuthSubcommand::Status(args) => status::run(args),
        AuthSubcommand::Whoami(args) => whoami::run(args).await,
        AuthSubcommand::Logout(args) => logout::run(args).await,
    }
}
