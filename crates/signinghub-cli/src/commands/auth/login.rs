//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use signinghub::{BaseUrl, Grant, Session};

use crate::cli::ClientArgs;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// SigningHub API base URL
    #[arg(long, env = "SIGNINGHUB_URL")]
    pub url: String,

    #[command(flatten)]
    pub client: ClientArgs,

    /// Log in as this user (password grant) instead of as the client
    #[arg(long, requires = "password")]
    pub username: Option<String>,

    /// Password for --username
    #[arg(long, requires = "username", env = "SIGNINGHUB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Scope the session to this user's e-mail address
    #[arg(long)]
    pub scope: Option<String>,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let base_url = BaseUrl::new(&args.url).context("Invalid base URL")?;
    let grant = match (args.username, args.password) {
        (Some(username), Some(password)) => Grant::password(username, password),
        _ => Grant::ClientCredentials,
    };

    eprintln!("{}", "Logging in...".dimmed());

    let mut session = Session::new(base_url).context("Failed to create HTTP client")?;
    session
        .authenticate(&args.client.credentials(), grant, args.scope.as_deref())
        .await
        .context("Failed to login")?;

    // Save session
    storage::save_session(&session).context("Failed to save session")?;

    // Print success
    output::success("Logged in successfully");
    println!();
    output::field("URL", session.base_url().as_str());
    if let Some(expires_at) = session.token_expires_at() {
        output::field("Token expires", &expires_at.to_rfc3339());
    }

    Ok(())
}
