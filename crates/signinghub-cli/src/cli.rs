//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use signinghub::ClientCredentials;

use crate::commands::auth::AuthCommand;
use crate::commands::package::PackageCommand;

/// SigningHub CLI tool for API exploration.
#[derive(Parser, Debug)]
#[command(name = "signinghub")]
#[command(author, version = env!("SIGNINGHUB_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authentication and session management
    Auth(AuthCommand),

    /// Package, document and workflow operations
    Package(PackageCommand),
}

/// API client identity, shared by the commands that authenticate.
#[derive(Args, Debug)]
pub struct ClientArgs {
    /// API client id
    #[arg(long, env = "SIGNINGHUB_CLIENT_ID")]
    pub client_id: String,

    /// API client secret
    #[arg(long, env = "SIGNINGHUB_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,
}

impl ClientArgs {
    pub fn credentials(&self) -> ClientCredentials {
        ClientCredentials::new(&self.client_id, &self.client_secret)
    }
}
