//! Create package command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the new package
    pub name: String,
}

pub async fn run(args: CreateArgs) -> Result<()> {
    let session = session::open()?;

    let response = session
        .add_package(&json!({ "package_name": args.name }))
        .await
        .context("Failed to create package")?;

    output::response(&response)
}
