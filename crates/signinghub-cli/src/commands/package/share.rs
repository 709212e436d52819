//! Share command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use signinghub::PackageId;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ShareArgs {
    /// Package to send out
    pub package: PackageId,
}

pub async fn run(args: ShareArgs) -> Result<()> {
    let session = session::open()?;

    eprintln!("{}", "Sharing package...".dimmed());

    session
        .share_document_package(args.package)
        .await
        .context("Failed to share package")?;

    output::success(&format!("Package {} shared", args.package));
    Ok(())
}
