//! Download document command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use signinghub::{DocumentId, PackageId};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Package holding the document
    pub package: PackageId,

    /// Document to download
    pub document: DocumentId,

    /// Where to write the document
    #[arg(short, long)]
    pub output: PathBuf,
}

pub async fn run(args: DownloadArgs) -> Result<()> {
    let session = session::open()?;

    let body = session
        .download_document(args.package, args.document)
        .await
        .context("Failed to download document")?
        .into_bytes()
        .context("Server did not return a document")?;

    fs::write(&args.output, &body)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    output::success(&format!(
        "Saved {} bytes to {}",
        body.len(),
        args.output.display()
    ));
    Ok(())
}
