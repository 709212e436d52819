//! Upload document command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use signinghub::PackageId;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Package to upload into
    pub package: PackageId,

    /// File to upload
    pub file: PathBuf,

    /// File name to report to the server (defaults to the file's name)
    #[arg(long)]
    pub filename: Option<String>,

    /// Source application reported to the server
    #[arg(long, default_value = "API")]
    pub source: String,

    /// Upload the file as-is instead of converting it to PDF
    #[arg(long)]
    pub no_convert: bool,
}

pub async fn run(args: UploadArgs) -> Result<()> {
    let session = session::open()?;

    let filename = match args.filename {
        Some(name) => name,
        None => args
            .file
            .file_name()
            .and_then(|n| n.to_str())
            .context("Cannot derive a file name; pass --filename")?
            .to_string(),
    };
    let data = fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    eprintln!("{}", format!("Uploading {} bytes...", data.len()).dimmed());

    let response = session
        .upload_document(
            args.package,
            data.into(),
            &filename,
            &args.source,
            !args.no_convert,
        )
        .await
        .context("Failed to upload document")?;

    output::response(&response)
}
