//! Autoplace command implementation.

use anyhow::{Context, Result};
use clap::Args;
use signinghub::{DocumentId, PackageId};

use crate::commands::JsonInput;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct AutoplaceArgs {
    /// Package holding the document
    pub package: PackageId,

    /// Document to place the fields on
    pub document: DocumentId,

    #[command(flatten)]
    pub body: JsonInput,
}

pub async fn run(args: AutoplaceArgs) -> Result<()> {
    let session = session::open()?;
    let data = args.body.value()?;

    let response = session
        .auto_place_signature_field(args.package, args.document, &data)
        .await
        .context("Failed to auto-place fields")?;

    output::response(&response)
}
