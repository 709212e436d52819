//! Signature field command implementation.

use anyhow::{Context, Result};
use clap::Args;
use signinghub::{DocumentId, PackageId};

use crate::commands::JsonInput;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct SignatureFieldArgs {
    /// Package holding the document
    pub package: PackageId,

    /// Document to place the field on
    pub document: DocumentId,

    #[command(flatten)]
    pub body: JsonInput,
}

pub async fn run(args: SignatureFieldArgs) -> Result<()> {
    let session = session::open()?;
    let data = args.body.value()?;

    let response = session
        .add_signature_field(args.package, args.document, &data)
        .await
        .context("Failed to add signature field")?;

    output::response(&response)
}
