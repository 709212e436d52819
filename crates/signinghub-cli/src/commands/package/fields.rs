//! Fields command implementation.

use anyhow::{Context, Result};
use clap::Args;
use signinghub::{DocumentId, PackageId};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// Package holding the document
    pub package: PackageId,

    /// Document to inspect
    pub document: DocumentId,

    /// Only list the fields on this page
    #[arg(long)]
    pub page: Option<u32>,
}

pub async fn run(args: FieldsArgs) -> Result<()> {
    let session = session::open()?;

    let response = session
        .get_document_fields(args.package, args.document, args.page)
        .await
        .context("Failed to list document fields")?;

    output::response(&response)
}
