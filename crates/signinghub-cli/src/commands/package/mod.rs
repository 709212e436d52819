//! Package, document and workflow subcommand implementations.

mod add_users;
mod autoplace;
mod create;
mod download;
mod fields;
mod link;
mod share;
mod signature_field;
mod update_workflow;
mod upload;
mod workflow;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct PackageCommand {
    #[command(subcommand)]
    pub command: PackageSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PackageSubcommand {
    /// Create a new document package
    Create(create::CreateArgs),

    /// Upload a document into a package
    Upload(upload::UploadArgs),

    /// Download a document from a package
    Download(download::DownloadArgs),

    /// Place a signature field on a document
    SignatureField(signature_field::SignatureFieldArgs),

    /// Place fields next to a search text in a document
    Autoplace(autoplace::AutoplaceArgs),

    /// List the fields of a document
    Fields(fields::FieldsArgs),

    /// Show the workflow of a package
    Workflow(workflow::WorkflowArgs),

    /// Update the workflow settings of a package
    UpdateWorkflow(update_workflow::UpdateWorkflowArgs),

    /// Add recipients to a package's workflow
    AddUsers(add_users::AddUsersArgs),

    /// Send the package out to its recipients
    Share(share::ShareArgs),

    /// Generate an integration link for a package
    Link(link::LinkArgs),
}

pub async fn handle(cmd: PackageCommand) -> Result<()> {
    match cmd.command {
        PackageSubcommand::Create(args) => create::run(args).await,
        PackageSubcommand::Upload(args) => upload::run(args).await,
        PackageSubcommand::Download(args) => download::run(args).await,
        PackageSubcommand::SignatureField(args) => signature_field::run(args).await,
        PackageSubcommand::Autoplace(args) => autoplace::run(args).await,
        PackageSubcommand::Fields(args) => fields::run(args).await,
        PackageSubcommand::Workflow(args) => workflow::run(args).await,
        PackageSubcommand::UpdateWorkflow(args) => update_workflow::run(args).await,
        PackageSubcommand::AddUsers(args) => add_users::run(args).await,
        PackageSubcommand::Share(args) => share::run(args).await,
        PackageSubcommand::Link(args) => link::run(args).await,
    }
}
