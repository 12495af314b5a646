use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::ChecklistCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Request a website audit.
    Audit(AuditArgs),
    /// Submit a consent template.
    Consent(ConsentArgs),
    /// Compliance checklist tasks.
    Checklist {
        #[command(subcommand)]
        action: ChecklistCommands,
    },
    /// Check that the backend is up.
    Health,
    /// Open an interactive session on a page.
    Open(OpenArgs),
    /// Print the JSON Schema of a wire type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    #[arg(long)]
    pub business_id: String,
    /// Absolute URL of the site to audit.
    #[arg(long)]
    pub url: String,
}

#[derive(Clone, Debug, Args)]
pub struct ConsentArgs {
    #[arg(long)]
    pub business_id: String,
    /// Template JSON text. Defaults to the example template.
    #[arg(long, conflicts_with = "template_file")]
    pub template: Option<String>,
    /// Read the template JSON text from a file.
    #[arg(long)]
    pub template_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Path to open, e.g. `/checklist`.
    #[arg(default_value = "/")]
    pub path: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Wire type to describe.
    pub type_name: WireType,
}

/// Every request and response body with a published schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum WireType {
    AuditRequest,
    AuditResponse,
    ConsentRequest,
    ConsentResponse,
    ChecklistTask,
    TaskList,
    ChecklistAddRequest,
    ChecklistAddResponse,
    HealthResponse,
}
