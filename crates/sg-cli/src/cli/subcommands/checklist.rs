use clap::Subcommand;

/// Checklist commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChecklistCommands {
    /// List a business's tasks.
    List {
        #[arg(long)]
        business_id: String,
    },
    /// Add a task, then list the updated tasks.
    Add {
        #[arg(long)]
        business_id: String,
        #[arg(long)]
        task: String,
    },
}
