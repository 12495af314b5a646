use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Audit(args) => commands::audit::handle(&args, ctx, flags).await,
        Commands::Consent(args) => commands::consent::handle(&args, ctx, flags).await,
        Commands::Checklist { action } => commands::checklist::handle(&action, ctx, flags).await,
        Commands::Health => commands::health::handle(ctx, flags).await,
        Commands::Open(args) => commands::open::handle(&args, ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
