use sg_config::RefetchPolicy;
use sg_pages::ChecklistPage;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChecklistCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `skygate checklist`.
pub async fn handle(
    action: &ChecklistCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // One-shot commands load explicitly, never per keystroke.
    let mut page = ChecklistPage::new(RefetchPolicy::OnConfirm);

    match action {
        ChecklistCommands::List { business_id } => {
            let _ = page.set_business_id(business_id.as_str());
            let spinner = Progress::spinner("Loading tasks...");
            page.fetch_tasks(&ctx.client).await;
            spinner.finish_clear();
        }
        ChecklistCommands::Add { business_id, task } => {
            let _ = page.set_business_id(business_id.as_str());
            page.set_task(task.as_str());
            let spinner = Progress::spinner("Adding task...");
            page.add_task(&ctx.client).await?;
            spinner.finish_clear();
        }
    }

    output(&page.view(), &page.snapshot(), flags.format)?;
    super::finish(page.phase())
}
