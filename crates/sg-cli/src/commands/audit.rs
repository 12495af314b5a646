use sg_pages::AuditPage;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuditArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `skygate audit`.
pub async fn handle(args: &AuditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut page = AuditPage::new();
    page.set_business_id(args.business_id.as_str());
    page.set_url(args.url.as_str());

    let spinner = Progress::spinner("Submitting audit...");
    page.run_audit(&ctx.client).await?;
    spinner.finish_clear();

    output(&page.view(), &page.snapshot(), flags.format)?;
    super::finish(page.phase())
}
