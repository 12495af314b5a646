use anyhow::Context;
use sg_pages::ConsentPage;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ConsentArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `skygate consent`.
pub async fn handle(
    args: &ConsentArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut page = ConsentPage::new();
    page.set_business_id(args.business_id.as_str());
    if let Some(text) = template_text(args)? {
        page.set_template_text(text);
    }

    let spinner = Progress::spinner("Saving consent template...");
    page.save_template(&ctx.client).await?;
    spinner.finish_clear();

    output(&page.view(), &page.snapshot(), flags.format)?;
    super::finish(page.phase())
}

/// Template text from `--template` or `--template-file`, `None` for the
/// page's example template.
fn template_text(args: &ConsentArgs) -> anyhow::Result<Option<String>> {
    if let Some(text) = &args.template {
        return Ok(Some(text.clone()));
    }
    args.template_file
        .as_ref()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read template file {}", path.display()))
        })
        .transpose()
}
