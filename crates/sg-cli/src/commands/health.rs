use anyhow::Context;
use sg_core::enums::Tone;
use sg_pages::{Element, View};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `skygate health`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Checking backend...");
    let health = ctx
        .client
        .get_health()
        .await
        .with_context(|| format!("backend at {} is unreachable", ctx.client.base_url()));
    spinner.finish_clear();
    let health = health?;

    let tone = if health.is_healthy() {
        Tone::Success
    } else {
        Tone::Danger
    };
    let view = View {
        elements: vec![Element::text(&health.status, tone)],
    };
    output(&view, &health, flags.format)?;

    if !health.is_healthy() {
        return Err(super::PageFailed.into());
    }
    Ok(())
}
