pub mod audit;
pub mod checklist;
pub mod consent;
pub mod dispatch;
pub mod health;
pub mod open;
pub mod schema;

use sg_pages::Phase;

/// A one-shot command left its page in the failed phase. The failure has
/// already been printed, so `main` only sets the exit status.
#[derive(Debug)]
pub struct PageFailed;

impl std::fmt::Display for PageFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("page ended in a failed state")
    }
}

impl std::error::Error for PageFailed {}

/// Map a page's final phase to the command result.
pub fn finish(phase: Phase) -> anyhow::Result<()> {
    if phase == Phase::Failed {
        return Err(PageFailed.into());
    }
    Ok(())
}
