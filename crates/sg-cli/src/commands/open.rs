#[path = "open/command.rs"]
mod command;
#[path = "open/session.rs"]
mod session;

use std::io::{IsTerminal, Write};

use anyhow::Context;
use sg_pages::Shell;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OpenArgs;
use crate::context::AppContext;
use crate::ui;

use command::{ParseError, SessionCommand};
use session::Session;

/// Handle `skygate open`.
pub async fn handle(args: &OpenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = Session::new(
        Shell::new(ctx.config.checklist.refetch),
        &ctx.client,
        std::io::stdout(),
        std::io::stderr(),
        flags.format,
        ui::prefs().color,
    );
    session
        .execute(SessionCommand::Go(args.path.clone()))
        .await?;

    let interactive = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            eprint!("skygate> ");
            std::io::stderr().flush()?;
        }

        let Some(line) = lines.next_line().await.context("failed to read command")? else {
            break;
        };

        match line.parse::<SessionCommand>() {
            Ok(command) => {
                if !session.execute(command).await? {
                    break;
                }
            }
            Err(ParseError::Empty) => {}
            Err(error) => session.notice(&error.to_string())?,
        }
    }

    tracing::debug!("session closed");
    Ok(())
}
