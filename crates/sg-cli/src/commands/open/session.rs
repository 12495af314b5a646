//! Interactive session state: one shell, one backend, two output streams.

use std::io::Write;

use sg_client::ComplianceApi;
use sg_pages::{ActivePage, Shell};

use super::command::{Field, HELP, SessionCommand};
use crate::cli::OutputFormat;
use crate::output;

pub struct Session<'a, A, O, E> {
    shell: Shell,
    api: &'a A,
    out: O,
    err: E,
    format: OutputFormat,
    color: bool,
}

impl<'a, A, O, E> Session<'a, A, O, E>
where
    A: ComplianceApi,
    O: Write,
    E: Write,
{
    pub const fn new(
        shell: Shell,
        api: &'a A,
        out: O,
        err: E,
        format: OutputFormat,
        color: bool,
    ) -> Self {
        Self {
            shell,
            api,
            out,
            err,
            format,
            color,
        }
    }

    /// Run one command. Returns `false` once the session should end.
    pub async fn execute(&mut self, command: SessionCommand) -> anyhow::Result<bool> {
        match command {
            SessionCommand::Go(path) => {
                if self.shell.begin_navigation(&path) {
                    self.render()?;
                    self.shell.mount();
                }
                self.render()?;
            }
            SessionCommand::Set { field, value } => {
                self.write_field(field, &value, false).await?;
            }
            SessionCommand::Type { field, value } => {
                self.write_field(field, &value, true).await?;
            }
            SessionCommand::Confirm => {
                if let Some(ActivePage::Checklist(page)) = self.shell.page_mut() {
                    page.confirm(self.api).await;
                    self.render()?;
                } else {
                    self.notice("nothing to confirm on this page")?;
                }
            }
            SessionCommand::Submit => self.submit().await?,
            SessionCommand::Show => self.render()?,
            SessionCommand::Help => writeln!(self.err, "{HELP}")?,
            SessionCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    pub fn notice(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.err, "{message}")?;
        Ok(())
    }

    async fn write_field(&mut self, field: Field, value: &str, typed: bool) -> anyhow::Result<()> {
        let steps = if typed {
            keystrokes(value)
        } else {
            vec![value]
        };

        let written = match (self.shell.page_mut(), field) {
            (Some(ActivePage::Audit(page)), Field::BusinessId) => {
                steps.into_iter().for_each(|step| page.set_business_id(step));
                true
            }
            (Some(ActivePage::Audit(page)), Field::Url) => {
                steps.into_iter().for_each(|step| page.set_url(step));
                true
            }
            (Some(ActivePage::Consent(page)), Field::BusinessId) => {
                steps.into_iter().for_each(|step| page.set_business_id(step));
                true
            }
            (Some(ActivePage::Consent(page)), Field::Template) => {
                steps.into_iter().for_each(|step| page.set_template_text(step));
                true
            }
            (Some(ActivePage::Checklist(page)), Field::BusinessId) => {
                for step in steps {
                    page.change_business_id(self.api, step).await;
                }
                true
            }
            (Some(ActivePage::Checklist(page)), Field::Task) => {
                steps.into_iter().for_each(|step| page.set_task(step));
                true
            }
            _ => false,
        };

        if written {
            self.render()
        } else {
            self.notice(&format!("no {field} input on this page"))
        }
    }

    async fn submit(&mut self) -> anyhow::Result<()> {
        let submitted = match self.shell.page_mut() {
            Some(ActivePage::Audit(page)) => page.run_audit(self.api).await,
            Some(ActivePage::Consent(page)) => page.save_template(self.api).await,
            Some(ActivePage::Checklist(page)) => page.add_task(self.api).await,
            _ => return self.notice("nothing to submit on this page"),
        };

        // Form errors stop the submit before any request is sent.
        if let Err(error) = submitted {
            return self.notice(&error.to_string());
        }
        self.render()
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let rendered = output::render(
            &self.shell.view(),
            &self.shell.snapshot(),
            self.format,
            self.color,
        )?;
        if !rendered.is_empty() {
            writeln!(self.out, "{rendered}")?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub const fn shell(&self) -> &Shell {
        &self.shell
    }

    #[cfg(test)]
    pub fn into_output(self) -> (O, E) {
        (self.out, self.err)
    }
}

/// Successive contents of an input while `value` is typed into it, starting
/// from the cleared input.
fn keystrokes(value: &str) -> Vec<&str> {
    std::iter::once("")
        .chain(value.char_indices().map(|(at, ch)| &value[..at + ch.len_utf8()]))
        .collect()
}
