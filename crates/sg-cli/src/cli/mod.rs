use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `skygate` binary.
#[derive(Debug, Parser)]
#[command(
    name = "skygate",
    version,
    about = "Skygate - website compliance from the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, text, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Backend origin, overrides `api.base_url`
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Quiet mode (errors only, no spinner)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable ANSI colors in text output
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            api_url: self.api_url.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
            no_color: self.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::root_commands::WireType;
    use crate::cli::subcommands::ChecklistCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "skygate",
            "--format",
            "json",
            "--api-url",
            "http://localhost:8080",
            "--verbose",
            "health",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8080"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Health));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["skygate", "health", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn format_defaults_to_text() {
        let cli = Cli::try_parse_from(["skygate", "health"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["skygate", "--format", "table", "health"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn audit_requires_both_fields() {
        assert!(Cli::try_parse_from(["skygate", "audit", "--business-id", "b1"]).is_err());

        let cli = Cli::try_parse_from([
            "skygate",
            "audit",
            "--business-id",
            "b1",
            "--url",
            "https://example.com",
        ])
        .expect("cli should parse");
        let Commands::Audit(args) = cli.command else {
            panic!("expected audit");
        };
        assert_eq!(args.business_id, "b1");
        assert_eq!(args.url, "https://example.com");
    }

    #[test]
    fn consent_template_sources_conflict() {
        let parsed = Cli::try_parse_from([
            "skygate",
            "consent",
            "--business-id",
            "b1",
            "--template",
            "{}",
            "--template-file",
            "t.json",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn checklist_add_parses() {
        let cli = Cli::try_parse_from([
            "skygate",
            "checklist",
            "add",
            "--business-id",
            "b1",
            "--task",
            "Add cookie banner",
        ])
        .expect("cli should parse");
        let Commands::Checklist { action } = cli.command else {
            panic!("expected checklist");
        };
        assert!(matches!(
            action,
            ChecklistCommands::Add { ref task, .. } if task == "Add cookie banner"
        ));
    }

    #[test]
    fn open_defaults_to_root() {
        let cli = Cli::try_parse_from(["skygate", "open"]).expect("cli should parse");
        let Commands::Open(args) = cli.command else {
            panic!("expected open");
        };
        assert_eq!(args.path, "/");
    }

    #[test]
    fn schema_takes_kebab_case_type() {
        let cli = Cli::try_parse_from(["skygate", "schema", "checklist-task"])
            .expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.type_name, WireType::ChecklistTask);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["skygate", "--no-color", "health"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert!(flags.no_color);
        assert_eq!(flags.api_url, None);
    }
}
