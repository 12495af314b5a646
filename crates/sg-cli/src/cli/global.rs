use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// JSON page state, pretty-printed.
    Json,
    /// The rendered page.
    #[default]
    Text,
    /// JSON page state on one line.
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub api_url: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
    pub no_color: bool,
}
