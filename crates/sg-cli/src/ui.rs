use std::io::IsTerminal;
use std::sync::OnceLock;

use sg_config::GeneralConfig;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiPrefs {
    pub color: bool,
    pub progress: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags, general: &GeneralConfig) {
    let prefs = resolve(
        flags,
        general,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    );
    let _ = UI_PREFS.set(prefs);
}

fn resolve(flags: &GlobalFlags, general: &GeneralConfig, is_tty: bool, no_color_env: bool) -> UiPrefs {
    let text = flags.format == OutputFormat::Text;
    UiPrefs {
        color: text && is_tty && general.color && !flags.no_color && !no_color_env,
        progress: text && is_tty && !flags.quiet,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        color: false,
        progress: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, no_color: bool, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            api_url: None,
            quiet,
            verbose: false,
            no_color,
        }
    }

    #[test]
    fn color_needs_text_on_a_tty() {
        let general = GeneralConfig::default();
        assert!(resolve(&flags(OutputFormat::Text, false, false), &general, true, false).color);
        assert!(!resolve(&flags(OutputFormat::Text, false, false), &general, false, false).color);
        assert!(!resolve(&flags(OutputFormat::Json, false, false), &general, true, false).color);
    }

    #[test]
    fn any_opt_out_disables_color() {
        let general = GeneralConfig::default();
        assert!(!resolve(&flags(OutputFormat::Text, true, false), &general, true, false).color);
        assert!(!resolve(&flags(OutputFormat::Text, false, false), &general, true, true).color);
        assert!(
            !resolve(
                &flags(OutputFormat::Text, false, false),
                &GeneralConfig { color: false },
                true,
                false
            )
            .color
        );
    }

    #[test]
    fn quiet_hides_progress() {
        let general = GeneralConfig::default();
        assert!(!resolve(&flags(OutputFormat::Text, false, true), &general, true, false).progress);
    }
}
