//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_color() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Allow ANSI colors in text output. Colors are still disabled when
    /// stdout is not a terminal or `NO_COLOR` is set.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}
