use anyhow::Context;
use sg_config::SkygateConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, the layered config, and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SkygateConfig> {
    load_dotenv()?;

    let config = SkygateConfig::load().context("failed to load skygate configuration")?;
    apply_overrides(config, flags)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

fn apply_overrides(mut config: SkygateConfig, flags: &GlobalFlags) -> anyhow::Result<SkygateConfig> {
    if let Some(api_url) = &flags.api_url {
        config.api.base_url.clone_from(api_url);
        config
            .validate()
            .with_context(|| format!("invalid --api-url '{api_url}'"))?;
    }
    Ok(config)
}
