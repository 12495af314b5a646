use sg_config::{DEFAULT_BASE_URL, SkygateConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &SkygateConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SkygateConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.api.base_url == DEFAULT_BASE_URL && has_single_underscore(&env_keys, "SKYGATE_API") {
        warnings.push(
            "API config appears default while SKYGATE_API_* env vars exist. Use double underscores (example: SKYGATE_API__BASE_URL)."
                .to_string(),
        );
    }

    if has_single_underscore(&env_keys, "SKYGATE_CHECKLIST") {
        warnings.push(
            "SKYGATE_CHECKLIST_* env vars are ignored. Use double underscores (example: SKYGATE_CHECKLIST__REFETCH)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
