use anyhow::Context;
use sg_client::ApiClient;
use sg_config::SkygateConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: SkygateConfig,
    pub client: ApiClient,
}

impl AppContext {
    pub fn init(config: SkygateConfig) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config.api).context("failed to build HTTP client")?;
        tracing::debug!(base_url = client.base_url(), "api client ready");
        Ok(Self { config, client })
    }
}
