use anyhow::Context;
use desk_config::DeskConfig;

use crate::cli::GlobalFlags;

/// Load layered config (`.env`, TOML files, `DESK_*`), then apply `--api-url`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<DeskConfig> {
    let mut config = DeskConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(url) = &flags.api_url {
        config.api.base_url.clone_from(url);
    }
    Ok(config)
}

/// The API base URL, or a hint on how to set it.
pub fn api_base_url(config: &DeskConfig) -> anyhow::Result<String> {
    if !config.api.is_configured() {
        anyhow::bail!(
            "API base URL is not configured: set DESK_API__BASE_URL, api.base_url in config.toml, or pass --api-url"
        );
    }
    Ok(config.api.normalized_base_url()?)
}
