use anyhow::Context;
use lcms_config::{DatabaseConfig, LcmsConfig};
use lcms_db::service::IonService;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LcmsConfig> {
    let mut config = LcmsConfig::load_with_dotenv().context("failed to load lcms configuration")?;
    apply_overrides(&mut config, flags);
    crate::context::warn_misspelled_env();
    Ok(config)
}

fn apply_overrides(config: &mut LcmsConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.db {
        config.database.path.clone_from(path);
        config.database.url.clear();
        config.database.auth_token.clear();
    }
}

/// Open the configured store, remote when a URL and token are both set.
pub async fn open_store(config: &DatabaseConfig) -> anyhow::Result<IonService> {
    if config.is_remote() {
        tracing::debug!(url = %config.url, "opening remote store");
        IonService::new_remote(&config.url, &config.auth_token)
            .await
            .with_context(|| format!("failed to connect to {}", config.url))
    } else {
        tracing::debug!(path = %config.path, "opening local store");
        IonService::new_local(&config.path)
            .await
            .with_context(|| format!("failed to open database {}", config.path))
    }
}
