//! # lcms-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LCMS_*` prefix, `__` as separator)
//! 2. Project-level `lcms.toml` in the working directory
//! 3. User-level `~/.config/lcms/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LCMS_DATABASE__PATH` -> `database.path`,
//! `LCMS_CURATION__NULL_VALUE` -> `curation.null_value`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lcms_config::LcmsConfig;
//!
//! let config = LcmsConfig::load_with_dotenv().expect("config");
//! if config.database.is_remote() {
//!     println!("remote store: {}", config.database.url);
//! }
//! ```

mod curation;
mod database;
mod error;

pub use curation::CurationConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = "lcms.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LcmsConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub curation: CurationConfig,
}

impl LcmsConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.curation.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("LCMS_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lcms").join("config.toml"))
    }
}
