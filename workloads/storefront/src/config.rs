//! App configuration: storefront settings plus logging.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopfront_commerce::config::StorefrontConfig;
use shopfront_observability::LogConfig;

const EMBEDDED: &str = include_str!("../storefront.toml");

/// Everything `storefront.toml` can set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub storefront: StorefrontConfig,
    pub logging: LogConfig,
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(content).context("failed to parse storefront config")?;
        config
            .storefront
            .validate()
            .context("invalid storefront config")?;
        Ok(config)
    }

    /// Load the embedded config. On failure the defaults are returned
    /// together with the error so the caller can log it once a logger exists.
    pub fn load_embedded() -> (Self, Option<anyhow::Error>) {
        match Self::from_toml_str(EMBEDDED) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}
