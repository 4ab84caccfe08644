// Configuration module

mod models;

pub use models::*;

use crate::error::{GatewayError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. `AUTH_TOKEN` environment variable (highest)
    /// 2. Environment variables (prefix: INSTANTSEEK_)
    /// 3. Config file
    /// 4. Defaults (lowest)
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::with_name(&Self::default_config_path()).required(false))
            // Override with environment variables (prefix: INSTANTSEEK_)
            .add_source(Environment::with_prefix("INSTANTSEEK").separator("_"))
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        let mut config: Self = config
            .try_deserialize()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        // The bare AUTH_TOKEN variable is the documented way to arm the auth
        // gate and wins over every other source.
        if let Ok(token) = std::env::var("AUTH_TOKEN") {
            if !token.is_empty() {
                config.auth.token = Some(token);
            }
        }

        Ok(config)
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".instantseek2api")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
