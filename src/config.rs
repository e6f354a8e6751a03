use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub horizon: HorizonConfig,
}

/// Horizon connection settings used to resolve account state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HorizonConfig {
    pub url: String,
    pub timeout_seconds: u64,
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
    pub concurrent_requests: usize,
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            url: "https://horizon.stellar.org".to_string(),
            timeout_seconds: 30,
            max_retries: 5,
            initial_backoff_ms: 100,
            backoff_multiplier: 2.0,
            max_backoff_seconds: 10,
            concurrent_requests: 4,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = HorizonConfig::default();
        let config = Config::builder()
            .set_default("horizon.url", defaults.url)?
            .set_default("horizon.timeout_seconds", defaults.timeout_seconds)?
            .set_default("horizon.max_retries", defaults.max_retries as i64)?
            .set_default("horizon.initial_backoff_ms", defaults.initial_backoff_ms)?
            .set_default("horizon.backoff_multiplier", defaults.backoff_multiplier)?
            .set_default("horizon.max_backoff_seconds", defaults.max_backoff_seconds)?
            .set_default(
                "horizon.concurrent_requests",
                defaults.concurrent_requests as i64,
            )?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // SIGNER_INSPECTOR_HORIZON__TIMEOUT_SECONDS etc.
            .add_source(
                config::Environment::with_prefix("SIGNER_INSPECTOR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // HORIZON_URL is the conventional name used by Stellar tooling
        if let Ok(url) = env::var("HORIZON_URL") {
            app_config.horizon.url = url;
        }

        if app_config.horizon.concurrent_requests == 0 {
            return Err(ConfigError::Message(
                "horizon.concurrent_requests must be at least 1".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Result<Self, ConfigError> {
        // Try to load config for defaults, but don't fail if not found
        match Self::load() {
            Ok(config) => Ok(config),
            Err(_) => Ok(Self {
                horizon: HorizonConfig::default(),
            }),
        }
    }
}
