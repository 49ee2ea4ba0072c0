//! Mini-app configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SAMOVAR_MENU_URL` - URL of the published CSV export of the menu sheet
//!
//! ## Optional
//! - `SAMOVAR_CURRENCY` - ISO 4217 currency code (default: RUB)
//! - `SAMOVAR_FETCH_TIMEOUT_SECS` - menu fetch timeout in seconds (default: 10)

use samovar_core::Currency;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Mini-app configuration.
#[derive(Debug, Clone)]
pub struct MiniappConfig {
    /// Published CSV export of the menu sheet.
    pub menu_url: Url,
    /// Currency every catalog price is denominated in.
    pub currency: Currency,
    /// Timeout for the menu fetch, in seconds.
    pub fetch_timeout_secs: u64,
}

impl MiniappConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the menu URL is missing or unparseable, or
    /// if an optional variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let menu_url = get_required_env("SAMOVAR_MENU_URL")?
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("SAMOVAR_MENU_URL".to_string(), e.to_string()))?;
        let currency = get_env_or_default("SAMOVAR_CURRENCY", "RUB")
            .parse::<Currency>()
            .map_err(|e| ConfigError::InvalidEnvVar("SAMOVAR_CURRENCY".to_string(), e.to_string()))?;
        let fetch_timeout_secs = get_env_or_default("SAMOVAR_FETCH_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SAMOVAR_FETCH_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            menu_url,
            currency,
            fetch_timeout_secs,
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
