//! Gateway credentials and endpoint configuration

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Sandbox gateway, used when `KESSPAY_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://devwebpayment.kesspay.io";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    MissingVar(&'static str),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the client needs to talk to the gateway.
///
/// The secret key is only ever folded into signatures; it is never sent.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Gateway base URL, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// HTTP basic-auth username.
    pub username: String,

    /// HTTP basic-auth password.
    pub password: String,

    pub client_id: String,

    pub client_secret: String,

    /// API secret key shared out-of-band, used only for signing.
    pub secret_key: String,

    /// Seller code assigned by the gateway.
    pub seller_code: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl GatewayConfig {
    /// Load configuration from `KESSPAY_*` environment variables.
    ///
    /// `KESSPAY_API_URL` is optional and defaults to the sandbox gateway;
    /// all credential variables are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: std::env::var("KESSPAY_API_URL").unwrap_or_else(|_| default_api_url()),
            username: require_var("KESSPAY_USERNAME")?,
            password: require_var("KESSPAY_PASSWORD")?,
            client_id: require_var("KESSPAY_CLIENT_ID")?,
            client_secret: require_var("KESSPAY_CLIENT_SECRET")?,
            secret_key: require_var("KESSPAY_SECRET_KEY")?,
            seller_code: require_var("KESSPAY_SELLER_CODE")?,
        })
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "api_url": "https://webpayment.kesspay.io",
            "username": "merchant",
            "password": "hunter2",
            "client_id": "cid",
            "client_secret": "csecret",
            "secret_key": "testkey",
            "seller_code": "958689692346"
        }"#
    }

    #[test]
    fn test_parse_full_config() {
        let config: GatewayConfig = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(config.api_url, "https://webpayment.kesspay.io");
        assert_eq!(config.seller_code, "958689692346");
    }

    #[test]
    fn test_api_url_defaults_to_sandbox() {
        let json = r#"{
            "username": "merchant",
            "password": "hunter2",
            "client_id": "cid",
            "client_secret": "csecret",
            "secret_key": "testkey",
            "seller_code": "958689692346"
        }"#;
        let config: GatewayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_missing_credential_rejected() {
        let json = r#"{"username": "merchant"}"#;
        let result: Result<GatewayConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let temp = std::env::temp_dir().join("kesspay_config_test.json");
        std::fs::write(&temp, sample_json()).unwrap();

        let config = GatewayConfig::from_file(&temp).unwrap();
        assert_eq!(config.username, "merchant");

        std::fs::remove_file(&temp).ok();
    }

    #[test]
    fn test_from_file_missing() {
        let result = GatewayConfig::from_file("/nonexistent/kesspay.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
