//! # Client Configuration
//!
//! Configuration for the API client.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Explicit values passed to `ApiConfig::new`                         │
//! │                                                                         │
//! │  2. Environment variables                                              │
//! │     SHOPFRONT_API_URL=https://api.example.com                          │
//! │     SHOPFRONT_API_TIMEOUT_SECS=30                                      │
//! │                                                                         │
//! │  3. Default values                                                     │
//! │     http://127.0.0.1:8000 (local backend), 30s timeout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The request timeout lives here on purpose: the core checkout logic
//! mandates no timeout policy of its own — that belongs to the Order
//! Sink, i.e. this HTTP layer.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::{ApiError, ApiResult};

/// Default backend for local development.
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Creates a config with an explicit base URL and the default timeout.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let config = ApiConfig {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from environment variables, falling back to
    /// the local-development defaults.
    pub fn from_env() -> ApiResult<Self> {
        let base_url =
            std::env::var("SHOPFRONT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_secs = std::env::var("SHOPFRONT_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        debug!(base_url = %base_url, timeout_secs, "Loaded API config");

        let config = ApiConfig {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ApiResult<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidConfig(format!("Invalid base URL: {}", e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ApiError::InvalidConfig(format!(
                "Base URL must be http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::InvalidConfig(
                "Timeout must be greater than zero".into(),
            ));
        }

        Ok(())
    }

    /// Joins a path onto the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ApiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_rejects_non_http_url() {
        assert!(ApiConfig::new("ftp://example.com").is_err());
        assert!(ApiConfig::new("not a url").is_err());
        assert!(ApiConfig::new("https://api.example.com").is_ok());
    }

    #[test]
    fn test_endpoint_join() {
        let config = ApiConfig::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(
            config.endpoint("/pages/chai-stall"),
            "http://127.0.0.1:8000/pages/chai-stall"
        );
    }
}
