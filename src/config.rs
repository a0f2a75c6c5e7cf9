//! Configuration for the pauta API client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default base URL (local backend)
const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Fixed request timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client configuration
///
/// Immutable once a [`PautaClient`](crate::PautaClient) is built from it. The
/// timeout is global; there is no per-call override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for the backend REST API
    pub base_url: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads `PAUTA_API_URL` for the base URL; when unset or empty the client
    /// targets `http://localhost:8000/api`.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("PAUTA_API_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config(
                "base_url must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::default()
            .with_base_url("https://pauta.example.org/api")
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.base_url, "https://pauta.example.org/api");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_validation() {
        let valid = ClientConfig::default();
        assert!(valid.validate().is_ok());

        let empty = ClientConfig::default().with_base_url("");
        assert!(empty.validate().is_err());

        let bad_scheme = ClientConfig::default().with_base_url("ftp://example.org");
        assert!(bad_scheme.validate().is_err());

        let zero_timeout = ClientConfig::default().with_timeout(Duration::ZERO);
        assert!(zero_timeout.validate().is_err());
    }
}
