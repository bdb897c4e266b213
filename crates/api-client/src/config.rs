//! Configuration for the EduDex API client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiResult, Error};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.edudex.nl/data/v1/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the bearer token.
pub const TOKEN_ENV_VAR: &str = "EDUDEX_API_TOKEN";

/// Client configuration.
///
/// Resolution priority for each setting is explicit value > environment
/// variable > built-in default; see [`ClientConfig::from_env`]. The
/// configuration is fixed once a client is constructed from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Bearer token for authentication.
    ///
    /// Left unset here, the client constructor falls back to the
    /// `EDUDEX_API_TOKEN` environment variable and fails fast when that
    /// is missing too.
    pub bearer_token: Option<String>,
    /// Base URL all request paths resolve against.
    pub base_url: String,
    /// Request timeout.
    #[serde(with = "timeout_secs")]
    pub timeout: Duration,
}

mod timeout_secs {
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
            bearer_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `EDUDEX_API_TOKEN`: bearer token
    /// - `EDUDEX_API_URL`: base URL (optional)
    /// - `EDUDEX_TIMEOUT_SECS`: request timeout in seconds (optional)
    #[must_use]
    pub fn from_env() -> Self {
        let bearer_token = env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty());

        let base_url =
            env::var("EDUDEX_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = env::var("EDUDEX_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map_or(
                Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                Duration::from_secs,
            );

        Self {
            bearer_token,
            base_url,
            timeout,
        }
    }

    /// Builder-style method to set the bearer token.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Builder-style method to set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an empty or non-HTTP base URL, or a
    /// zero timeout. Token presence is checked by the client
    /// constructor, not here.
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(Error::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(Error::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.bearer_token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_pattern() {
        let config = ClientConfig::default()
            .with_bearer_token("secret")
            .with_base_url("https://staging.edudex.nl/data/v1/")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.bearer_token.as_deref(), Some("secret"));
        assert_eq!(config.base_url, "https://staging.edudex.nl/data/v1/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn validation_rejects_bad_urls() {
        let empty = ClientConfig::default().with_base_url("");
        assert!(empty.validate().is_err());

        let scheme = ClientConfig::default().with_base_url("ftp://api.edudex.nl");
        assert!(scheme.validate().is_err());
    }

    #[test]
    fn validation_rejects_zero_timeout() {
        let config = ClientConfig::default().with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
