//! Configuration for the HTTP client.

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Default timeout for HTTP requests: 30 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for establishing a connection: 10 seconds.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL request paths are appended to.
    pub base_url: Url,
    /// Total timeout for HTTP requests.
    pub timeout: Duration,
    /// Timeout for establishing a connection.
    pub connect_timeout: Duration,
    /// User-Agent header to send with requests.
    pub user_agent: String,
}

impl HttpClientConfig {
    /// Creates a configuration for the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = base_url.as_ref();
        let base_url = base_url.parse().map_err(|error| {
            Error::invalid_config(format!("Invalid base URL '{base_url}': {error}"))
        })?;

        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: Self::default_user_agent(),
        })
    }

    /// Returns the default user agent string.
    fn default_user_agent() -> String {
        format!("studia/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Creates a new configuration with the specified request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Creates a new configuration with the specified connect timeout.
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Creates a new configuration with the specified user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(Error::invalid_config("Timeout must be greater than 0"));
        }

        if self.connect_timeout.is_zero() {
            return Err(Error::invalid_config(
                "Connect timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = HttpClientConfig::new("https://api.studia.app").unwrap();

        assert_eq!(config.base_url.as_str(), "https://api.studia.app/");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert!(config.user_agent.contains("studia"));
    }

    #[test]
    fn test_config_setters() {
        let config = HttpClientConfig::new("https://api.studia.app")
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(2))
            .with_user_agent("studia-tests/1.0");

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.user_agent, "studia-tests/1.0");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpClientConfig::new("not-a-valid-url");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeouts() {
        let config = HttpClientConfig::new("https://api.studia.app")
            .unwrap()
            .with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());

        let config = HttpClientConfig::new("https://api.studia.app")
            .unwrap()
            .with_connect_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
