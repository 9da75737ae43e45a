use std::{env, time::Duration};

use crate::error::{ClientError, Result};

/// Default Chef server URL (chef-zero's default listen address).
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8889";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `X-Chef-Version` header value.
pub const DEFAULT_CHEF_VERSION: &str = "14.0.0";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Organization base URL (default: "http://localhost:8889")
    pub base_url: String,
    /// Request timeout (default: 30s)
    pub timeout: Duration,
    /// Value sent in the `X-Chef-Version` header (default: "14.0.0")
    pub chef_version: String,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CHEF_SERVER_URL` - Organization base URL (default: "http://localhost:8889")
    /// - `CHEF_TIMEOUT_SECONDS` - Request timeout in seconds (default: 30)
    /// - `CHEF_VERSION` - `X-Chef-Version` header value (default: "14.0.0")
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("CHEF_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string()),
            timeout: env::var("CHEF_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            chef_version: env::var("CHEF_VERSION")
                .unwrap_or_else(|_| DEFAULT_CHEF_VERSION.to_string()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::Config("Base URL cannot be empty".to_string()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::Config(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::Config(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            chef_version: DEFAULT_CHEF_VERSION.to_string(),
        }
    }
}
