//! HTTP client for the Chef Server API.

pub mod environments;

use async_trait::async_trait;
use reqwest::{header, Method};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Performs one HTTP round trip and decodes the JSON response.
///
/// `path` is relative to the organization base URL; `body` is an already
/// serialized JSON document.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn magic_request_decoder<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static;
}

/// Serializes a request body to JSON.
pub fn json_reader<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(ClientError::from)
}

/// HTTP client for the Chef Server API.
#[derive(Debug, Clone)]
pub struct ChefClient {
    client: reqwest::Client,
    base_url: String,
    chef_version: String,
}

/// Error body returned by Chef Server on failed requests.
#[derive(Debug, serde::Deserialize)]
struct ChefErrorBody {
    error: Vec<String>,
}

impl ChefClient {
    /// Create a new client with the given base URL and default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    /// Create a client from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url,
            chef_version: config.chef_version,
        })
    }

    /// Create from environment (CHEF_SERVER_URL and friends).
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Access the environments endpoints.
    pub fn environments(&self) -> environments::EnvironmentService<'_, Self> {
        environments::EnvironmentService::new(self)
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Handle error responses.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), path, "Chef response");

        if status.is_success() {
            let bytes = response.bytes().await?;
            serde_json::from_slice(&bytes).map_err(ClientError::from)
        } else if status.as_u16() == 404 {
            tracing::warn!(path, "Chef resource not found");
            Err(ClientError::NotFound {
                resource: path.to_string(),
            })
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = error_message(&body);
            tracing::warn!(status = status.as_u16(), path, %message, "Chef request failed");
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ApiClient for ChefClient {
    async fn magic_request_decoder<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        tracing::debug!(%method, path, "Chef request");

        let mut request = self
            .client
            .request(method, self.url(path))
            .header(header::ACCEPT, "application/json")
            .header("X-Chef-Version", &self.chef_version);
        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await?;
        self.handle_response(path, response).await
    }
}

/// Extract a readable message from a Chef error body.
///
/// Chef answers failures with `{"error": ["..."]}`; anything else is
/// returned verbatim.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ChefErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error.join("; "),
        _ => body.to_string(),
    }
}
