/*
[INPUT]:  HTTP configuration (base URL, timeouts, API version, access token)
[OUTPUT]: Configured reqwest client ready for VK API method calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::{Result, VkError};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Base URL for the VK API
pub const API_BASE_URL: &str = "https://api.vk.com";

/// API version sent with every method call
pub const DEFAULT_API_VERSION: &str = "5.131";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Timeout for stats and shorten calls
    pub timeout: Duration,
    /// Timeout for the short-link validation call
    pub validation_timeout: Duration,
    pub connect_timeout: Duration,
    pub api_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            validation_timeout: Duration::from_secs(3),
            connect_timeout: Duration::from_secs(3),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

/// Credentials for API method calls
#[derive(Clone)]
pub struct Credentials {
    pub access_token: String,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"***")
            .finish()
    }
}

/// Main HTTP client for the VK API
#[derive(Debug)]
pub struct VkClient {
    http_client: Client,
    base_url: Url,
    config: ClientConfig,
    credentials: Option<Credentials>,
}

impl VkClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, API_BASE_URL)
    }

    /// Create a new client against a custom API host
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| VkError::Config(err.to_string()))?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            config,
            credentials: None,
        })
    }

    /// Set credentials for method calls
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an API method
    fn method_url(&self, method_name: &str) -> Result<Url> {
        Ok(self.base_url.join(&format!("method/{}", method_name))?)
    }

    /// Build a GET request for an API method with token and version attached
    pub(crate) fn method_request(&self, method_name: &str) -> Result<RequestBuilder> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(VkError::MissingCredentials)?;
        let url = self.method_url(method_name)?;

        Ok(self.http_client.get(url).query(&[
            ("access_token", credentials.access_token.as_str()),
            ("v", self.config.api_version.as_str()),
        ]))
    }

    /// Send a request and decode its JSON body
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        timeout: Duration,
    ) -> Result<T> {
        let response = builder
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| transport_error(err, timeout))?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(VkError::status_error(status, message));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| transport_error(err, timeout))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn transport_error(err: reqwest::Error, timeout: Duration) -> VkError {
    if err.is_timeout() {
        VkError::Timeout {
            duration: timeout.as_secs(),
        }
    } else {
        // request URLs carry the access token
        VkError::Http(err.without_url())
    }
}
