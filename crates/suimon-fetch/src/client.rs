//! HTTP client for the river portal.

use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::{decode_page, url};

/// Configuration for the portal client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the CGI programs.
    pub base_url: String,
    /// Host serving prepared data files.
    pub data_host: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: url::BASE_URL.to_string(),
            data_host: url::DATA_HOST.to_string(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("suimon/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Points both the CGI base and the data host at another server.
    ///
    /// `host` is the scheme and authority, e.g. `http://127.0.0.1:8080`.
    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        let host = host.trim_end_matches('/');
        self.base_url = format!("{host}/cgi-bin");
        self.data_host = host.to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Errors that can occur while talking to the portal.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server returned {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },
}

/// HTTP client for the portal's pages and data files.
#[derive(Debug, Clone)]
pub struct PortalClient {
    client: Client,
    config: ClientConfig,
}

impl PortalClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches a page and decodes it from EUC-JP.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn get_page(&self, url: &str) -> Result<String, FetchError> {
        let body = self.get_bytes(url).await?;
        Ok(decode_page(&body))
    }

    /// Fetches a resource as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn get_bytes(&self, url: &str) -> Result<Bytes, FetchError> {
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://www1.river.go.jp/cgi-bin");
        assert_eq!(config.data_host, "http://www1.river.go.jp");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("suimon/"));
    }

    #[test]
    fn test_with_host() {
        let config = ClientConfig::default().with_host("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/cgi-bin");
        assert_eq!(config.data_host, "http://127.0.0.1:8080");
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = PortalClient::with_defaults();
        assert!(client.is_ok());
    }
}
