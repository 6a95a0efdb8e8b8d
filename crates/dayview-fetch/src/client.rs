//! HTTP client for the chart API.

use std::time::Duration;

use async_trait::async_trait;
use dayview_types::{DayviewError, RawRow, Result, TradingWindow};
use reqwest::Client;

use crate::parse::{self, ChartResponse};
use crate::source::BarSource;
use crate::url::chart_url;

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout. Bounds the one blocking operation of a run; a
    /// timeout surfaces as an ordinary fetch failure.
    pub timeout: Duration,
    /// User agent string. The provider rejects obviously non-browser agents.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        }
    }
}

/// HTTP client for fetching one window of minute bars.
///
/// One request per invocation, no retry: a transient provider failure is
/// reported once and the run ends.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    config: ClientConfig,
}

impl FetchClient {
    /// Creates a new fetch client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| DayviewError::Fetch(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches one window of 1-minute rows for a symbol.
    ///
    /// # Errors
    ///
    /// Returns [`DayviewError::Fetch`] on network failure, timeout, a
    /// non-success status, or a malformed response body.
    pub async fn fetch(&self, symbol: &str, window: &TradingWindow) -> Result<Vec<RawRow>> {
        let url = chart_url(symbol, window);
        tracing::debug!(symbol, %window, "requesting minute bars");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_error(symbol, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DayviewError::Fetch(format!(
                "{symbol}: provider returned HTTP {status}"
            )));
        }

        let body: ChartResponse = response
            .json()
            .await
            .map_err(|e| fetch_error(symbol, &e))?;

        parse::parse_rows(symbol, body)
    }
}

fn fetch_error(symbol: &str, error: &reqwest::Error) -> DayviewError {
    if error.is_timeout() {
        DayviewError::Fetch(format!("{symbol}: request timed out"))
    } else {
        DayviewError::Fetch(format!("{symbol}: {error}"))
    }
}

#[async_trait]
impl BarSource for FetchClient {
    async fn minute_bars(&self, symbol: &str, window: &TradingWindow) -> Result<Vec<RawRow>> {
        self.fetch(symbol, window).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = FetchClient::with_defaults();
        assert!(client.is_ok());
    }
}
