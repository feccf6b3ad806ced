//! HTTP fetcher backed by reqwest.

use crate::error::FetchError;
use quire_domain::traits::PageFetcher;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, info};

/// Browser-like User-Agent; review sites tend to block obvious bots
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches review pages over HTTP(S)
///
/// One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default User-Agent and timeout
    pub fn new() -> Result<Self, FetchError> {
        Self::with_settings(DEFAULT_USER_AGENT, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a fetcher with an explicit User-Agent and timeout
    pub fn with_settings(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                url,
                parsed.scheme()
            )));
        }

        debug!(%url, "Fetching page");
        let response = self.http.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        info!(%url, bytes = body.len(), "Fetched page");
        Ok(body.to_vec())
    }
}

impl PageFetcher for HttpFetcher {
    type Error = FetchError;

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, Self::Error> {
        self.fetch_bytes(url).await
    }
}
