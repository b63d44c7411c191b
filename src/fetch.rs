use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::debug;
use url::Url;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid URL '{0}': expected an absolute http:// or https:// URL")]
    InvalidUrl(String),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Parse an operator-supplied URL. Only http(s) URLs are accepted.
pub fn parse_page_url(raw: &str) -> Result<Url, FetchError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(FetchError::InvalidUrl(raw.to_string()));
    }
    Url::parse(raw).map_err(|_| FetchError::InvalidUrl(raw.to_string()))
}

/// HTTP client shared by both extraction stages.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// GET `url` and return the body. Non-2xx statuses count as failures.
    pub async fn get_html(&self, url: &str) -> Result<String, FetchError> {
        let start = Instant::now();
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!(
            "Fetched {} ({} bytes in {}ms)",
            url,
            body.len(),
            start.elapsed().as_millis()
        );
        Ok(body)
    }
}
