use super::Transport;
use crate::error::{FetchError, Result, ScoutError};
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// `Transport` backed by a shared reqwest client. Non-2xx responses are failures.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ScoutError::Network)?;

        Ok(Self::new(client))
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &HeaderMap) -> std::result::Result<Bytes, FetchError> {
        let target =
            Url::parse(url).map_err(|e| FetchError::InvalidTarget(format!("{url}: {e}")))?;

        let response = self
            .client
            .get(target)
            .headers(headers.clone())
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        debug!("Fetched {} bytes from {url}", body.len());

        Ok(body)
    }
}
