use crate::error::FetchError;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use std::future::Future;

pub(crate) mod fetcher;
pub(crate) mod http;

pub use fetcher::Fetcher;
pub use http::ReqwestTransport;

/// Performs one GET request. Everything below this line (TLS, pooling,
/// timeouts, retries) belongs to the implementation.
pub trait Transport: Send + Sync + 'static {
    fn get(
        &self,
        url: &str,
        headers: &HeaderMap,
    ) -> impl Future<Output = Result<Bytes, FetchError>> + Send;
}

/// Result of fetching one target. Exactly one is produced per target.
#[derive(Debug)]
pub struct FetchOutcome {
    pub target: String,
    pub result: Result<Bytes, FetchError>,
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}
