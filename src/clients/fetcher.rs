use super::{FetchOutcome, Transport};
use crate::error::{FetchError, Result, ScoutError};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Fetches batches of URLs with a hard ceiling on requests in flight.
///
/// Every target of a batch yields exactly one `FetchOutcome`. Failures stay
/// attached to their target and never abort the rest of the batch.
pub struct Fetcher<T> {
    transport: Arc<T>,
    concurrency: usize,
    headers: HeaderMap,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, concurrency: usize, user_agent: &str) -> Result<Self> {
        if concurrency == 0 {
            return Err(ScoutError::Config(
                "Concurrency limit must be at least 1".to_string(),
            ));
        }

        let user_agent = HeaderValue::from_str(user_agent)
            .map_err(|e| ScoutError::Config(format!("Invalid user agent: {e}")))?;
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, user_agent);

        Ok(Self {
            transport: Arc::new(transport),
            concurrency,
            headers,
        })
    }

    pub async fn fetch(&self, targets: &[String]) -> Result<Vec<FetchOutcome>> {
        if targets.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            "Fetching {} targets, at most {} at a time",
            targets.len(),
            self.concurrency
        );

        let gate = Arc::new(Semaphore::new(self.concurrency));
        let mut handles = Vec::with_capacity(targets.len());

        for target in targets {
            // Admission happens before the task exists, so idle tasks never pile up.
            let permit = Arc::clone(&gate)
                .acquire_owned()
                .await
                .map_err(|e| ScoutError::Other(format!("Admission gate closed: {e}")))?;

            let transport = Arc::clone(&self.transport);
            let headers = self.headers.clone();
            let url = target.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                transport.get(&url, &headers).await
            });

            handles.push((target.clone(), handle));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for (target, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(FetchError::Task(e.to_string())),
            };

            if let Err(e) = &result {
                warn!("Fetching {target} failed: {e}");
            }

            outcomes.push(FetchOutcome { target, result });
        }

        Ok(outcomes)
    }

    pub async fn fetch_one(&self, target: &str) -> Result<FetchOutcome> {
        self.fetch(&[target.to_string()])
            .await?
            .pop()
            .ok_or_else(|| ScoutError::Other(format!("No outcome for {target}")))
    }
}
