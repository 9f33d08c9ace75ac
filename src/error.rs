use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Cannot crawl search result page: {0}")]
    SearchPage(String),
    #[error("{0}")]
    Other(String),
}

/// Failure of a single fetch. Carried inside a `FetchOutcome`, never fatal to a batch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Invalid target '{0}'")]
    InvalidTarget(String),
    #[error("Fetch task failed: {0}")]
    Task(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
