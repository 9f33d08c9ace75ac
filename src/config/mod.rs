use crate::config::cli::Args;
use crate::error::{Result, ScoutError};
use clap::Parser;
use reqwest::Client;
use std::time::Duration;
use tracing::Level;

pub mod cli;

pub const DEFAULT_BASE_URL: &str = "https://www.metacritic.com";
pub const DEFAULT_CONCURRENCY: usize = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/74.0.3729.169 Safari/537.36";

/// Everything the search pipeline needs to know about its surroundings.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub base_url: String,
    pub concurrency: usize,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl From<&Args> for SearchSettings {
    fn from(args: &Args) -> Self {
        Self {
            base_url: args.base_url.clone(),
            concurrency: args.concurrency,
            user_agent: args.user_agent.clone(),
            timeout: Duration::from_secs(args.timeout_secs),
        }
    }
}

pub struct Config {
    pub args: Args,
    pub settings: SearchSettings,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let settings = SearchSettings::from(&args);

        if settings.concurrency == 0 {
            return Err(ScoutError::Config(
                "--concurrency must be at least 1".to_string(),
            ));
        }

        // The user agent is attached per request, not as a client default.
        let http_client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            args,
            settings,
            http_client,
        })
    }

    pub fn log_level(&self) -> Result<Level> {
        self.args
            .log_level
            .parse()
            .map_err(|_| ScoutError::Config(format!("Unknown log level '{}'", self.args.log_level)))
    }
}
