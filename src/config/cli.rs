use crate::config::{DEFAULT_BASE_URL, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::platform::Platform;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Look up Metacritic scores for a game")]
pub struct Args {
    /// Game title to search for
    pub title: String,

    /// Platform to restrict the search to (e.g. switch, ps4, "xbox one", pc)
    #[arg(short, long, env = "METASCOUT_PLATFORM", default_value = "switch")]
    pub platform: Platform,

    /// Only print the result whose title is closest to the query
    #[arg(short, long)]
    pub best_match: bool,

    /// Maximum number of pages fetched at the same time
    #[arg(long, env = "METASCOUT_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, env = "METASCOUT_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Site origin to query
    #[arg(long, env = "METASCOUT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
