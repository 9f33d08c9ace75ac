pub mod clients;
pub mod config;
pub mod error;
pub mod matcher;
pub mod platform;
pub mod processor;
pub mod scrapers;

#[cfg(test)]
mod test_utils;

pub use clients::{FetchOutcome, Fetcher, ReqwestTransport, Transport};
pub use config::SearchSettings;
pub use error::{FetchError, Result, ScoutError};
pub use matcher::best_match;
pub use platform::Platform;
pub use processor::{GameRecord, Metacritic};
