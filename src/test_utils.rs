//! In-memory transport for unit tests.

use crate::clients::Transport;
use crate::error::FetchError;
use bytes::Bytes;
use reqwest::header::{HeaderMap, USER_AGENT};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

pub const SEARCH_RESULT: &str = include_str!("../testdata/search_result.html");
pub const SEARCH_RESULT_NO_RESULT: &str = include_str!("../testdata/search_result_no_result.html");
pub const SEARCH_RESULT_ONE_GAME: &str = include_str!("../testdata/search_result_one_game.html");
pub const SEARCH_RESULT_ONE_GAME2: &str = include_str!("../testdata/search_result_one_game2.html");
pub const MARIO_PARTY: &str = include_str!("../testdata/mario_party.html");
pub const MARIO_ODYSSEY: &str = include_str!("../testdata/mario_odyssey.html");
pub const MARIO_ODYSSEY_NO_META: &str = include_str!("../testdata/mario_odyssey_no_meta.html");
pub const MARIO_ODYSSEY_NO_USER: &str = include_str!("../testdata/mario_odyssey_no_user.html");
pub const MARIO_ODYSSEY_WRONG_USER: &str =
    include_str!("../testdata/mario_odyssey_wrong_user.html");

pub const MARIO_SEARCH_URL: &str =
    "https://www.metacritic.com/search/game/Mario/results?plats[268409]=1&search_type=advanced";
pub const MARIO_PARTY_URL: &str = "https://www.metacritic.com/game/switch/super-mario-party";
pub const MARIO_ODYSSEY_URL: &str = "https://www.metacritic.com/game/switch/super-mario-odyssey";

#[derive(Default)]
struct Stats {
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    user_agents: Mutex<Vec<String>>,
}

/// Serves canned pages by URL. Unknown URLs get an empty page unless
/// `fail_unknown` is set, listed URLs in `failing` always error.
#[derive(Clone, Default)]
pub struct MockTransport {
    pages: HashMap<String, Bytes>,
    failing: HashSet<String>,
    fail_unknown: bool,
    latency: Option<Duration>,
    stats: Arc<Stats>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages
            .insert(url.to_string(), Bytes::copy_from_slice(body.as_bytes()));
        self
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    pub fn fail_unknown(mut self) -> Self {
        self.fail_unknown = true;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn calls(&self) -> usize {
        self.stats.calls.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.stats.peak.load(Ordering::SeqCst)
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.stats.user_agents.lock().unwrap().clone()
    }

    /// The Mario fixtures: a two-game search page and both detail pages.
    pub fn mario() -> Self {
        Self::new()
            .with_page(MARIO_SEARCH_URL, SEARCH_RESULT)
            .with_page(MARIO_PARTY_URL, MARIO_PARTY)
            .with_page(MARIO_ODYSSEY_URL, MARIO_ODYSSEY)
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<Bytes, FetchError> {
        Url::parse(url).map_err(|e| FetchError::InvalidTarget(format!("{url}: {e}")))?;

        self.stats.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ua) = headers.get(USER_AGENT).and_then(|v| v.to_str().ok()) {
            self.stats.user_agents.lock().unwrap().push(ua.to_string());
        }

        let active = self.stats.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.stats.peak.fetch_max(active, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.stats.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(url) {
            return Err(FetchError::Other("unittest_error".to_string()));
        }

        match self.pages.get(url) {
            Some(body) => Ok(body.clone()),
            None if self.fail_unknown => Err(FetchError::Other("unittest".to_string())),
            None => Ok(Bytes::new()),
        }
    }
}
