mod game_record;

pub use self::game_record::GameRecord;

use crate::clients::{FetchOutcome, Fetcher, ReqwestTransport, Transport};
use crate::config::SearchSettings;
use crate::error::{Result, ScoutError};
use crate::matcher::best_match;
use crate::platform::Platform;
use crate::scrapers::{extract_game, extract_links};
use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

/// Builds the advanced search URL for `title` on `platform`.
///
/// The title becomes a single escaped path segment; the platform is selected
/// through the `plats[CODE]=1` query flag.
pub fn search_url(base: &Url, title: &str, platform: Platform) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ScoutError::Config(format!("Base URL '{base}' cannot carry a path")))?
        .pop_if_empty()
        .extend(["search", "game", title, "results"]);
    url.set_query(Some(&format!(
        "plats[{}]=1&search_type=advanced",
        platform.code()
    )));

    Ok(url)
}

/// Searches the site and scrapes every result's detail page.
pub struct Metacritic<T = ReqwestTransport> {
    fetcher: Fetcher<T>,
    base_url: Url,
    origin: String,
}

impl Metacritic<ReqwestTransport> {
    pub fn new(settings: &SearchSettings) -> Result<Self> {
        let transport = ReqwestTransport::with_timeout(settings.timeout)?;
        Self::with_transport(transport, settings)
    }

    pub fn with_client(client: Client, settings: &SearchSettings) -> Result<Self> {
        Self::with_transport(ReqwestTransport::new(client), settings)
    }
}

impl<T: Transport> Metacritic<T> {
    pub fn with_transport(transport: T, settings: &SearchSettings) -> Result<Self> {
        let base_url = Url::parse(&settings.base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ScoutError::Config(format!(
                "Base URL '{base_url}' must be http or https"
            )));
        }
        let origin = base_url.origin().ascii_serialization();
        let fetcher = Fetcher::new(transport, settings.concurrency, &settings.user_agent)?;

        Ok(Self {
            fetcher,
            base_url,
            origin,
        })
    }

    pub fn search_url(&self, title: &str, platform: Platform) -> Result<Url> {
        search_url(&self.base_url, title, platform)
    }

    /// All games the site lists for `title` on `platform`, in the order the
    /// search page lists them.
    ///
    /// Only a search page that cannot be fetched or read is an error. Detail
    /// pages that fail or carry no structured data are logged and skipped.
    pub async fn search(&self, title: &str, platform: Platform) -> Result<Vec<GameRecord>> {
        let url = self.search_url(title, platform)?;
        info!("Searching {} games for '{}'", platform, title);

        let links = {
            let page = self.fetcher.fetch_one(url.as_str()).await?;
            let body = page
                .result
                .map_err(|e| ScoutError::SearchPage(e.to_string()))?;
            extract_links(&body[..], &self.origin)
                .map_err(|e| ScoutError::SearchPage(format!("reading {url}: {e}")))?
        };

        info!("Found {} result pages", links.len());
        if links.is_empty() {
            return Ok(Vec::new());
        }

        let outcomes = self.fetcher.fetch(&links).await?;
        let fetched = outcomes.iter().filter(|o| o.is_success()).count();
        debug!("Fetched {} of {} result pages", fetched, outcomes.len());

        let mut games = Vec::with_capacity(outcomes.len());
        for FetchOutcome { target, result } in outcomes {
            // Failures were already logged by the fetcher.
            let Ok(body) = result else {
                continue;
            };

            match extract_game(&body[..]) {
                Some(game) => {
                    let position = links.iter().position(|l| *l == target);
                    debug!("Scraped '{}' from {}", game.title, target);
                    games.push((position, game));
                }
                None => warn!("No game data found on {target}"),
            }
        }

        games.sort_by_key(|(position, _)| *position);
        let games: Vec<GameRecord> = games.into_iter().map(|(_, game)| game).collect();

        info!("Scraped {} of {} games", games.len(), links.len());
        Ok(games)
    }

    /// The search result whose title is closest to `title`, if any.
    ///
    /// Search failures are logged and reported as no match.
    pub async fn search_best_match(&self, title: &str, platform: Platform) -> Option<GameRecord> {
        let games = match self.search(title, platform).await {
            Ok(games) => games,
            Err(e) => {
                warn!("Search for '{title}' failed: {e}");
                return None;
            }
        };

        best_match(title, &games).cloned()
    }
}
