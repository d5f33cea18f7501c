//! Fetch one pro-football-reference player page, gate on the HTTP status,
//! and pull the first few player links out of the roster listing.

pub mod config;
pub mod extract;
pub mod http_client;
pub mod report;

use tracing::{debug, info};
use url::Url;

use lol_html::errors::SelectorError;

pub use config::ScrapeConfig;
pub use extract::{PlayerLink, extract_player_links};
pub use http_client::{FetchError, FetchedPage, HttpClient};
pub use report::ScrapeReport;

/// At most this many matches are taken from the page.
pub const MAX_PLAYER_LINKS: usize = 3;

#[derive(Debug)]
pub enum ScrapeError {
    Fetch(FetchError),
    Selector(SelectorError),
}

impl From<FetchError> for ScrapeError {
    fn from(err: FetchError) -> Self {
        ScrapeError::Fetch(err)
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Fetch(FetchError::Request(err))
    }
}

impl From<SelectorError> for ScrapeError {
    fn from(err: SelectorError) -> Self {
        ScrapeError::Selector(err)
    }
}

impl std::fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrapeError::Fetch(err) => write!(f, "{}", err),
            ScrapeError::Selector(err) => write!(f, "invalid CSS selector: {}", err),
        }
    }
}

impl std::error::Error for ScrapeError {}

/// Fetch the configured page and select the first player links from it.
///
/// One GET, one pass over the body, no retries. A status other than 200 or a
/// network failure comes back as `ScrapeError::Fetch` without any parsing; a
/// document that parses badly degrades to however many links were matched.
/// The returned report renders the printable outcome.
pub async fn run(config: &ScrapeConfig) -> Result<ScrapeReport, ScrapeError> {
    let client = HttpClient::new()?;

    info!(url = %config.url, "fetching page");
    let page = client.fetch(&config.url).await?;
    debug!(status = page.status, bytes = page.body.len(), "page fetched");

    let links = extract_player_links(&page.body, &config.selector, MAX_PLAYER_LINKS)?;
    info!(matches = links.len(), selector = %config.selector, "selection finished");

    if let Ok(base) = Url::parse(&config.url) {
        for (i, link) in links.iter().enumerate() {
            let profile = link
                .profile_url(&base)
                .map(|u| u.to_string())
                .unwrap_or_default();
            debug!(
                n = i + 1,
                id = link.player_id().unwrap_or("-"),
                url = %profile,
                "matched player link"
            );
        }
    }

    Ok(ScrapeReport::new(page.status, &page.body, links))
}
