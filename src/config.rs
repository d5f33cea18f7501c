/// Player page the original debugging session pointed at.
pub const PLAYER_PAGE_URL: &str =
    "https://www.pro-football-reference.com/players/A/AaitIs00.htm";

/// Anchors inside the roster listing; the href requirement is part of the
/// selector, not a post-filter.
pub const PLAYER_LINK_SELECTOR: &str = "div#players ul li a[href]";

/// What to fetch and what to select from it. The defaults are the values the
/// scrape was written for; callers (and tests) can point it elsewhere.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub url: String,
    pub selector: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: PLAYER_PAGE_URL.to_string(),
            selector: PLAYER_LINK_SELECTOR.to_string(),
        }
    }
}
