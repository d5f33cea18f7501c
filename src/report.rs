use crate::extract::PlayerLink;

/// Longest body prefix echoed in the report, counted in characters.
pub const SNIPPET_CHARS: usize = 10_000;

/// Outcome of one fetch-and-select run, ready to print.
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    pub status: u16,
    pub body_snippet: String,
    pub links: Vec<PlayerLink>,
}

impl ScrapeReport {
    pub fn new(status: u16, body: &str, links: Vec<PlayerLink>) -> Self {
        Self {
            status,
            body_snippet: snippet(body, SNIPPET_CHARS).to_string(),
            links,
        }
    }

    /// The stdout text, newline-terminated line by line. Pure: rendering the
    /// same report twice gives the same string.
    pub fn render(&self) -> String {
        let mut out = format!(
            "Status Code: {}\nPage Content Snippet:\n{}\n",
            self.status, self.body_snippet
        );
        out.push_str(&format!("Found {} player links.\n", self.links.len()));
        for (i, link) in self.links.iter().enumerate() {
            out.push_str(&format!("Player {}: {}\n", i + 1, link));
        }
        out
    }
}

/// Prefix of `body` at most `max_chars` characters long. Counting characters
/// rather than bytes keeps the cut on a UTF-8 boundary.
pub fn snippet(body: &str, max_chars: usize) -> &str {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
