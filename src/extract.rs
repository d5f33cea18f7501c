use std::cell::{Cell, RefCell};
use std::fmt;

use lol_html::errors::SelectorError;
use lol_html::{element, text, HtmlRewriter, Selector, Settings};
use tracing::warn;
use url::Url;

/// One matched anchor: its href attribute and its flattened text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLink {
    pub href: String,
    pub text: String,
}

impl PlayerLink {
    /// Player id embedded in a profile href, the file stem of its last path
    /// segment: `/players/A/AaitIs00.htm` -> `AaitIs00`.
    pub fn player_id(&self) -> Option<&str> {
        let last = self.href.rsplit('/').next()?;
        let id = last.strip_suffix(".htm")?;
        if id.is_empty() { None } else { Some(id) }
    }

    /// Resolve the (usually site-relative) href against the page it came from.
    pub fn profile_url(&self, base: &Url) -> Option<Url> {
        base.join(&self.href).ok()
    }
}

impl fmt::Display for PlayerLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<a href=\"{}\">{}</a>", self.href, self.text)
    }
}

/// Stream `html` through a rewriter and collect at most `max` links matching
/// `selector`, in document order. Matches without an href attribute never
/// count, whatever the selector says.
///
/// Parsing follows the HTML5 recovery rules, so a malformed document yields
/// whatever matched before the rewriter gave up rather than an error. Only an
/// unparseable selector fails.
pub fn extract_player_links(
    html: &str,
    selector: &str,
    max: usize,
) -> Result<Vec<PlayerLink>, SelectorError> {
    // The element!/text! macros unwrap their own parse of the selector;
    // validating it up front turns a config typo into an error, not a panic.
    let _: Selector = selector.parse()?;

    let links: RefCell<Vec<PlayerLink>> = RefCell::new(Vec::new());
    // True while the most recent match is the one text chunks belong to;
    // cleared when a match past the cap (or without an href) is skipped so
    // its text cannot leak into an earlier entry.
    let capturing = Cell::new(false);

    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: vec![
                element!(selector, |el| {
                    let mut collected = links.borrow_mut();
                    match el.get_attribute("href") {
                        Some(href) if collected.len() < max => {
                            collected.push(PlayerLink {
                                href,
                                text: String::new(),
                            });
                            capturing.set(true);
                        }
                        _ => capturing.set(false),
                    }
                    Ok(())
                }),
                text!(selector, |t| {
                    if capturing.get() {
                        if let Some(link) = links.borrow_mut().last_mut() {
                            link.text.push_str(t.as_str());
                        }
                    }
                    Ok(())
                }),
            ],
            ..Settings::new()
        },
        |_: &[u8]| {},
    );

    let outcome = rewriter.write(html.as_bytes()).and_then(|()| rewriter.end());
    if let Err(err) = outcome {
        warn!(
            matches = links.borrow().len(),
            "html parsing stopped early, keeping matches collected so far: {err}"
        );
    }

    Ok(links.into_inner())
}
