//! Result extraction from the raw results page.

use scraper::{ElementRef, Html, Selector};

use crate::{Result, SearchError};

/// Marker class of one result block. Presentation-coupled: this is the
/// layout class the upstream currently emits, and it is the known
/// breakage point when the markup changes.
const CONTAINER_SELECTOR: &str = "div.ezO2md";
const LINK_SELECTOR: &str = "a[href]";
const TITLE_SELECTOR: &str = "span.CVA68e";
const DESCRIPTION_SELECTOR: &str = "span.FrIlee";

/// One result block before link normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResult {
    /// Link target as it appears in the page, redirect wrapper included.
    pub href: String,
    /// Title text.
    pub title: String,
    /// Description text.
    pub description: String,
}

/// Extracts result triples from a results page, in document order.
///
/// A container missing any of link, title or description is silently
/// skipped. A page with no containers at all yields an empty vec, not
/// an error.
pub fn extract(html: &str) -> Result<Vec<RawResult>> {
    let document = Html::parse_document(html);

    let container = parse_selector(CONTAINER_SELECTOR)?;
    let link = parse_selector(LINK_SELECTOR)?;
    let title = parse_selector(TITLE_SELECTOR)?;
    let description = parse_selector(DESCRIPTION_SELECTOR)?;

    let mut results = Vec::new();
    for block in document.select(&container) {
        // The title must sit inside the link; the description anywhere
        // in the block.
        let Some(link_el) = block.select(&link).next() else {
            continue;
        };
        let Some(title_el) = link_el.select(&title).next() else {
            continue;
        };
        let Some(description_el) = block.select(&description).next() else {
            continue;
        };
        let Some(href) = link_el.value().attr("href") else {
            continue;
        };

        results.push(RawResult {
            href: href.to_string(),
            title: text_of(title_el),
            description: text_of(description_el),
        });
    }

    Ok(results)
}

/// Normalizes a raw href into the canonical result URL: tracking
/// parameters are cut at the first `&`, the `/url?q=` redirect wrapper
/// is stripped, and the remainder is percent-decoded.
pub fn normalize_link(href: &str) -> String {
    let href = href.split('&').next().unwrap_or(href);
    let href = href.strip_prefix("/url?q=").unwrap_or(href);
    match urlencoding::decode(href) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => href.to_string(),
    }
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| SearchError::Parse(format!("invalid selector '{}': {:?}", css, e)))
}
