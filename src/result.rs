//! Search result types.

use serde::{Deserialize, Serialize};

/// A single search result extracted from the results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result URL, normalized (redirect wrapper and tracking parameters
    /// removed, percent-decoded).
    pub url: String,
    /// Result title. May be empty when not extractable.
    pub title: String,
    /// Result description/snippet. May be empty when not extractable.
    pub description: String,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// One item produced by the result stream.
///
/// Bare URLs by default; full records when advanced extraction was
/// requested in the options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchItem {
    /// A bare result URL.
    Url(String),
    /// A full result record.
    Result(SearchResult),
}

impl SearchItem {
    /// Returns the result URL regardless of variant.
    pub fn url(&self) -> &str {
        match self {
            SearchItem::Url(url) => url,
            SearchItem::Result(result) => &result.url,
        }
    }

    /// Returns the full record, when one was extracted.
    pub fn as_result(&self) -> Option<&SearchResult> {
        match self {
            SearchItem::Url(_) => None,
            SearchItem::Result(result) => Some(result),
        }
    }
}
