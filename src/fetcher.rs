//! Page fetcher abstraction for retrieving result pages.

use async_trait::async_trait;

use crate::Result;

/// Parameters for one results-page request.
///
/// Constructed fresh by the pagination engine for every page; carries
/// no state between pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Search terms.
    pub query: String,
    /// How many results this page should cover. Advisory: the upstream
    /// engine treats the derived `num` parameter as a hint, not a
    /// guarantee.
    pub results_needed: usize,
    /// Pagination cursor ("skip this many results").
    pub offset: usize,
    /// Interface language (`hl` parameter).
    pub lang: String,
    /// Safe search parameter value.
    pub safe: &'static str,
    /// Region bias (`gl` parameter), omitted when `None`.
    pub region: Option<String>,
}

/// Trait for fetching one page of search results.
///
/// The production implementation performs an HTTP GET against the
/// results page; tests substitute implementations serving canned HTML.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the raw HTML of the page described by `request`.
    async fn fetch_page(&self, request: &PageRequest) -> Result<String>;
}
