//! Paginated search orchestration.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use futures::stream::{self, Stream, TryStreamExt};
use tracing::debug;

use crate::extract::{self, normalize_link};
use crate::fetcher::{PageFetcher, PageRequest};
use crate::fetcher_http::HttpFetcher;
use crate::options::SearchOptions;
use crate::result::{SearchItem, SearchResult};
use crate::Result;

/// Offset increment between successive page requests.
const PAGE_STRIDE: usize = 10;

/// A single paginated search call.
///
/// Drives fetch and extract rounds until the requested number of
/// results has been produced or a page yields nothing new. The result
/// stream is finite and not restartable; create a fresh `Search` per
/// call.
pub struct Search {
    options: SearchOptions,
    fetcher: Arc<dyn PageFetcher>,
}

impl Search {
    /// Creates a search backed by the HTTP fetcher.
    pub fn new(options: SearchOptions) -> Result<Self> {
        let fetcher = Arc::new(HttpFetcher::new(&options)?);
        Ok(Self::with_fetcher(options, fetcher))
    }

    /// Creates a search with a custom page fetcher.
    pub fn with_fetcher(options: SearchOptions, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { options, fetcher }
    }

    /// Returns the lazy result stream.
    ///
    /// Pages are requested only as the stream is polled, so a consumer
    /// that stops early also stops all further requests. Fetch and
    /// parse errors propagate through the stream and end it.
    pub fn stream(self) -> impl Stream<Item = Result<SearchItem>> {
        let state = SessionState {
            offset: self.options.start_offset,
            fetched: 0,
            seen: HashSet::new(),
            buffer: VecDeque::new(),
            pace_next_request: false,
            options: self.options,
            fetcher: self.fetcher,
        };

        stream::try_unfold(state, |mut state| async move {
            loop {
                if let Some(item) = state.buffer.pop_front() {
                    return Ok(Some((item, state)));
                }
                if state.fetched >= state.options.num_results {
                    return Ok(None);
                }
                if state.pace_next_request && !state.options.sleep_interval.is_zero() {
                    tokio::time::sleep(state.options.sleep_interval).await;
                }
                state.pace_next_request = false;
                if !state.fill_next_page().await? {
                    return Ok(None);
                }
            }
        })
    }

    /// Collects the full result stream into a vec.
    pub async fn collect(self) -> Result<Vec<SearchItem>> {
        self.stream().try_collect().await
    }

    /// Collects the full result stream on a private current-thread
    /// runtime, for callers without an async context of their own.
    pub fn collect_blocking(self) -> Result<Vec<SearchItem>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.collect())
    }
}

/// Pagination state for one in-flight search call.
struct SessionState {
    options: SearchOptions,
    fetcher: Arc<dyn PageFetcher>,
    offset: usize,
    fetched: usize,
    seen: HashSet<String>,
    buffer: VecDeque<SearchItem>,
    pace_next_request: bool,
}

impl SessionState {
    /// Fetches and processes one page into the buffer. Returns `false`
    /// when the page yielded nothing new, which ends the session.
    async fn fill_next_page(&mut self) -> Result<bool> {
        let request = PageRequest {
            query: self.options.query.clone(),
            // Request sizing follows the original offset-based hint,
            // clamped at zero instead of going negative.
            results_needed: self.options.num_results.saturating_sub(self.offset),
            offset: self.offset,
            lang: self.options.lang.clone(),
            safe: self.options.safe.as_str(),
            region: self.options.region.clone(),
        };

        let html = self.fetcher.fetch_page(&request).await?;
        let records = extract::extract(&html)?;

        let mut new_results = 0;
        for record in records {
            let link = normalize_link(&record.href);
            if self.options.unique && self.seen.contains(&link) {
                continue;
            }
            self.seen.insert(link.clone());
            self.fetched += 1;
            new_results += 1;

            let item = if self.options.advanced {
                SearchItem::Result(SearchResult::new(link, record.title, record.description))
            } else {
                SearchItem::Url(link)
            };
            self.buffer.push_back(item);

            if self.fetched >= self.options.num_results {
                // Target reached mid-page; remaining containers are
                // not processed.
                break;
            }
        }

        debug!(
            "Page at offset {} yielded {} new results ({} total)",
            self.offset, new_results, self.fetched
        );

        if new_results == 0 {
            return Ok(false);
        }

        self.offset += PAGE_STRIDE;
        self.pace_next_request = true;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Fetcher that fails the test if any request is issued.
    struct NoRequestFetcher;

    #[async_trait]
    impl PageFetcher for NoRequestFetcher {
        async fn fetch_page(&self, _request: &PageRequest) -> Result<String> {
            panic!("no request expected");
        }
    }

    #[test]
    fn test_zero_num_results_issues_no_request() {
        let options = SearchOptions::new("test").with_num_results(0);
        let search = Search::with_fetcher(options, Arc::new(NoRequestFetcher));
        let items = tokio_test::block_on(search.collect()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_collect_blocking_runs_without_ambient_runtime() {
        let options = SearchOptions::new("test").with_num_results(0);
        let search = Search::with_fetcher(options, Arc::new(NoRequestFetcher));
        let items = search.collect_blocking().unwrap();
        assert!(items.is_empty());
    }
}
