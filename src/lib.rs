//! # gsearch
//!
//! A library for scraping Google search results, page by page.
//!
//! Results are produced as a lazy, finite stream: each page is
//! requested only when the consumer asks for more items, links are
//! normalized and optionally deduplicated across pages, and the stream
//! ends once the requested count is reached or a page yields nothing
//! new. Fetch errors are not swallowed; they surface through the
//! stream.
//!
//! ## Example
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use gsearch::{Search, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let options = SearchOptions::new("rust programming")
//!         .with_num_results(20)
//!         .with_advanced(true)
//!         .with_unique(true);
//!
//!     let mut results = Box::pin(Search::new(options)?.stream());
//!     while let Some(item) = results.try_next().await? {
//!         println!("{}", item.url());
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod extract;
mod fetcher;
mod fetcher_http;
mod options;
mod result;
mod search;
mod useragents;

pub use error::{Result, SearchError};
pub use extract::{extract, normalize_link, RawResult};
pub use fetcher::{PageFetcher, PageRequest};
pub use fetcher_http::HttpFetcher;
pub use options::{SafeSearch, SearchOptions};
pub use result::{SearchItem, SearchResult};
pub use search::Search;
