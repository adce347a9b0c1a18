//! Search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Safe search level sent upstream via the `safe` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    /// Filtering enabled.
    #[default]
    Active,
    /// No filtering.
    Off,
}

impl SafeSearch {
    /// Returns the parameter value sent upstream.
    pub fn as_str(&self) -> &'static str {
        match self {
            SafeSearch::Active => "active",
            SafeSearch::Off => "off",
        }
    }
}

/// Options for a single search call.
///
/// Defaults match the upstream behavior: 10 results, English interface,
/// safe search active, 5 second request timeout, no pacing delay.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Search terms.
    pub query: String,
    /// Total number of results to produce.
    pub num_results: usize,
    /// Interface language (`hl` parameter).
    pub lang: String,
    /// Proxy URL. Only http, https and socks5 schemes are honored;
    /// anything else is treated as no proxy.
    pub proxy: Option<String>,
    /// Produce full records (url, title, description) instead of bare URLs.
    pub advanced: bool,
    /// Pause between successive page requests.
    pub sleep_interval: Duration,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Safe search level.
    pub safe: SafeSearch,
    /// TLS certificate verification override. `None` keeps the
    /// transport default; `Some(false)` disables verification.
    pub ssl_verify: Option<bool>,
    /// Region bias (`gl` parameter), omitted when unset.
    pub region: Option<String>,
    /// Initial pagination offset.
    pub start_offset: usize,
    /// Skip results whose normalized URL was already produced.
    pub unique: bool,
}

impl SearchOptions {
    /// Creates options for the given query with default settings.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            num_results: 10,
            lang: "en".to_string(),
            proxy: None,
            advanced: false,
            sleep_interval: Duration::ZERO,
            timeout: Duration::from_secs(5),
            safe: SafeSearch::Active,
            ssl_verify: None,
            region: None,
            start_offset: 0,
            unique: false,
        }
    }

    /// Sets the total number of results to produce.
    pub fn with_num_results(mut self, num_results: usize) -> Self {
        self.num_results = num_results;
        self
    }

    /// Sets the interface language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Sets the proxy URL.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Enables or disables full-record extraction.
    pub fn with_advanced(mut self, advanced: bool) -> Self {
        self.advanced = advanced;
        self
    }

    /// Sets the pause between page requests.
    pub fn with_sleep_interval(mut self, interval: Duration) -> Self {
        self.sleep_interval = interval;
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the safe search level.
    pub fn with_safe(mut self, safe: SafeSearch) -> Self {
        self.safe = safe;
        self
    }

    /// Overrides TLS certificate verification.
    pub fn with_ssl_verify(mut self, verify: bool) -> Self {
        self.ssl_verify = Some(verify);
        self
    }

    /// Sets the region bias.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the initial pagination offset.
    pub fn with_start_offset(mut self, offset: usize) -> Self {
        self.start_offset = offset;
        self
    }

    /// Enables or disables deduplication of produced URLs.
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let options = SearchOptions::new("test query");
        assert_eq!(options.query, "test query");
        assert_eq!(options.num_results, 10);
        assert_eq!(options.lang, "en");
        assert!(options.proxy.is_none());
        assert!(!options.advanced);
        assert_eq!(options.sleep_interval, Duration::ZERO);
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.safe, SafeSearch::Active);
        assert!(options.ssl_verify.is_none());
        assert!(options.region.is_none());
        assert_eq!(options.start_offset, 0);
        assert!(!options.unique);
    }

    #[test]
    fn test_options_builder_chain() {
        let options = SearchOptions::new("rust programming")
            .with_num_results(25)
            .with_lang("de")
            .with_proxy("socks5://127.0.0.1:1080")
            .with_advanced(true)
            .with_sleep_interval(Duration::from_secs(1))
            .with_timeout(Duration::from_secs(10))
            .with_safe(SafeSearch::Off)
            .with_ssl_verify(false)
            .with_region("de")
            .with_start_offset(10)
            .with_unique(true);

        assert_eq!(options.num_results, 25);
        assert_eq!(options.lang, "de");
        assert_eq!(options.proxy, Some("socks5://127.0.0.1:1080".to_string()));
        assert!(options.advanced);
        assert_eq!(options.sleep_interval, Duration::from_secs(1));
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.safe, SafeSearch::Off);
        assert_eq!(options.ssl_verify, Some(false));
        assert_eq!(options.region, Some("de".to_string()));
        assert_eq!(options.start_offset, 10);
        assert!(options.unique);
    }

    #[test]
    fn test_safe_search_default() {
        let default: SafeSearch = Default::default();
        assert_eq!(default, SafeSearch::Active);
    }

    #[test]
    fn test_safe_search_as_str() {
        assert_eq!(SafeSearch::Active.as_str(), "active");
        assert_eq!(SafeSearch::Off.as_str(), "off");
    }
}
