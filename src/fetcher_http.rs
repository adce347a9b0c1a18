//! HTTP fetcher for the results page, built on reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE, USER_AGENT};
use reqwest::{Client, Proxy};
use tracing::{debug, warn};

use crate::fetcher::{PageFetcher, PageRequest};
use crate::options::SearchOptions;
use crate::useragents;
use crate::{Result, SearchError};

const SEARCH_URL: &str = "https://www.google.com/search";

/// Consent-bypass cookies. Without them the upstream serves a consent
/// interstitial instead of the results page.
const CONSENT_COOKIES: &str = "CONSENT=PENDING+987; SOCS=CAESHAgBEhIaAB";

/// Extra results requested per page, covering containers the extractor
/// discards as malformed.
const RESULT_MARGIN: usize = 2;

/// Fetches result pages over plain HTTP.
///
/// One `HttpFetcher` and its pooled connection serve every page of a
/// single search call; dropping the fetcher closes the connection.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Builds a fetcher from the call's options (proxy, TLS override,
    /// per-request timeout).
    pub fn new(options: &SearchOptions) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(proxy_url) = validated_proxy(options.proxy.as_deref()) {
            builder = builder.proxy(Proxy::all(proxy_url)?);
        }

        if let Some(verify) = options.ssl_verify {
            builder = builder.danger_accept_invalid_certs(!verify);
        }

        Ok(Self {
            client: builder.build()?,
            timeout: options.timeout,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, request: &PageRequest) -> Result<String> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", request.query.clone()),
            ("num", (request.results_needed + RESULT_MARGIN).to_string()),
            ("hl", request.lang.clone()),
            ("start", request.offset.to_string()),
            ("safe", request.safe.to_string()),
        ];
        if let Some(region) = &request.region {
            params.push(("gl", region.clone()));
        }

        let response = self
            .client
            .get(SEARCH_URL)
            .query(&params)
            .header(USER_AGENT, useragents::random_user_agent())
            .header(ACCEPT, "*/*")
            .header(COOKIE, CONSENT_COOKIES)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        debug!("Fetched results page at offset {}", request.offset);
        Ok(response.text().await?)
    }
}

/// Accepts a proxy URL only when its scheme is known-safe; anything
/// else is ignored rather than passed through to the transport.
fn validated_proxy(proxy: Option<&str>) -> Option<&str> {
    let proxy = proxy?;
    match url::Url::parse(proxy) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https" | "socks5") => Some(proxy),
        _ => {
            warn!("Ignoring proxy with unsupported scheme: {}", proxy);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_proxy_http() {
        assert_eq!(
            validated_proxy(Some("http://127.0.0.1:8080")),
            Some("http://127.0.0.1:8080")
        );
    }

    #[test]
    fn test_validated_proxy_https() {
        assert_eq!(
            validated_proxy(Some("https://proxy.example.com:443")),
            Some("https://proxy.example.com:443")
        );
    }

    #[test]
    fn test_validated_proxy_socks5() {
        assert_eq!(
            validated_proxy(Some("socks5://127.0.0.1:1080")),
            Some("socks5://127.0.0.1:1080")
        );
    }

    #[test]
    fn test_validated_proxy_rejects_ftp() {
        assert_eq!(validated_proxy(Some("ftp://x")), None);
    }

    #[test]
    fn test_validated_proxy_rejects_garbage() {
        assert_eq!(validated_proxy(Some("not a url")), None);
    }

    #[test]
    fn test_validated_proxy_none() {
        assert_eq!(validated_proxy(None), None);
    }

    #[test]
    fn test_http_fetcher_new_defaults() {
        let options = SearchOptions::new("test");
        assert!(HttpFetcher::new(&options).is_ok());
    }

    #[test]
    fn test_http_fetcher_new_with_invalid_proxy_scheme() {
        // Same as supplying no proxy at all.
        let options = SearchOptions::new("test").with_proxy("ftp://x");
        assert!(HttpFetcher::new(&options).is_ok());
    }

    #[test]
    fn test_http_fetcher_new_with_ssl_override() {
        let options = SearchOptions::new("test").with_ssl_verify(false);
        assert!(HttpFetcher::new(&options).is_ok());
    }
}
