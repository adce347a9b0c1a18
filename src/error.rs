//! Error types for the search library.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while paging through search results.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The results page answered with a non-success status.
    #[error("search page returned status {0}")]
    Status(reqwest::StatusCode),

    /// The request exceeded the configured timeout.
    #[error("search request timed out")]
    Timeout,

    /// Failed to parse the results page.
    #[error("failed to parse results page: {0}")]
    Parse(String),

    /// The blocking entry point could not start its runtime.
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else {
            SearchError::Http(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status() {
        let err = SearchError::Status(reqwest::StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            err.to_string(),
            "search page returned status 429 Too Many Requests"
        );
    }

    #[test]
    fn test_error_display_timeout() {
        let err = SearchError::Timeout;
        assert_eq!(err.to_string(), "search request timed out");
    }

    #[test]
    fn test_error_display_parse() {
        let err = SearchError::Parse("bad selector".to_string());
        assert_eq!(
            err.to_string(),
            "failed to parse results page: bad selector"
        );
    }

    #[test]
    fn test_error_display_runtime() {
        let io = std::io::Error::other("no threads");
        let err = SearchError::Runtime(io);
        assert!(err.to_string().contains("failed to start runtime"));
    }

    #[test]
    fn test_error_debug() {
        let err = SearchError::Timeout;
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Timeout"));
    }
}
