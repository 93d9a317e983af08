//! Error types for Trendkit

use thiserror::Error;

/// Transport-level failures for a single HTTP fetch
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to build the HTTP client
    #[error("failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Request did not complete within its timeout
    #[error("request timed out")]
    Timeout,

    /// Failed to connect to the server
    #[error("failed to connect to server")]
    Connect(#[source] reqwest::Error),

    /// Other request error
    #[error("request failed: {0}")]
    Request(String),
}

impl FetchError {
    /// Classify a reqwest error
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connect(err)
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

/// Failures while producing the trending listing
///
/// Each variant maps to a distinct report rendering: validation failures
/// never touch the network, transport and status failures carry the
/// attempted URL, and an entry-less page is reported separately from
/// network trouble since it usually means a page-layout change.
#[derive(Debug, Error)]
pub enum TrendingError {
    /// `since` was not one of the accepted window names
    #[error("{0}")]
    InvalidSince(String),

    /// The listing request failed at the transport level
    #[error("network request failed: {source}")]
    Request {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The listing page answered with a non-2xx status
    #[error("trending page returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The page fetched fine but contained no project fragments
    #[error("no trending repositories found")]
    NoEntries { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
        assert_eq!(
            FetchError::Request("boom".to_string()).to_string(),
            "request failed: boom"
        );
        assert_eq!(
            TrendingError::Status {
                url: "https://github.com/trending".to_string(),
                status: 500,
            }
            .to_string(),
            "trending page returned HTTP 500"
        );
    }
}
