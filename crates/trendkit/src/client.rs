//! HTTP client for Trendkit
//!
//! One bounded GET per call, no retries and no connection reuse across
//! calls. Callers interpret the status code themselves: a non-2xx answer
//! means different things to the trending fetch (hard failure) and to a
//! README candidate probe (try the next location).

use crate::error::FetchError;
use crate::DEFAULT_USER_AGENT;
use reqwest::header::{HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::debug;

/// Minimal single-request HTTP client
#[derive(Debug, Clone)]
pub struct HttpClient {
    user_agent: String,
}

impl HttpClient {
    /// Create a client, using the default User-Agent when none is given
    pub fn new(user_agent: Option<String>) -> Self {
        Self {
            user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }

    /// Perform a single GET bounded by `timeout`, returning status and body
    pub async fn get(&self, url: &str, timeout: Duration) -> Result<(u16, String), FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(FetchError::ClientBuild)?;

        let response = client
            .get(url)
            .header(
                USER_AGENT,
                HeaderValue::from_str(&self.user_agent)
                    .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
            )
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(FetchError::from_reqwest)?;

        debug!(url, status, bytes = body.len(), "fetched");
        Ok((status, body))
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(None)
    }
}
