//! Tool builder and contract
//!
//! [`Tool`] is the boundary handed to the invocation layer: its operations
//! take structured arguments and always return report text. Internal
//! results and errors are converted to lines by the report module; nothing
//! propagates past these methods.

use crate::client::HttpClient;
use crate::readme::resolve_readme;
use crate::report;
use crate::trending::fetch_trending;
use crate::types::{ReadmeLookup, ReadmeRequest, TrendingRequest};
use crate::{GITHUB_BASE_URL, RAW_CONTENT_BASE_URL};
use schemars::schema_for;

/// Builder for configuring the tools
#[derive(Debug, Clone, Default)]
pub struct ToolBuilder {
    user_agent: Option<String>,
    trending_base_url: Option<String>,
    raw_content_base_url: Option<String>,
}

impl ToolBuilder {
    /// Create a builder with default endpoints
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the trending site root (tests point this at a mock server)
    pub fn trending_base_url(mut self, url: impl Into<String>) -> Self {
        self.trending_base_url = Some(url.into());
        self
    }

    /// Override the raw-content endpoint
    pub fn raw_content_base_url(mut self, url: impl Into<String>) -> Self {
        self.raw_content_base_url = Some(url.into());
        self
    }

    /// Build the tool
    pub fn build(self) -> Tool {
        Tool {
            client: HttpClient::new(self.user_agent),
            trending_base_url: self
                .trending_base_url
                .unwrap_or_else(|| GITHUB_BASE_URL.to_string()),
            raw_content_base_url: self
                .raw_content_base_url
                .unwrap_or_else(|| RAW_CONTENT_BASE_URL.to_string()),
        }
    }
}

/// Configured tool pair
#[derive(Debug, Clone)]
pub struct Tool {
    client: HttpClient,
    trending_base_url: String,
    raw_content_base_url: String,
}

impl Default for Tool {
    fn default() -> Self {
        ToolBuilder::new().build()
    }
}

impl Tool {
    /// Create a new tool builder
    pub fn builder() -> ToolBuilder {
        ToolBuilder::new()
    }

    /// Input schema for get_github_trending
    pub fn trending_input_schema(&self) -> serde_json::Value {
        serde_json::to_value(schema_for!(TrendingRequest)).unwrap_or_default()
    }

    /// Input schema for get_repository_readme
    pub fn readme_input_schema(&self) -> serde_json::Value {
        serde_json::to_value(schema_for!(ReadmeRequest)).unwrap_or_default()
    }

    /// Get GitHub trending repositories as a text report
    ///
    /// Never fails: invalid parameters, transport errors, and empty results
    /// all come back as prefixed report lines.
    pub async fn get_github_trending(&self, req: TrendingRequest) -> String {
        match fetch_trending(
            &self.client,
            &self.trending_base_url,
            &req.since,
            &req.language,
        )
        .await
        {
            Ok((since, entries)) => report::render_trending(since, &req.language, &entries),
            Err(err) => report::render_trending_error(&err),
        }
    }

    /// Get README documentation for repositories as a text report
    ///
    /// Repositories resolve independently and sequentially in input order;
    /// blank identifiers are skipped, and one repository's failure never
    /// stops the rest.
    pub async fn get_repository_readme(&self, req: ReadmeRequest) -> String {
        if req.repositories.is_empty() {
            return report::render_empty_repositories_error();
        }

        let mut lookups: Vec<ReadmeLookup> = Vec::new();
        for repository in &req.repositories {
            if let Some(lookup) =
                resolve_readme(&self.client, &self.raw_content_base_url, repository).await
            {
                lookups.push(lookup);
            }
        }

        report::render_readme_reports(&lookups)
    }
}
