//! Core types for Trendkit

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Time window for the trending listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Since {
    /// Trending today
    #[default]
    Daily,
    /// Trending this week
    Weekly,
    /// Trending this month
    Monthly,
}

impl Since {
    /// Query-parameter value, e.g. `since=weekly`
    pub fn as_str(&self) -> &'static str {
        match self {
            Since::Daily => "daily",
            Since::Weekly => "weekly",
            Since::Monthly => "monthly",
        }
    }

    /// Label used in report headers
    pub fn label(&self) -> &'static str {
        match self {
            Since::Daily => "Today",
            Since::Weekly => "This Week",
            Since::Monthly => "This Month",
        }
    }

    /// Phrase the listing page uses in its period-stars span
    pub fn window_phrase(&self) -> &'static str {
        match self {
            Since::Daily => "today",
            Since::Weekly => "this week",
            Since::Monthly => "this month",
        }
    }
}

impl FromStr for Since {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Since::Daily),
            "weekly" => Ok(Since::Weekly),
            "monthly" => Ok(Since::Monthly),
            other => Err(format!(
                "since parameter must be one of: daily, weekly, monthly (got {other:?})"
            )),
        }
    }
}

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments for the get_github_trending tool
///
/// `since` stays a plain string at this boundary so an unrecognized value
/// is reported as a validation error line instead of a schema rejection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TrendingRequest {
    /// Time window: "daily", "weekly", or "monthly" (default "daily")
    #[serde(default = "default_since")]
    pub since: String,

    /// Programming language filter, e.g. "rust" (default: all languages)
    #[serde(default)]
    pub language: String,
}

fn default_since() -> String {
    "daily".to_string()
}

impl Default for TrendingRequest {
    fn default() -> Self {
        Self {
            since: default_since(),
            language: String::new(),
        }
    }
}

/// One trending repository as listed on the page
///
/// Star and fork counts stay display strings since the page formats them
/// with thousands separators and suffixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TrendingEntry {
    /// "owner / name" as rendered in the listing heading
    pub title: String,
    /// Absolute project URL
    pub url: String,
    /// Project description, or a "No description" fallback
    pub description: String,
    /// Primary language, or an "Unknown" fallback
    pub language: String,
    /// Lifetime star count as displayed
    pub total_stars: String,
    /// Fork count as displayed
    pub total_forks: String,
    /// Stars gained within the requested window, "0" when not shown
    pub period_stars: String,
}

/// Arguments for the get_repository_readme tool
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ReadmeRequest {
    /// Repositories in "owner/repository-name" form
    pub repositories: Vec<String>,
}

/// Outcome of resolving one repository's README
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReadmeLookup {
    /// The identifier as supplied, trimmed
    pub repository: String,
    /// True when some candidate location answered 200
    pub found: bool,
    /// The exact candidate URL that succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// README body, possibly truncated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// True when the body was cut at the size limit
    pub truncated: bool,
    /// Why nothing was returned: malformed identifier or exhausted cascade
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
