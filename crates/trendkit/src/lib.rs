//! Trendkit - GitHub trending discovery and README retrieval
//!
//! This crate provides two read-only lookups against public GitHub-hosted
//! content, packaged as AI-assistant tools:
//!
//! - [`Tool::get_github_trending`] scrapes the public trending listing page
//!   and extracts per-project fields, degrading gracefully per field and
//!   per entry.
//! - [`Tool::get_repository_readme`] probes a fixed cascade of raw-content
//!   locations (branch x filename) per repository and returns the first hit.
//!
//! Both operations always return a formatted text report; every failure
//! class is rendered as prefixed lines inside the report rather than raised
//! past the tool boundary.

pub mod client;
mod error;
mod readme;
mod report;
mod tool;
mod trending;
mod types;

pub use client::HttpClient;
pub use error::{FetchError, TrendingError};
pub use readme::{
    resolve_readme, BRANCHES, MAX_README_CHARS, README_FILES, TRUNCATION_MARKER,
};
pub use report::{render_readme_reports, render_trending, render_trending_error};
pub use tool::{Tool, ToolBuilder};
pub use trending::{parse_listing, trending_url, NO_DESCRIPTION, UNKNOWN_LANGUAGE};
pub use types::{ReadmeLookup, ReadmeRequest, Since, TrendingEntry, TrendingRequest};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Trendkit/1.0";

/// Site root for the trending listing page and project links
pub const GITHUB_BASE_URL: &str = "https://github.com";

/// Raw-content endpoint probed for README files
pub const RAW_CONTENT_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Description of the trending tool for LLM consumption
pub const TRENDING_TOOL_DESCRIPTION: &str = r#"Gets GitHub trending repositories by scraping the public trending page.

- Time windows: daily, weekly, monthly (default daily)
- Optional programming language filter (e.g. "rust", "python")
- Returns title, link, description, language, total stars, forks, and stars gained in the window"#;

/// Description of the README tool for LLM consumption
pub const README_TOOL_DESCRIPTION: &str = r#"Gets README documentation for GitHub repositories.

- Accepts a list of "owner/repository-name" identifiers
- Probes main and master branches across common README filenames
- Truncates very large files and reports the exact source location"#;

/// Extended documentation for LLM consumption (llmtxt)
pub const TOOL_LLMTXT: &str = r#"# Trendkit Tools

Discover trending GitHub repositories and fetch their documentation.

## get_github_trending

Scrapes the public GitHub trending page.

### Input Parameters
- `since` (optional): "daily", "weekly", or "monthly" (default: "daily")
- `language` (optional): programming language filter, e.g. "rust"

### Output
A text report listing each trending project with its link, description,
language, total stars, forks, and stars gained within the window.

## get_repository_readme

Fetches README files from the raw-content endpoint.

### Input Parameters
- `repositories` (required): list of "owner/repository-name" strings

### Output
A text report with one block per repository: either the README content and
its exact source URL, or the list of locations that were tried.

## Suggested flow
1. Call get_github_trending to discover interesting repositories
2. Call get_repository_readme with the repositories worth a closer look

## Error Handling
- Invalid parameters are reported as error lines, never raised
- Network failures include the attempted URL
- Repositories without a reachable README list every tried candidate
"#;
