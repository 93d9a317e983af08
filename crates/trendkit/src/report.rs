//! Report rendering
//!
//! The tool boundary always answers with readable text, so every structured
//! outcome, success or failure, is converted to report lines here and
//! nowhere else. Pure formatting; no decision logic.

use crate::error::TrendingError;
use crate::types::{ReadmeLookup, Since, TrendingEntry};
use chrono::Local;

/// Render the trending report
pub fn render_trending(since: Since, language: &str, entries: &[TrendingEntry]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("🌟 GitHub Trending Repositories".to_string());
    lines.push(format!(
        "📅 Retrieved on: {}",
        Local::now().format("%Y-%m-%d %A")
    ));
    lines.push(format!("⏰ Time Range: {}", since.label()));
    if !language.is_empty() {
        lines.push(format!("💻 Language: {language}"));
    }
    lines.push(format!("📊 Found {} trending projects", entries.len()));
    lines.push(String::new());

    for (index, entry) in entries.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, entry.title));
        lines.push(format!("   🔗 {}", entry.url));
        lines.push(format!("   📝 {}", entry.description));
        lines.push(format!(
            "   💻 Language: {} | ⭐ Total Stars: {} | 🍴 Forks: {} | 🔥 {}: +{}",
            entry.language,
            entry.total_stars,
            entry.total_forks,
            since.label(),
            entry.period_stars
        ));
    }

    lines.push(String::new());
    lines.push("💡 Suggested next steps:".to_string());
    lines.push("1. Analyze GitHub trending project trends".to_string());
    lines.push(
        "2. If interested in specific projects, use get_repository_readme to get detailed documentation"
            .to_string(),
    );

    lines.join("\n")
}

/// Render a trending failure as report text
///
/// Each error class gets distinct wording: validation problems are a single
/// line, transport and status failures name the attempted URL, and an
/// entry-less page is flagged as a possible layout change.
pub fn render_trending_error(err: &TrendingError) -> String {
    match err {
        TrendingError::InvalidSince(message) => format!("❌ Error: {message}"),
        TrendingError::Request { url, source } => format!(
            "❌ Network request error: {source}\nRequested URL: {url}\nSuggest checking network connection or retrying later"
        ),
        TrendingError::Status { url, status } => format!(
            "❌ Network request error: trending page returned HTTP {status}\nRequested URL: {url}\nSuggest checking network connection or retrying later"
        ),
        TrendingError::NoEntries { url } => format!(
            "❌ No trending projects found, possible page structure change or network issue\nRequested URL: {url}"
        ),
    }
}

/// Render the README batch report
pub fn render_readme_reports(lookups: &[ReadmeLookup]) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("📚 GitHub Repository README Documents".to_string());

    for lookup in lookups {
        if lookup.found {
            let source = lookup.source_url.as_deref().unwrap_or_default();
            lines.push(format!("✅ Successfully retrieved (Source: {source})"));
            lines.push(format!("Repository: {}", lookup.repository));
            lines.push("README:".to_string());
            lines.push(lookup.content.clone().unwrap_or_default());
        } else {
            let detail = lookup.error.as_deref().unwrap_or("README not retrieved");
            lines.push(format!("❌ {detail}"));
            lines.push(format!("Repository: {}", lookup.repository));
            lines.push("README: No readable README file found".to_string());
        }
        lines.push("---".to_string());
        lines.push(String::new());
    }

    lines.push("💡 Suggested next steps:".to_string());
    lines.push("- 1. Analyze detailed information and technical features of each project".to_string());
    lines.push("- 2. If particularly interested in a project, further study its implementation details".to_string());
    lines.push("- 3. Summarize technical highlights and application scenarios of the projects".to_string());

    lines.join("\n")
}

/// Report for an empty repositories argument
pub fn render_empty_repositories_error() -> String {
    "❌ Error: repositories parameter cannot be empty, please provide at least one repository name"
        .to_string()
}
