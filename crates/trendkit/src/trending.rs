//! Trending page scraping
//!
//! The listing page is third-party HTML, so every field is an independent
//! lookup with its own fallback: a missing description or star count never
//! voids the entry, and a fragment without a title link is skipped without
//! aborting the batch. Only the title and link are mandatory.

use crate::client::HttpClient;
use crate::error::TrendingError;
use crate::types::{Since, TrendingEntry};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Timeout for the listing page request
const PAGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Fallback when an entry has no description paragraph
pub const NO_DESCRIPTION: &str = "No description";

/// Fallback when an entry has no language tag
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// CSS selectors for the listing fragments and their fields
///
/// All selectors are static strings; parsing them cannot fail.
struct Selectors {
    row: Selector,
    title_link: Selector,
    description: Selector,
    language: Selector,
    stars: Selector,
    forks: Selector,
    spans: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            row: Selector::parse("article.Box-row").unwrap(),
            title_link: Selector::parse("h2 a").unwrap(),
            description: Selector::parse("p.col-9").unwrap(),
            language: Selector::parse(r#"span[itemprop="programmingLanguage"]"#).unwrap(),
            stars: Selector::parse(r#"a[href$="/stargazers"]"#).unwrap(),
            forks: Selector::parse(r#"a[href$="/forks"]"#).unwrap(),
            spans: Selector::parse("span").unwrap(),
        }
    }
}

/// Build the listing URL for a window and optional language filter
pub fn trending_url(base: &str, since: Since, language: &str) -> String {
    let base = base.trim_end_matches('/');
    if language.is_empty() {
        format!("{base}/trending?since={since}")
    } else {
        format!("{base}/trending/{}?since={since}", language.to_lowercase())
    }
}

/// Fetch and parse the trending listing
///
/// Validates `since` before touching the network. A transport failure or
/// non-2xx status is an error carrying the attempted URL; a page with no
/// recognizable project fragments is reported as [`TrendingError::NoEntries`],
/// distinct from network trouble since it usually means the page layout
/// changed.
pub(crate) async fn fetch_trending(
    client: &HttpClient,
    base_url: &str,
    since: &str,
    language: &str,
) -> Result<(Since, Vec<TrendingEntry>), TrendingError> {
    let since = Since::from_str(since).map_err(TrendingError::InvalidSince)?;
    let url = trending_url(base_url, since, language);

    let (status, body) = client
        .get(&url, PAGE_TIMEOUT)
        .await
        .map_err(|source| TrendingError::Request {
            url: url.clone(),
            source,
        })?;

    if !(200..300).contains(&status) {
        return Err(TrendingError::Status { url, status });
    }

    let (fragments, entries) = parse_listing(&body, base_url, since);
    if fragments == 0 {
        return Err(TrendingError::NoEntries { url });
    }

    debug!(fragments, entries = entries.len(), %url, "parsed trending listing");
    Ok((since, entries))
}

/// Extract all entries from a listing page body
///
/// Returns the number of project fragments located alongside the extracted
/// entries; fragments without a title link are counted but skipped.
pub fn parse_listing(html: &str, site_root: &str, since: Since) -> (usize, Vec<TrendingEntry>) {
    let selectors = Selectors::new();
    let period_pattern = Regex::new(r"(?i)(\d+[,\d]*)\s*stars?").unwrap();
    let document = Html::parse_document(html);

    let mut fragments = 0;
    let mut entries = Vec::new();
    for row in document.select(&selectors.row) {
        fragments += 1;
        match extract_entry(row, &selectors, &period_pattern, site_root, since) {
            Some(entry) => entries.push(entry),
            None => debug!(index = fragments, "skipping listing fragment without a title link"),
        }
    }
    (fragments, entries)
}

/// Extract one entry from a project fragment, or `None` when the mandatory
/// title link is missing
fn extract_entry(
    row: ElementRef<'_>,
    selectors: &Selectors,
    period_pattern: &Regex,
    site_root: &str,
    since: Since,
) -> Option<TrendingEntry> {
    let title_link = row.select(&selectors.title_link).next()?;

    // Listing titles span multiple lines; collapse to single spaces.
    let title = collapse_whitespace(&element_text(title_link));
    if title.is_empty() {
        return None;
    }

    let href = title_link.value().attr("href")?;
    let url = resolve_project_url(site_root, href)?;

    let description = text_or(row, &selectors.description, NO_DESCRIPTION);
    let language = text_or(row, &selectors.language, UNKNOWN_LANGUAGE);
    let total_stars = text_or(row, &selectors.stars, "0");
    let total_forks = text_or(row, &selectors.forks, "0");
    let period_stars = period_stars(row, &selectors.spans, period_pattern, since);

    Some(TrendingEntry {
        title,
        url,
        description,
        language,
        total_stars,
        total_forks,
        period_stars,
    })
}

/// First match of `selector` under `row` as collapsed text, or the fallback
fn text_or(row: ElementRef<'_>, selector: &Selector, fallback: &str) -> String {
    row.select(selector)
        .next()
        .map(|el| collapse_whitespace(&element_text(el)))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Stars gained within the window, scanned out of auxiliary label spans
///
/// The first span whose text mentions "stars" together with the window
/// phrase ends the scan, whether or not a numeric token was found. The
/// substring match is heuristic by design; the page structure is not ours
/// to control.
fn period_stars(
    row: ElementRef<'_>,
    spans: &Selector,
    pattern: &Regex,
    since: Since,
) -> String {
    for span in row.select(spans) {
        let text = collapse_whitespace(&element_text(span));
        let lower = text.to_lowercase();
        if lower.contains("stars") && lower.contains(since.window_phrase()) {
            if let Some(caps) = pattern.captures(&text) {
                return caps[1].to_string();
            }
            break;
        }
    }
    "0".to_string()
}

/// Resolve a listing href against the site root into an absolute URL
fn resolve_project_url(site_root: &str, href: &str) -> Option<String> {
    if href.is_empty() {
        return None;
    }
    let base = Url::parse(site_root).ok()?;
    base.join(href).ok().map(|url| url.to_string())
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://github.com";

    fn page(rows: &[String]) -> String {
        format!(
            "<!DOCTYPE html><html><body><main>{}</main></body></html>",
            rows.join("\n")
        )
    }

    fn full_row(owner: &str, name: &str) -> String {
        format!(
            r##"<article class="Box-row">
                <h2 class="h3 lh-condensed">
                    <a href="/{owner}/{name}">
                        {owner} /
                        {name}
                    </a>
                </h2>
                <p class="col-9 color-fg-muted my-1 pr-4">A fancy project.</p>
                <div>
                    <span itemprop="programmingLanguage">Rust</span>
                    <a href="/{owner}/{name}/stargazers">12,345</a>
                    <a href="/{owner}/{name}/forks">678</a>
                    <span class="d-inline-block float-sm-right">
                        1,234 stars today
                    </span>
                </div>
            </article>"##
        )
    }

    #[test]
    fn test_full_entry_extraction() {
        let html = page(&[full_row("octo", "spark")]);
        let (fragments, entries) = parse_listing(&html, SITE, Since::Daily);

        assert_eq!(fragments, 1);
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.title, "octo / spark");
        assert_eq!(entry.url, "https://github.com/octo/spark");
        assert_eq!(entry.description, "A fancy project.");
        assert_eq!(entry.language, "Rust");
        assert_eq!(entry.total_stars, "12,345");
        assert_eq!(entry.total_forks, "678");
        assert_eq!(entry.period_stars, "1,234");
    }

    #[test]
    fn test_entries_keep_document_order() {
        let html = page(&[
            full_row("a", "first"),
            full_row("b", "second"),
            full_row("c", "third"),
        ]);
        let (_, entries) = parse_listing(&html, SITE, Since::Daily);

        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["a / first", "b / second", "c / third"]);
    }

    #[test]
    fn test_missing_title_skips_entry_but_not_siblings() {
        let broken = r#"<article class="Box-row"><p class="col-9">No heading here.</p></article>"#;
        let html = page(&[
            full_row("a", "first"),
            broken.to_string(),
            full_row("c", "third"),
        ]);
        let (fragments, entries) = parse_listing(&html, SITE, Since::Daily);

        assert_eq!(fragments, 3);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "a / first");
        assert_eq!(entries[1].title, "c / third");
    }

    #[test]
    fn test_optional_fields_default() {
        let bare = r#"<article class="Box-row">
            <h2 class="h3"><a href="/solo/bare">solo / bare</a></h2>
        </article>"#;
        let html = page(&[bare.to_string()]);
        let (_, entries) = parse_listing(&html, SITE, Since::Daily);

        let entry = &entries[0];
        assert_eq!(entry.description, NO_DESCRIPTION);
        assert_eq!(entry.language, UNKNOWN_LANGUAGE);
        assert_eq!(entry.total_stars, "0");
        assert_eq!(entry.total_forks, "0");
        assert_eq!(entry.period_stars, "0");
    }

    #[test]
    fn test_period_stars_window_must_match() {
        // Label says "this week" but the request was daily
        let row = r#"<article class="Box-row">
            <h2 class="h3"><a href="/o/r">o / r</a></h2>
            <span>500 stars this week</span>
        </article>"#;
        let html = page(&[row.to_string()]);

        let (_, daily) = parse_listing(&html, SITE, Since::Daily);
        assert_eq!(daily[0].period_stars, "0");

        let (_, weekly) = parse_listing(&html, SITE, Since::Weekly);
        assert_eq!(weekly[0].period_stars, "500");
    }

    #[test]
    fn test_period_stars_scan_stops_at_first_label() {
        // First matching span carries no numeric token; the scan stops
        // there instead of falling through to the second one.
        let row = r#"<article class="Box-row">
            <h2 class="h3"><a href="/o/r">o / r</a></h2>
            <span>many stars today</span>
            <span>42 stars today</span>
        </article>"#;
        let html = page(&[row.to_string()]);
        let (_, entries) = parse_listing(&html, SITE, Since::Daily);
        assert_eq!(entries[0].period_stars, "0");
    }

    #[test]
    fn test_multiline_title_collapsed() {
        let row = "<article class=\"Box-row\">\n<h2 class=\"h3\"><a href=\"/big/name\">\n    big\n    /\n\n    name\n</a></h2></article>";
        let html = page(&[row.to_string()]);
        let (_, entries) = parse_listing(&html, SITE, Since::Daily);
        assert_eq!(entries[0].title, "big / name");
    }

    #[test]
    fn test_no_fragments_on_unrelated_page() {
        let (fragments, entries) =
            parse_listing("<html><body><p>maintenance</p></body></html>", SITE, Since::Daily);
        assert_eq!(fragments, 0);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_trending_url_building() {
        assert_eq!(
            trending_url("https://github.com", Since::Daily, ""),
            "https://github.com/trending?since=daily"
        );
        assert_eq!(
            trending_url("https://github.com", Since::Weekly, "Rust"),
            "https://github.com/trending/rust?since=weekly"
        );
        // Trailing slash on the base is tolerated
        assert_eq!(
            trending_url("https://github.com/", Since::Monthly, ""),
            "https://github.com/trending?since=monthly"
        );
    }

    #[test]
    fn test_resolve_project_url() {
        assert_eq!(
            resolve_project_url(SITE, "/owner/repo"),
            Some("https://github.com/owner/repo".to_string())
        );
        assert_eq!(resolve_project_url(SITE, ""), None);
    }
}
