//! README resolution
//!
//! Per repository, candidate raw-content locations are probed in a fixed
//! priority order: branch is the outer loop, filename the inner one, so
//! every filename is tried on `main` before any is tried on `master`. The
//! first 200 wins. Individual candidate failures, transport errors
//! included, advance the cascade silently.

use crate::client::HttpClient;
use crate::types::ReadmeLookup;
use std::time::Duration;
use tracing::debug;

/// Branches probed, in priority order
pub const BRANCHES: [&str; 2] = ["main", "master"];

/// Filenames probed on each branch, in priority order
pub const README_FILES: [&str; 5] = [
    "README.md",
    "readme.md",
    "Readme.md",
    "README.txt",
    "readme.txt",
];

/// Per-candidate request timeout
const CANDIDATE_TIMEOUT: Duration = Duration::from_secs(20);

/// Longest README returned untouched, in characters
pub const MAX_README_CHARS: usize = 50_000;

/// Marker appended when a body was cut at the limit
pub const TRUNCATION_MARKER: &str = "\n\n... [Content too long, truncated] ...";

/// Candidate URL on the raw-content endpoint
fn candidate_url(raw_base: &str, repository: &str, branch: &str, filename: &str) -> String {
    format!(
        "{}/{repository}/refs/heads/{branch}/{filename}",
        raw_base.trim_end_matches('/')
    )
}

/// Resolve one repository identifier through the candidate cascade
///
/// Returns `None` when the trimmed identifier is empty; that position is
/// skipped in batch output. A malformed identifier (no `/`) produces a
/// not-found lookup without any network call.
pub async fn resolve_readme(
    client: &HttpClient,
    raw_base: &str,
    repository: &str,
) -> Option<ReadmeLookup> {
    let repository = repository.trim();
    if repository.is_empty() {
        return None;
    }

    if !repository.contains('/') {
        return Some(ReadmeLookup {
            repository: repository.to_string(),
            found: false,
            source_url: None,
            content: None,
            truncated: false,
            error: Some(format!(
                "Invalid repository name format: {repository} (correct format is owner/repository-name)"
            )),
        });
    }

    for branch in BRANCHES {
        for filename in README_FILES {
            let url = candidate_url(raw_base, repository, branch, filename);
            match client.get(&url, CANDIDATE_TIMEOUT).await {
                Ok((200, body)) => {
                    let (content, truncated) = clip_content(body);
                    debug!(%url, truncated, "README candidate hit");
                    return Some(ReadmeLookup {
                        repository: repository.to_string(),
                        found: true,
                        source_url: Some(url),
                        content: Some(content),
                        truncated,
                        error: None,
                    });
                }
                Ok((status, _)) => {
                    debug!(%url, status, "README candidate miss");
                }
                Err(err) => {
                    // A dead candidate host is a miss, not a batch failure.
                    debug!(%url, error = %err, "README candidate fetch failed");
                }
            }
        }
    }

    Some(ReadmeLookup {
        repository: repository.to_string(),
        found: false,
        source_url: None,
        content: None,
        truncated: false,
        error: Some(format!(
            "README file not found (tried branches: {}; tried files: {})",
            BRANCHES.join(", "),
            README_FILES.join(", ")
        )),
    })
}

/// Cut the body at the character limit, appending the marker when anything
/// was removed
fn clip_content(body: String) -> (String, bool) {
    match body.char_indices().nth(MAX_README_CHARS) {
        Some((byte_index, _)) => {
            let mut clipped = body[..byte_index].to_string();
            clipped.push_str(TRUNCATION_MARKER);
            (clipped, true)
        }
        None => (body, false),
    }
}
