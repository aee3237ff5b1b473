//! URI construction and pagination URL inspection
//!
//! Vimeo identifies every resource by a URI path (`/videos/123`,
//! `/users/456/projects/789`). These helpers build the per-user base URI and
//! pick apart the paging URLs the API returns in listing envelopes.

use std::sync::LazyLock;

use regex::Regex;

/// Matches the `page=N` query parameter in a paging URL.
static PAGE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"page=(\d+)").expect("page regex is valid"));

/// Build the base resource URI for a user.
///
/// Returns `/users/{id}` when a non-zero user id is given, otherwise `/me`
/// (the authenticated user). A zero id is treated as absent.
pub fn build_user_uri(user_id: Option<u64>) -> String {
    match user_id {
        Some(id) if id != 0 => format!("/users/{}", id),
        _ => "/me".to_string(),
    }
}

/// Extract the page number from a paging URL such as `/me/videos?page=3`.
///
/// Returns `1` when the URL carries no `page=` parameter, including for
/// empty or entirely non-matching strings. Page numbers are `u64` so a
/// large-but-valid parameter is never conflated with an absent one.
pub fn extract_page_number(url: &str) -> u64 {
    PAGE_PARAM
        .captures(url)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(1)
}

/// Extract the numeric id from a video URI (`/videos/123456` -> `123456`).
pub fn video_id_from_uri(uri: &str) -> Option<&str> {
    last_segment(uri)
}

/// Extract the numeric id from a project URI (`/users/1/projects/42` -> `42`).
pub fn project_id_from_uri(uri: &str) -> Option<&str> {
    last_segment(uri)
}

/// Check whether a listing contains an entry with the given URI.
///
/// `entries` are the `data` objects of a pagination envelope; entries
/// without a `uri` field never match.
pub fn uri_in_listing(uri: &str, entries: &[serde_json::Value]) -> bool {
    entries
        .iter()
        .any(|entry| entry.get("uri").and_then(|v| v.as_str()) == Some(uri))
}

fn last_segment(uri: &str) -> Option<&str> {
    uri.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
}
