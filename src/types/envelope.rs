//! Pagination envelope
//!
//! Every list-style Vimeo endpoint responds with the same
//! `{total, page, per_page, paging, data}` shape.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of records across all pages
    pub total: u64,

    /// Page number of this page (1-based)
    pub page: u64,

    /// Records per page requested
    pub per_page: u32,

    /// Paging URLs; absent on some single-page responses
    #[serde(default)]
    pub paging: Option<Paging>,

    /// The records on this page
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Whether a page after this one exists
    pub fn has_next(&self) -> bool {
        self.paging
            .as_ref()
            .is_some_and(|paging| paging.next.is_some())
    }
}

/// Relative paging URLs of an envelope
///
/// Only the `page=` query parameter of `next`/`last` is consumed by this
/// crate; the URLs are otherwise opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paging {
    /// URL of the next page, `null` on the last page
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page, `null` on the first page
    #[serde(default)]
    pub previous: Option<String>,

    /// URL of the first page
    #[serde(default)]
    pub first: Option<String>,

    /// URL of the last page
    #[serde(default)]
    pub last: Option<String>,
}
