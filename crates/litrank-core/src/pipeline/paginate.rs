//! Page slicing and display metadata.

use serde::Serialize;

use crate::models::Paper;

/// Display metadata for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total pages; at least 1 even for an empty result set.
    pub total_pages: usize,

    /// 1-based inclusive index of the first item on this page.
    pub start_index: usize,

    /// 1-based inclusive index of the last item on this page (0 when the
    /// result set is empty).
    pub end_index: usize,

    /// Total results across all pages.
    pub total_results: usize,
}

/// One page of papers plus its metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Papers on this page.
    pub items: Vec<Paper>,

    /// Display metadata.
    pub meta: PageMeta,
}

/// Slice a sorted/filtered collection into the requested page.
///
/// `page_number` is 1-based. Requesting a page beyond `total_pages` is a
/// caller error; the slice comes back empty but the indices are not clamped,
/// so the caller can detect the overshoot.
#[must_use]
pub fn paginate(papers: &[Paper], page_size: usize, page_number: usize) -> Page {
    debug_assert!(page_size > 0, "page size must be positive");
    debug_assert!(page_number > 0, "page numbers are 1-based");

    let total_results = papers.len();
    let total_pages = (total_results.div_ceil(page_size)).max(1);
    let offset = page_number.saturating_sub(1).saturating_mul(page_size);

    let items: Vec<Paper> = papers.iter().skip(offset).take(page_size).cloned().collect();

    Page {
        items,
        meta: PageMeta {
            total_pages,
            start_index: offset + 1,
            end_index: (offset + page_size).min(total_results),
            total_results,
        },
    }
}
