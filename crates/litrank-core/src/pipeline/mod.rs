//! The filter → sort → paginate pipeline.
//!
//! Deterministic, synchronous, and side-effect free: calling it again with
//! the same inputs produces the same view, and the input collection is never
//! mutated.

pub mod filter;
pub mod paginate;
pub mod sort;

use chrono::Datelike;
use serde::Serialize;

use crate::config::Config;
use crate::error::{CriteriaError, CriteriaResult};
use crate::models::{FilterCriteria, Paper, SortConfig};

pub use filter::{apply_filters, paper_passes};
pub use paginate::{Page, PageMeta, paginate};
pub use sort::sort_papers;

/// The user-facing view of a search result set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    /// Papers on the current page, filtered and sorted.
    pub visible_papers: Vec<Paper>,

    /// Page metadata.
    pub page_meta: PageMeta,

    /// How many filter criteria depart from their defaults.
    pub active_filter_count: usize,
}

/// Filter and sort a collection without paginating.
///
/// This is the "visible set" the selection synchronizer tracks.
pub fn filter_and_sort(
    papers: &[Paper],
    criteria: &FilterCriteria,
    sort: &SortConfig,
    current_year: i32,
) -> CriteriaResult<Vec<Paper>> {
    criteria.validate()?;
    let filtered = apply_filters(papers, criteria, current_year);
    tracing::debug!(
        input = papers.len(),
        kept = filtered.len(),
        active_filters = criteria.active_count(),
        "filtered papers"
    );
    Ok(sort_papers(&filtered, sort, current_year))
}

/// Run the full pipeline for one page.
///
/// `page_number` is 1-based and must not exceed the total page count for the
/// filtered set; the caller clamps before calling.
pub fn run(
    papers: &[Paper],
    criteria: &FilterCriteria,
    sort: &SortConfig,
    page_number: usize,
    config: &Config,
    current_year: i32,
) -> CriteriaResult<SearchView> {
    if page_number == 0 {
        return Err(CriteriaError::InvalidPage);
    }
    let ordered = filter_and_sort(papers, criteria, sort, current_year)?;
    let page = paginate(&ordered, config.page_size, page_number);
    tracing::debug!(
        page = page_number,
        total_pages = page.meta.total_pages,
        total_results = page.meta.total_results,
        "built search view"
    );
    Ok(SearchView {
        visible_papers: page.items,
        page_meta: page.meta,
        active_filter_count: criteria.active_count(),
    })
}

/// [`run`] with the current year taken from the system clock.
pub fn run_now(
    papers: &[Paper],
    criteria: &FilterCriteria,
    sort: &SortConfig,
    page_number: usize,
    config: &Config,
) -> CriteriaResult<SearchView> {
    run(papers, criteria, sort, page_number, config, chrono::Utc::now().year())
}
