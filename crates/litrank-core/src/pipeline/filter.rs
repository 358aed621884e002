//! Conjunctive predicate filtering over a paper collection.
//!
//! A paper passes only if it passes every active predicate. Predicates are
//! permissive about missing data: a criterion that cannot be evaluated
//! because the paper lacks the relevant field passes rather than filtering
//! the paper out (the author-count predicate is the one exception, since an
//! absent author list is a real count of zero).

use crate::access::{AccessStatus, classify_access};
use crate::models::{FilterCriteria, Paper};

/// Filter a collection, preserving order. Papers are never duplicated; the
/// default criteria set returns the input unchanged.
#[must_use]
pub fn apply_filters(papers: &[Paper], criteria: &FilterCriteria, current_year: i32) -> Vec<Paper> {
    papers
        .iter()
        .filter(|paper| paper_passes(paper, criteria, current_year))
        .cloned()
        .collect()
}

/// Whether a single paper passes every predicate.
#[must_use]
pub fn paper_passes(paper: &Paper, criteria: &FilterCriteria, current_year: i32) -> bool {
    passes_year(paper, criteria)
        && passes_citation_velocity(paper, criteria, current_year)
        && passes_author_count(paper, criteria)
        && passes_minimum_quality(paper, criteria)
        && passes_open_access(paper, criteria)
        && passes_has_pdf(paper, criteria)
        && passes_publication_types(paper, criteria)
}

fn passes_year(paper: &Paper, criteria: &FilterCriteria) -> bool {
    // Missing year is not filtered out.
    paper
        .year
        .is_none_or(|year| criteria.year_range.0 <= year && year <= criteria.year_range.1)
}

fn passes_citation_velocity(paper: &Paper, criteria: &FilterCriteria, current_year: i32) -> bool {
    // Only evaluated when both citation count and year are present.
    paper.citations_per_year(current_year).is_none_or(|velocity| {
        criteria.citations_per_year_range.0 <= velocity
            && velocity <= criteria.citations_per_year_range.1
    })
}

fn passes_author_count(paper: &Paper, criteria: &FilterCriteria) -> bool {
    let count = paper.author_count();
    criteria.author_count_range.0 <= count && count <= criteria.author_count_range.1
}

fn passes_minimum_quality(paper: &Paper, criteria: &FilterCriteria) -> bool {
    paper.quality_score.is_none_or(|quality| quality >= criteria.minimum_quality_score)
}

fn passes_open_access(paper: &Paper, criteria: &FilterCriteria) -> bool {
    !criteria.open_access_only || classify_access(paper) == AccessStatus::OpenAccess
}

fn passes_has_pdf(paper: &Paper, criteria: &FilterCriteria) -> bool {
    !criteria.has_pdf_only || paper.pdf_url.as_deref().is_some_and(|url| !url.is_empty())
}

fn passes_publication_types(paper: &Paper, criteria: &FilterCriteria) -> bool {
    if criteria.publication_types.is_empty() {
        return true;
    }
    // ANY-of with substring semantics: "journal" selects "JournalArticle".
    paper.publication_types.iter().any(|paper_type| {
        let paper_type = paper_type.to_lowercase();
        criteria
            .publication_types
            .iter()
            .any(|selected| paper_type.contains(&selected.to_lowercase()))
    })
}
