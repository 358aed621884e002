//! Stable sorting of a paper collection.

use std::cmp::Ordering;

use crate::models::{Paper, SortConfig, SortDirection, SortField};

/// Return a new collection ordered by the configured field and direction.
///
/// The sort is stable: equal-key papers keep their relative input order in
/// either direction. Missing numeric values sort as 0; titles compare
/// case-insensitively.
#[must_use]
pub fn sort_papers(papers: &[Paper], config: &SortConfig, current_year: i32) -> Vec<Paper> {
    let mut sorted: Vec<Paper> = papers.to_vec();
    sorted.sort_by(|a, b| {
        let ascending = compare(a, b, config.field, current_year);
        match config.direction {
            SortDirection::Asc => ascending,
            SortDirection::Desc => ascending.reverse(),
        }
    });
    sorted
}

fn compare(a: &Paper, b: &Paper, field: SortField, current_year: i32) -> Ordering {
    match field {
        SortField::QualityScore | SortField::Relevance => {
            compare_f64(a.ranking_score(), b.ranking_score())
        }
        SortField::PublicationYear => a.year.unwrap_or(0).cmp(&b.year.unwrap_or(0)),
        SortField::Citations => {
            a.citation_count.unwrap_or(0).cmp(&b.citation_count.unwrap_or(0))
        }
        SortField::CitationsPerYear => compare_f64(
            a.citations_per_year(current_year).unwrap_or(0.0),
            b.citations_per_year(current_year).unwrap_or(0.0),
        ),
        SortField::AuthorCount => a.author_count().cmp(&b.author_count()),
        SortField::Title => {
            let a_title = a.title_or_default().to_lowercase();
            let b_title = b.title_or_default().to_lowercase();
            a_title.cmp(&b_title)
        }
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    // Keys are finite here (derived values default missing data to 0).
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
