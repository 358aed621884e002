//! Filter, sort, and paging parameter models.

use serde::{Deserialize, Serialize};

use crate::config::filters;
use crate::error::{CriteriaError, CriteriaResult};

/// Filter criteria for a paper collection.
///
/// Every field defaults to its full permissive range, so a default criteria
/// set is an identity transform over any realistic paper collection. Ranges
/// are closed intervals; `min > max` is a configuration error caught by
/// [`FilterCriteria::validate`], not a runtime data error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Publication year range (inclusive). Papers without a year always pass.
    #[serde(default = "filters::default_year_range")]
    pub year_range: (i32, i32),

    /// Citation-velocity range (citations per year, inclusive). Only
    /// evaluated when both citation count and year are present.
    #[serde(default = "filters::default_citations_per_year_range")]
    pub citations_per_year_range: (f64, f64),

    /// Author-count range (inclusive). Always evaluated; zero-author papers
    /// are included only when the lower bound is 0.
    #[serde(default = "filters::default_author_count_range")]
    pub author_count_range: (usize, usize),

    /// Minimum quality score. Papers without a quality score always pass.
    #[serde(default)]
    pub minimum_quality_score: f64,

    /// Keep only open-access papers.
    #[serde(default)]
    pub open_access_only: bool,

    /// Keep only papers with a direct PDF URL.
    #[serde(default)]
    pub has_pdf_only: bool,

    /// Selected publication types. Empty = no restriction; otherwise a paper
    /// passes if ANY of its types case-insensitively contains ANY selection.
    #[serde(default)]
    pub publication_types: Vec<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            year_range: filters::default_year_range(),
            citations_per_year_range: filters::default_citations_per_year_range(),
            author_count_range: filters::default_author_count_range(),
            minimum_quality_score: 0.0,
            open_access_only: false,
            has_pdf_only: false,
            publication_types: Vec::new(),
        }
    }
}

impl FilterCriteria {
    /// Check range ordering and threshold bounds.
    pub fn validate(&self) -> CriteriaResult<()> {
        if self.year_range.0 > self.year_range.1 {
            return Err(CriteriaError::invalid_range(
                "yearRange",
                f64::from(self.year_range.0),
                f64::from(self.year_range.1),
            ));
        }
        if self.citations_per_year_range.0 > self.citations_per_year_range.1 {
            return Err(CriteriaError::invalid_range(
                "citationsPerYearRange",
                self.citations_per_year_range.0,
                self.citations_per_year_range.1,
            ));
        }
        if self.author_count_range.0 > self.author_count_range.1 {
            return Err(CriteriaError::invalid_range(
                "authorCountRange",
                self.author_count_range.0 as f64,
                self.author_count_range.1 as f64,
            ));
        }
        if !(0.0..=100.0).contains(&self.minimum_quality_score) {
            return Err(CriteriaError::ThresholdOutOfRange {
                field: "minimumQualityScore",
                value: self.minimum_quality_score,
            });
        }
        Ok(())
    }

    /// How many criteria depart from their defaults.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let defaults = Self::default();
        let mut count = 0;
        count += usize::from(self.year_range != defaults.year_range);
        count +=
            usize::from(self.citations_per_year_range != defaults.citations_per_year_range);
        count += usize::from(self.author_count_range != defaults.author_count_range);
        count += usize::from(self.minimum_quality_score > 0.0);
        count += usize::from(self.open_access_only);
        count += usize::from(self.has_pdf_only);
        count += usize::from(!self.publication_types.is_empty());
        count
    }
}

/// Sortable paper fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Composite score, falling back to capped quality, then 0.
    #[default]
    QualityScore,

    /// Publication year (missing = 0).
    PublicationYear,

    /// Raw citation count (missing = 0).
    Citations,

    /// Citations per year (0 when inputs are missing).
    CitationsPerYear,

    /// Alias for the composite score ordering.
    Relevance,

    /// Number of listed authors.
    AuthorCount,

    /// Title, compared case-insensitively.
    Title,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,

    /// Descending.
    #[default]
    Desc,
}

/// A sort field plus direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    /// Field to order by.
    #[serde(default)]
    pub field: SortField,

    /// Direction to order in.
    #[serde(default)]
    pub direction: SortDirection,
}
