//! Paper data model as delivered by the search backend.

use serde::{Deserialize, Serialize};

use crate::score::normalize::normalize_score;

/// A search-result paper snapshot.
///
/// Every score field is computed upstream and optional; absence means the
/// backend had no basis for the value, which is distinct from zero. The core
/// never mutates a `Paper`, it only derives display values from one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Unique paper ID, stable across a session.
    pub id: String,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Publication venue (journal or conference).
    #[serde(default)]
    pub venue: Option<String>,

    /// Author names in citation order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Digital Object Identifier.
    #[serde(default)]
    pub doi: Option<String>,

    /// Landing-page URL at the publisher.
    #[serde(default)]
    pub url: Option<String>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// Publication type tags (e.g., "JournalArticle", "Review").
    #[serde(default)]
    pub publication_types: Vec<String>,

    /// Backend quality score, 0-100.
    #[serde(default)]
    pub quality_score: Option<f64>,

    /// Sub-scores behind `quality_score`.
    #[serde(default)]
    pub quality_score_breakdown: Option<QualityBreakdown>,

    /// Neural reranker relevance score, 0-100.
    #[serde(default)]
    pub neural_relevance_score: Option<f64>,

    /// Relevance score; legacy rows carry a BM25-only value on a 0-200 scale.
    #[serde(default)]
    pub relevance_score: Option<f64>,

    /// Composite relevance+quality score, 0-100, when precomputed upstream.
    #[serde(default)]
    pub overall_score: Option<f64>,

    /// Rank assigned by the neural reranker (1 = best).
    #[serde(default)]
    pub neural_rank: Option<u32>,

    /// Human-readable reranker explanation encoding three sub-scores.
    #[serde(default)]
    pub neural_explanation: Option<String>,

    /// How many quality-supporting metadata signals the backend found.
    #[serde(default)]
    pub metadata_completeness: Option<MetadataCompleteness>,

    /// Whether full text has been retrieved for this paper.
    #[serde(default)]
    pub has_full_text: Option<bool>,

    /// Full-text retrieval status.
    #[serde(default)]
    pub full_text_status: Option<FullTextStatus>,

    /// Which service supplied the full text.
    #[serde(default)]
    pub full_text_source: Option<FullTextSource>,

    /// Direct URL to a free PDF, when one is known.
    #[serde(default)]
    pub pdf_url: Option<String>,

    /// Whether a free PDF exists (set by sources that do not give a URL).
    #[serde(default)]
    pub has_pdf: Option<bool>,
}

impl Paper {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Number of listed authors (0 when the author list is absent or empty).
    #[must_use]
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// Whether the backend reported any citation information at all.
    ///
    /// `Some(0)` is real data ("no citations yet"); `None` means the count is
    /// unknown and must not be ranked or filtered as if it were zero.
    #[must_use]
    pub const fn has_citation_info(&self) -> bool {
        self.citation_count.is_some()
    }

    /// Citations per year since publication.
    ///
    /// `None` when either the citation count or the year is unknown. Papers
    /// published in `current_year` (or with a future year) divide by 1.
    #[must_use]
    pub fn citations_per_year(&self, current_year: i32) -> Option<f64> {
        let citations = self.citation_count?;
        let year = self.year?;
        let age = (current_year - year).max(1);
        Some(f64::from(citations) / f64::from(age))
    }

    /// Relevance score used for ranking, normalized to 0-100.
    ///
    /// Prefers the neural reranker score. A bare `relevance_score` above 100
    /// is a legacy BM25 value on a 0-200 scale and is halved before clamping.
    #[must_use]
    pub fn effective_relevance(&self) -> Option<f64> {
        if let Some(neural) = normalize_score(self.neural_relevance_score) {
            return Some(neural);
        }
        let raw = self.relevance_score?;
        let rescaled = if raw > 100.0 { raw / 2.0 } else { raw };
        normalize_score(Some(rescaled))
    }

    /// Quality score after the metadata-completeness cap, normalized to 0-100.
    ///
    /// A score backed by few metadata signals is never shown or ranked above
    /// the cap for that signal count.
    #[must_use]
    pub fn capped_quality(&self) -> Option<f64> {
        let quality = normalize_score(self.quality_score)?;
        match &self.metadata_completeness {
            Some(completeness) => {
                let cap = crate::score::confidence::score_cap(completeness.available_metrics);
                Some(quality.min(cap))
            }
            None => Some(quality),
        }
    }

    /// Composite score used for ranking and display.
    ///
    /// Prefers the upstream `overall_score`; falls back to the harmonic mean
    /// of relevance and capped quality only when the composite is missing.
    #[must_use]
    pub fn effective_overall(&self) -> Option<f64> {
        if let Some(upstream) = normalize_score(self.overall_score) {
            return Some(upstream);
        }
        crate::score::composite::harmonic_overall(self.effective_relevance(), self.capped_quality())
    }

    /// Numeric key for quality/relevance sorting: composite, else capped
    /// quality, else 0.
    #[must_use]
    pub fn ranking_score(&self) -> f64 {
        self.effective_overall().or_else(|| self.capped_quality()).unwrap_or(0.0)
    }

    /// Whether a free PDF is available, by URL or by flag.
    #[must_use]
    pub fn has_free_pdf(&self) -> bool {
        self.pdf_url.as_deref().is_some_and(|u| !u.is_empty()) || self.has_pdf == Some(true)
    }
}

/// Sub-scores behind the backend quality score, each 0-100.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityBreakdown {
    /// Citation-impact component.
    #[serde(default)]
    pub citation_impact: Option<f64>,

    /// Journal-prestige component.
    #[serde(default)]
    pub journal_prestige: Option<f64>,

    /// Recency-boost component.
    #[serde(default)]
    pub recency_boost: Option<f64>,

    /// Bonus for verified open access.
    #[serde(default)]
    pub open_access_bonus: bool,

    /// Bonus for a top-ranked venue.
    #[serde(default)]
    pub venue_bonus: bool,
}

/// How many quality-supporting signal categories were available upstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataCompleteness {
    /// Signals present, in `0..=total_metrics`.
    pub available_metrics: u8,

    /// Size of the signal set (currently 4: citations, journal metrics,
    /// year, abstract).
    #[serde(default = "default_total_metrics")]
    pub total_metrics: u8,
}

const fn default_total_metrics() -> u8 {
    crate::config::confidence::TOTAL_METRICS
}

impl Default for MetadataCompleteness {
    fn default() -> Self {
        Self { available_metrics: 0, total_metrics: default_total_metrics() }
    }
}

/// Full-text retrieval status reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullTextStatus {
    /// Full text retrieved and cached.
    Success,

    /// Retrieval in flight.
    Fetching,

    /// Retrieval not attempted yet.
    NotFetched,

    /// Retrieval attempted and failed.
    Failed,

    /// Full text known to exist but not retrieved.
    Available,
}

/// Which service supplied the full text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullTextSource {
    /// Unpaywall open-access resolver.
    Unpaywall,

    /// PubMed Central.
    Pmc,

    /// Any other source.
    #[serde(other)]
    Other,
}

impl FullTextSource {
    /// Sources that guarantee the text is legally free to read.
    #[must_use]
    pub const fn is_open_access(self) -> bool {
        matches!(self, Self::Unpaywall | Self::Pmc)
    }
}
