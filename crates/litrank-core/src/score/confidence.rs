//! Confidence estimation from metadata completeness.
//!
//! A quality score computed from sparse metadata is mostly prior. The
//! estimator counts how many supporting signal categories were available and
//! derives a confidence label plus a hard ceiling the score may not be
//! displayed or ranked above.

use serde::Serialize;

use crate::config::confidence::{SCORE_CAPS, TOTAL_METRICS};
use crate::models::Paper;

/// Presence flags for the fixed signal set behind a quality score.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataSignals {
    /// Citation count is known.
    pub has_citations: bool,

    /// Journal prestige metrics are known.
    pub has_journal_metrics: bool,

    /// Publication year is known.
    pub has_year: bool,

    /// An abstract is available.
    pub has_abstract: bool,
}

impl MetadataSignals {
    /// Derive signal flags from a paper's own fields.
    #[must_use]
    pub fn from_paper(paper: &Paper) -> Self {
        Self {
            has_citations: paper.citation_count.is_some(),
            has_journal_metrics: paper
                .quality_score_breakdown
                .as_ref()
                .is_some_and(|b| b.journal_prestige.is_some()),
            has_year: paper.year.is_some(),
            has_abstract: paper.r#abstract.as_deref().is_some_and(|a| !a.is_empty()),
        }
    }

    /// Number of present signals, in `0..=TOTAL_METRICS`.
    #[must_use]
    pub const fn count(self) -> u8 {
        self.has_citations as u8
            + self.has_journal_metrics as u8
            + self.has_year as u8
            + self.has_abstract as u8
    }
}

/// Confidence level behind a quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// No supporting signals.
    VeryLow,

    /// One signal.
    Low,

    /// Two signals.
    Moderate,

    /// Three signals.
    Good,

    /// All four signals.
    High,
}

impl ConfidenceLevel {
    /// Level for a signal count (counts above the set size saturate at High).
    #[must_use]
    pub const fn for_count(available_metrics: u8) -> Self {
        match available_metrics {
            0 => Self::VeryLow,
            1 => Self::Low,
            2 => Self::Moderate,
            3 => Self::Good,
            _ => Self::High,
        }
    }

    /// Display text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }
}

/// Ceiling a quality score may not exceed, given the signal count.
#[must_use]
pub fn score_cap(available_metrics: u8) -> f64 {
    let index = available_metrics.min(TOTAL_METRICS) as usize;
    SCORE_CAPS[index]
}

/// A confidence estimate for one paper's quality score.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceEstimate {
    /// Signals present.
    pub available_metrics: u8,

    /// Size of the signal set.
    pub total_metrics: u8,

    /// Confidence level.
    pub level: ConfidenceLevel,

    /// Quality-score ceiling implied by the signal count.
    pub score_cap: f64,
}

/// Estimate confidence from signal flags.
#[must_use]
pub fn estimate(signals: MetadataSignals) -> ConfidenceEstimate {
    estimate_from_count(signals.count())
}

/// Estimate confidence from a precomputed signal count.
#[must_use]
pub fn estimate_from_count(available_metrics: u8) -> ConfidenceEstimate {
    let available_metrics = available_metrics.min(TOTAL_METRICS);
    ConfidenceEstimate {
        available_metrics,
        total_metrics: TOTAL_METRICS,
        level: ConfidenceLevel::for_count(available_metrics),
        score_cap: score_cap(available_metrics),
    }
}

/// Confidence for a paper, preferring the backend's completeness count and
/// deriving one from the paper's fields otherwise.
#[must_use]
pub fn for_paper(paper: &Paper) -> ConfidenceEstimate {
    match &paper.metadata_completeness {
        Some(completeness) => estimate_from_count(completeness.available_metrics),
        None => estimate(MetadataSignals::from_paper(paper)),
    }
}
