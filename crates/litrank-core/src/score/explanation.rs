//! Parsing of the reranker's relevance-explanation text.
//!
//! The backend encodes three relevance sub-scores in a human-readable string,
//! e.g. `"Semantic match: 82%, keyword match: 60%, theme fit: 74%"`. Parsing
//! is all-or-nothing: a missing component or a non-numeric capture yields
//! `None`, never partial data, so callers can treat `None` as "breakdown
//! unavailable".

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::normalize::normalize_score;

// The gap between label and number admits separators only, so a label with a
// missing value cannot steal the next component's number.
static SEMANTIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)semantic(?:\s+match)?[\s:=-]*(\d+(?:\.\d+)?)\s*%").unwrap()
});
static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:keyword(?:\s+match)?|bm25)[\s:=-]*(\d+(?:\.\d+)?)\s*%").unwrap()
});
static THEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)theme(?:\s+fit)?[\s:=-]*(\d+(?:\.\d+)?)\s*%").unwrap()
});

/// The three sub-scores behind a neural relevance score, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelevanceBreakdown {
    /// Embedding-similarity component.
    pub semantic: f64,

    /// Keyword/BM25 component.
    pub keyword: f64,

    /// Theme-fit component.
    pub theme_fit: f64,
}

/// Parse an explanation string into its three sub-scores.
///
/// Returns `None` unless all three components parse to numbers; captured
/// values outside 0-100 are clamped.
#[must_use]
pub fn parse_explanation(text: &str) -> Option<RelevanceBreakdown> {
    Some(RelevanceBreakdown {
        semantic: capture_percent(&SEMANTIC_RE, text)?,
        keyword: capture_percent(&KEYWORD_RE, text)?,
        theme_fit: capture_percent(&THEME_RE, text)?,
    })
}

fn capture_percent(re: &Regex, text: &str) -> Option<f64> {
    let raw = re.captures(text)?.get(1)?.as_str();
    normalize_score(raw.parse::<f64>().ok())
}
