//! JSON output formatting.

use serde_json::{Value, json};

use crate::access::classify_access;
use crate::models::Paper;
use crate::pipeline::SearchView;
use crate::score::{MatchLabel, QualityTier, confidence, parse_explanation};

/// Create a compact paper representation with its derived display values.
#[must_use]
pub fn compact_paper(paper: &Paper) -> Value {
    let estimate = confidence::for_paper(paper);
    let mut obj = json!({
        "id": paper.id,
        "title": paper.title_or_default(),
        "year": paper.year,
        "access": classify_access(paper).label(),
        "confidence": estimate.level.label(),
    });

    if !paper.authors.is_empty() {
        obj["authors"] = json!(paper.authors);
    }

    if let Some(venue) = &paper.venue {
        obj["venue"] = json!(venue);
    }

    if let Some(doi) = &paper.doi {
        obj["doi"] = json!(doi);
    }

    // "no citation info" is rendered as absence, never as 0.
    if let Some(citations) = paper.citation_count {
        obj["citations"] = json!(citations);
    }

    if let Some(overall) = paper.effective_overall() {
        obj["overallScore"] = json!(overall.round());
        if let Some(label) = MatchLabel::for_score(Some(overall)) {
            obj["matchLabel"] = json!(label.label());
        }
    }

    if let Some(quality) = paper.capped_quality() {
        obj["qualityScore"] = json!(quality.round());
        if let Some(tier) = QualityTier::for_score(Some(quality)) {
            obj["qualityTier"] = json!(tier.label());
        }
    }

    if let Some(breakdown) =
        paper.neural_explanation.as_deref().and_then(parse_explanation)
    {
        obj["relevanceBreakdown"] = json!(breakdown);
    }

    if let Some(pdf) = &paper.pdf_url {
        obj["pdf"] = json!(pdf);
    }

    obj
}

/// Serialize a search view compactly: page metadata plus compact papers.
#[must_use]
pub fn compact_view(view: &SearchView) -> Value {
    json!({
        "pageMeta": view.page_meta,
        "activeFilterCount": view.active_filter_count,
        "papers": view.visible_papers.iter().map(compact_paper).collect::<Vec<_>>(),
    })
}
