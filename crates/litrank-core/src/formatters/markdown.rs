//! Markdown output formatting.

use crate::access::classify_access;
use crate::models::Paper;
use crate::pipeline::SearchView;
use crate::score::{QualityTier, RelevanceTier, confidence};

/// Format a search view as Markdown.
#[must_use]
pub fn format_view_markdown(view: &SearchView) -> String {
    if view.visible_papers.is_empty() {
        return "No papers match the current filters.".to_string();
    }

    let mut output = format!(
        "# Results {}-{} of {} ({} filters active)\n\n",
        view.page_meta.start_index,
        view.page_meta.end_index,
        view.page_meta.total_results,
        view.active_filter_count,
    );

    let rank_offset = view.page_meta.start_index;
    for (i, paper) in view.visible_papers.iter().enumerate() {
        output.push_str(&format_paper_markdown(paper, rank_offset + i));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single paper with its derived display values.
#[must_use]
pub fn format_paper_markdown(paper: &Paper, rank: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("## {}. {}\n\n", rank, paper.title_or_default()));

    if !paper.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", paper.authors.join(", ")));
    }

    let mut meta = Vec::new();
    if let Some(year) = paper.year {
        meta.push(format!("**Year**: {year}"));
    }
    match paper.citation_count {
        Some(citations) => meta.push(format!("**Citations**: {citations}")),
        None => meta.push("**Citations**: no citation info".to_string()),
    }
    if let Some(venue) = &paper.venue {
        meta.push(format!("**Venue**: {venue}"));
    }
    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    let mut badges = Vec::new();
    if let Some(overall) = paper.effective_overall() {
        badges.push(format!("**Score**: {:.0}", overall.round()));
        if let Some(tier) = RelevanceTier::for_score(Some(overall)) {
            badges.push(format!("**Relevance**: {}", tier.label()));
        }
    }
    if let Some(tier) = QualityTier::for_score(paper.capped_quality()) {
        badges.push(format!("**Quality**: {}", tier.label()));
    }
    let estimate = confidence::for_paper(paper);
    badges.push(format!(
        "**Confidence**: {} ({}/{})",
        estimate.level.label(),
        estimate.available_metrics,
        estimate.total_metrics
    ));
    badges.push(format!("**Access**: {}", classify_access(paper).label()));
    output.push_str(&format!("{}\n\n", badges.join(" | ")));

    if let Some(doi) = &paper.doi {
        output.push_str(&format!("**Links**: [DOI](https://doi.org/{doi})"));
        if let Some(pdf) = &paper.pdf_url {
            output.push_str(&format!(" | [PDF]({pdf})"));
        }
        output.push_str("\n\n");
    } else if let Some(pdf) = &paper.pdf_url {
        output.push_str(&format!("**Links**: [PDF]({pdf})\n\n"));
    }

    output
}
