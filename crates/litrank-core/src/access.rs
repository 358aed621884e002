//! Publisher access classification.
//!
//! Classifies a paper's access status from its URLs, full-text flags, and
//! fetch status. The states are mutually exclusive and checked in priority
//! order: open access beats cached full text, and a paper is only Restricted
//! when every escape hatch (free PDF, cached text, in-flight fetch) is
//! absent.

use serde::Serialize;
use url::Url;

use crate::config::domains;
use crate::models::{FullTextStatus, Paper};

/// Access status for a paper. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessStatus {
    /// Freely readable: verified OA source, known OA domain, or free PDF.
    OpenAccess,

    /// Full text cached or retrievable, but not verified open access.
    FullTextAvailable,

    /// Full-text retrieval in flight.
    Fetching,

    /// Paywalled publisher and no escape hatch.
    Restricted,

    /// Not enough information to classify.
    Unknown,
}

impl AccessStatus {
    /// Display text for the access badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OpenAccess => "Open Access",
            Self::FullTextAvailable => "Full Text Available",
            Self::Fetching => "Checking Access",
            Self::Restricted => "Restricted",
            Self::Unknown => "Unknown",
        }
    }
}

/// Whether a URL points at a known paywalled publisher.
///
/// Case-insensitive substring match of the denylist against the URL host,
/// falling back to the whole string when the URL does not parse. Absent or
/// empty input is not paywalled.
#[must_use]
pub fn is_paywalled_publisher(url: Option<&str>) -> bool {
    matches_domain_list(url, domains::PAYWALLED)
}

/// Whether a URL points at a known open-access repository or publisher.
#[must_use]
pub fn is_known_open_source(url: Option<&str>) -> bool {
    matches_domain_list(url, domains::OPEN_ACCESS)
}

fn matches_domain_list(url: Option<&str>, list: &[&str]) -> bool {
    let Some(raw) = url else { return false };
    if raw.is_empty() {
        return false;
    }
    // Host plus path: entries like "ncbi.nlm.nih.gov/pmc" need the path to
    // disambiguate a shared host. Unparseable input falls back to matching
    // the whole string.
    let haystack = match Url::parse(raw) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => format!("{}{}", host.to_lowercase(), parsed.path().to_lowercase()),
            None => raw.to_lowercase(),
        },
        Err(_) => raw.to_lowercase(),
    };
    list.iter().any(|domain| haystack.contains(domain))
}

/// Classify a paper's access status.
#[must_use]
pub fn classify_access(paper: &Paper) -> AccessStatus {
    let paywalled = is_paywalled_publisher(paper.url.as_deref());
    let known_open = is_known_open_source(paper.url.as_deref());
    let free_pdf = paper.has_free_pdf();
    let oa_source = paper.full_text_source.is_some_and(|s| s.is_open_access());
    let fetching = paper.full_text_status == Some(FullTextStatus::Fetching);
    let has_text = paper.has_full_text == Some(true)
        || paper.full_text_status == Some(FullTextStatus::Success);

    // An explicit free PDF or a verified OA source is proof of open access
    // even when the landing page sits on a paywalled domain; the denylist
    // only vetoes the inference from the URL itself.
    if oa_source || free_pdf || (known_open && !paywalled) {
        return AccessStatus::OpenAccess;
    }
    if has_text && !paywalled {
        return AccessStatus::FullTextAvailable;
    }
    if fetching {
        return AccessStatus::Fetching;
    }
    if paywalled && !free_pdf && !has_text {
        return AccessStatus::Restricted;
    }
    AccessStatus::Unknown
}
