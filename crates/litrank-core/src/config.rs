//! Configuration constants and runtime settings for the ranking core.

/// Confidence/metadata-completeness constants.
pub mod confidence {
    /// Size of the quality-signal set: citations, journal metrics, year,
    /// abstract.
    pub const TOTAL_METRICS: u8 = 4;

    /// Display/ranking ceiling for a quality score, indexed by the number of
    /// available signals. Conservative table (see DESIGN.md).
    pub const SCORE_CAPS: [f64; 5] = [25.0, 45.0, 65.0, 85.0, 100.0];
}

/// Publisher domain lists for access classification.
///
/// Matching is case-insensitive substring against the URL host (or the whole
/// URL when the host cannot be parsed).
pub mod domains {
    /// Known paywalled publishers.
    pub const PAYWALLED: &[&str] = &[
        "sciencedirect.com",
        "elsevier.com",
        "springer.com",
        "link.springer.com",
        "nature.com",
        "wiley.com",
        "onlinelibrary.wiley.com",
        "ieee.org",
        "ieeexplore.ieee.org",
        "dl.acm.org",
        "tandfonline.com",
        "sagepub.com",
        "journals.sagepub.com",
        "cambridge.org",
        "academic.oup.com",
        "jamanetwork.com",
        "nejm.org",
        "thelancet.com",
        "cell.com",
        "science.org",
        "jstor.org",
        "karger.com",
        "degruyter.com",
        "emerald.com",
    ];

    /// Known open-access repositories and publishers.
    pub const OPEN_ACCESS: &[&str] = &[
        "arxiv.org",
        "biorxiv.org",
        "medrxiv.org",
        "plos.org",
        "journals.plos.org",
        "pmc.ncbi.nlm.nih.gov",
        "ncbi.nlm.nih.gov/pmc",
        "frontiersin.org",
        "mdpi.com",
        "peerj.com",
        "elifesciences.org",
        "hindawi.com",
        "scielo.org",
        "doaj.org",
        "osf.io",
        "ssrn.com",
        "zenodo.org",
        "core.ac.uk",
        "openreview.net",
        "aclanthology.org",
    ];
}

/// Permissive default filter ranges.
///
/// Each default spans the whole representable range of its field, so an
/// all-default criteria set passes every paper regardless of how extreme its
/// values are.
pub mod filters {
    /// Default publication-year range.
    #[must_use]
    pub const fn default_year_range() -> (i32, i32) {
        (i32::MIN, i32::MAX)
    }

    /// Default citation-velocity range.
    #[must_use]
    pub const fn default_citations_per_year_range() -> (f64, f64) {
        (0.0, f64::MAX)
    }

    /// Default author-count range.
    #[must_use]
    pub const fn default_author_count_range() -> (usize, usize) {
        (0, usize::MAX)
    }
}

/// Pagination constants.
pub mod paging {
    /// Results per page.
    pub const DEFAULT_PAGE_SIZE: usize = 10;
}

/// Runtime settings for the pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Results per page.
    pub page_size: usize,
}

impl Config {
    /// Create a configuration with an explicit page size.
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LITRANK_PAGE_SIZE` is set but not a positive
    /// integer.
    pub fn from_env() -> anyhow::Result<Self> {
        let page_size = match std::env::var("LITRANK_PAGE_SIZE") {
            Ok(raw) => {
                let parsed: usize = raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("LITRANK_PAGE_SIZE is not an integer: {raw}"))?;
                anyhow::ensure!(parsed > 0, "LITRANK_PAGE_SIZE must be positive");
                parsed
            }
            Err(_) => paging::DEFAULT_PAGE_SIZE,
        };
        Ok(Self::new(page_size))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(paging::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.page_size, paging::DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_score_caps_are_monotonic() {
        for pair in confidence::SCORE_CAPS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(confidence::SCORE_CAPS.len(), confidence::TOTAL_METRICS as usize + 1);
    }

    #[test]
    fn test_default_ranges_span_their_types() {
        assert_eq!(filters::default_year_range(), (i32::MIN, i32::MAX));
        assert_eq!(filters::default_citations_per_year_range(), (0.0, f64::MAX));
        assert_eq!(filters::default_author_count_range(), (0, usize::MAX));
    }

    #[test]
    fn test_domain_lists_are_lowercase() {
        for domain in domains::PAYWALLED.iter().chain(domains::OPEN_ACCESS) {
            assert_eq!(*domain, domain.to_lowercase());
        }
    }
}
