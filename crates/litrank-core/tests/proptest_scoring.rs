//! Property-based tests for the scoring and pipeline invariants.

use proptest::prelude::*;

use litrank_core::models::{FilterCriteria, Paper, SortConfig, SortDirection, SortField};
use litrank_core::pipeline::{apply_filters, paginate, sort_papers};
use litrank_core::score::{QualityTier, harmonic_overall, normalize_score};

const YEAR: i32 = 2026;

/// Generate arbitrary papers with optional numeric fields.
fn arb_paper() -> impl Strategy<Value = Paper> {
    (
        "[a-f0-9]{12}",
        proptest::option::of(1900i32..2030),
        proptest::option::of(0i32..1_000_000),
        proptest::option::of(-50.0f64..200.0),
        proptest::option::of(-50.0f64..200.0),
        proptest::collection::vec("[A-Z][a-z]{2,8}", 0..6),
    )
        .prop_map(|(id, year, citation_count, quality, relevance, authors)| Paper {
            id,
            year,
            citation_count,
            quality_score: quality,
            neural_relevance_score: relevance,
            authors,
            ..Default::default()
        })
}

proptest! {
    /// normalize(normalize(x)) == normalize(x) for any input.
    #[test]
    fn normalization_is_idempotent(raw in proptest::option::of(any::<f64>())) {
        let once = normalize_score(raw);
        prop_assert_eq!(normalize_score(once), once);
    }

    /// Normalized output is always in range or absent.
    #[test]
    fn normalized_scores_stay_in_range(raw in any::<f64>()) {
        if let Some(score) = normalize_score(Some(raw)) {
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }

    /// computeOverall(a, b) == computeOverall(b, a).
    #[test]
    fn harmonic_mean_is_symmetric(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        prop_assert_eq!(harmonic_overall(Some(a), Some(b)), harmonic_overall(Some(b), Some(a)));
    }

    /// The harmonic mean never exceeds either component.
    #[test]
    fn harmonic_mean_is_bounded_by_components(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let overall = harmonic_overall(Some(a), Some(b)).unwrap();
        prop_assert!(overall <= a.max(b) + 1e-9);
        prop_assert!(overall >= 0.0);
    }

    /// A higher score never lands in a lower tier.
    #[test]
    fn tiers_are_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_tier = QualityTier::for_score(Some(low)).unwrap();
        let high_tier = QualityTier::for_score(Some(high)).unwrap();
        prop_assert!(high_tier >= low_tier);
    }

    /// Default criteria never drop or reorder papers.
    #[test]
    fn default_filter_is_identity(papers in proptest::collection::vec(arb_paper(), 0..30)) {
        let filtered = apply_filters(&papers, &FilterCriteria::default(), YEAR);
        let before: Vec<&str> = papers.iter().map(|p| p.id.as_str()).collect();
        let after: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        prop_assert_eq!(before, after);
    }

    /// Filtering keeps a subset in input order.
    #[test]
    fn filtering_is_an_ordered_subset(
        papers in proptest::collection::vec(arb_paper(), 0..30),
        lo in 1900i32..2000,
        span in 0i32..120,
    ) {
        let criteria = FilterCriteria { year_range: (lo, lo + span), ..Default::default() };
        let filtered = apply_filters(&papers, &criteria, YEAR);

        let mut cursor = papers.iter();
        for kept in &filtered {
            // Every kept paper appears later in the input than the previous one.
            prop_assert!(cursor.any(|p| p.id == kept.id));
        }
    }

    /// Sorting is a permutation and is stable on equal keys.
    #[test]
    fn sorting_is_a_stable_permutation(
        papers in proptest::collection::vec(arb_paper(), 0..30),
        desc in any::<bool>(),
    ) {
        let config = SortConfig {
            field: SortField::Citations,
            direction: if desc { SortDirection::Desc } else { SortDirection::Asc },
        };
        let sorted = sort_papers(&papers, &config, YEAR);
        prop_assert_eq!(sorted.len(), papers.len());

        // Equal-key papers keep their relative input order.
        for window in sorted.windows(2) {
            let key_a = window[0].citation_count.unwrap_or(0);
            let key_b = window[1].citation_count.unwrap_or(0);
            if key_a == key_b {
                let pos_a = papers.iter().position(|p| p.id == window[0].id).unwrap();
                let pos_b = papers.iter().position(|p| p.id == window[1].id).unwrap();
                prop_assert!(pos_a < pos_b);
            }
        }
    }

    /// Concatenating all pages reconstructs the input exactly.
    #[test]
    fn pagination_covers_without_gaps(
        papers in proptest::collection::vec(arb_paper(), 0..60),
        page_size in 1usize..20,
    ) {
        let total_pages = paginate(&papers, page_size, 1).meta.total_pages;
        let mut reconstructed = Vec::new();
        for page_number in 1..=total_pages {
            reconstructed.extend(paginate(&papers, page_size, page_number).items);
        }
        let before: Vec<&str> = papers.iter().map(|p| p.id.as_str()).collect();
        let after: Vec<&str> = reconstructed.iter().map(|p| p.id.as_str()).collect();
        prop_assert_eq!(before, after);
    }
}
