//! Integration tests for the scoring functions: normalization, composite,
//! tiers, confidence caps, and explanation parsing.

use litrank_core::models::{MetadataCompleteness, Paper};
use litrank_core::score::{
    ConfidenceLevel, MatchLabel, QualityTier, RelevanceTier, confidence, harmonic_overall,
    normalize_score, parse_explanation,
};

#[test]
fn normalization_clamp_table() {
    assert_eq!(normalize_score(Some(150.0)), Some(100.0));
    assert_eq!(normalize_score(Some(-50.0)), Some(0.0));
    assert_eq!(normalize_score(Some(f64::NAN)), None);
    assert_eq!(normalize_score(Some(f64::INFINITY)), Some(100.0));
    assert_eq!(normalize_score(Some(f64::NEG_INFINITY)), Some(0.0));
    assert_eq!(normalize_score(None), None);
}

#[test]
fn harmonic_mean_boundaries() {
    assert_eq!(harmonic_overall(Some(100.0), Some(100.0)), Some(100.0));
    // A single zero component drags the composite to zero, unlike an
    // arithmetic mean.
    assert_eq!(harmonic_overall(Some(0.0), Some(100.0)), Some(0.0));
}

#[test]
fn harmonic_mean_penalizes_imbalance() {
    let balanced = harmonic_overall(Some(60.0), Some(60.0)).unwrap();
    let imbalanced = harmonic_overall(Some(100.0), Some(20.0)).unwrap();
    let arithmetic = (100.0 + 20.0) / 2.0;
    assert_eq!(balanced, 60.0);
    assert!(imbalanced < arithmetic);
}

#[test]
fn quality_tier_boundaries() {
    assert_eq!(QualityTier::for_score(Some(70.0)), Some(QualityTier::Gold));
    assert_eq!(QualityTier::for_score(Some(69.999)), Some(QualityTier::Silver));
    assert_eq!(QualityTier::for_score(Some(50.0)), Some(QualityTier::Silver));
    assert_eq!(QualityTier::for_score(Some(0.0)), Some(QualityTier::Bronze));
    assert_eq!(QualityTier::for_score(None), None);
}

#[test]
fn relevance_tier_labels() {
    assert_eq!(RelevanceTier::for_score(Some(95.0)).unwrap().label(), "Highly Relevant");
    assert_eq!(RelevanceTier::for_score(Some(10.0)).unwrap().label(), "Low Relevance");
}

#[test]
fn match_label_boundaries() {
    assert_eq!(MatchLabel::for_score(Some(80.0)), Some(MatchLabel::Excellent));
    assert_eq!(MatchLabel::for_score(Some(79.999)), Some(MatchLabel::Strong));
    assert_eq!(MatchLabel::for_score(Some(34.999)), Some(MatchLabel::Low));
}

#[test]
fn confidence_cap_limits_displayed_quality() {
    // One available signal, raw quality 90: the displayed/ranked score must
    // not exceed the cap for one signal.
    let paper = Paper {
        id: "sparse".into(),
        quality_score: Some(90.0),
        metadata_completeness: Some(MetadataCompleteness {
            available_metrics: 1,
            total_metrics: 4,
        }),
        ..Default::default()
    };
    let estimate = confidence::for_paper(&paper);
    assert_eq!(estimate.level, ConfidenceLevel::Low);
    assert_eq!(estimate.score_cap, 45.0);
    assert_eq!(paper.capped_quality(), Some(45.0));
    assert!(paper.ranking_score() <= 45.0);
}

#[test]
fn confidence_derived_from_fields_when_completeness_absent() {
    let paper = Paper {
        id: "derived".into(),
        citation_count: Some(3),
        year: Some(2021),
        r#abstract: Some("Abstract.".into()),
        ..Default::default()
    };
    let estimate = confidence::for_paper(&paper);
    assert_eq!(estimate.available_metrics, 3);
    assert_eq!(estimate.level, ConfidenceLevel::Good);
}

#[test]
fn explanation_parsing_is_all_or_nothing() {
    let full = "Semantic match: 82%, keyword match: 75%, theme fit: 64%";
    let breakdown = parse_explanation(full).unwrap();
    assert_eq!(breakdown.semantic, 82.0);
    assert_eq!(breakdown.keyword, 75.0);
    assert_eq!(breakdown.theme_fit, 64.0);

    // A missing component yields no breakdown at all, never partial data.
    assert!(parse_explanation("Semantic match: 82%, theme fit: 64%").is_none());
}

#[test]
fn paper_effective_overall_prefers_upstream_value() {
    let paper = Paper {
        id: "p".into(),
        overall_score: Some(55.0),
        neural_relevance_score: Some(90.0),
        quality_score: Some(90.0),
        ..Default::default()
    };
    // Upstream composite wins even though a local computation would differ.
    assert_eq!(paper.effective_overall(), Some(55.0));

    let without_upstream = Paper { overall_score: None, ..paper };
    assert_eq!(without_upstream.effective_overall(), Some(90.0));
}
