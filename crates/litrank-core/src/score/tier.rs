//! Tier classification over normalized scores.
//!
//! Every tier table is an ordered, strictly descending list of
//! `(min_score, tier)` pairs. Classification walks from the top and returns
//! the first tier whose floor the score reaches, so a score equal to a
//! boundary belongs to the higher tier.

use serde::Serialize;

use super::normalize::normalize_score;

/// Classify a score against a descending threshold table.
///
/// Returns `None` when the score normalizes to `None` (tier unknown). The
/// last entry of every table has a floor of 0, so any real score gets a tier.
#[must_use]
pub fn classify<T: Copy>(score: Option<f64>, thresholds: &[(f64, T)]) -> Option<T> {
    let score = normalize_score(score)?;
    thresholds.iter().find(|(min, _)| score >= *min).map(|(_, tier)| *tier)
}

/// Quality badge tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// Below 50.
    Bronze,

    /// 50 to below 70.
    Silver,

    /// 70 and above.
    Gold,
}

const QUALITY_TIERS: &[(f64, QualityTier)] =
    &[(70.0, QualityTier::Gold), (50.0, QualityTier::Silver), (0.0, QualityTier::Bronze)];

impl QualityTier {
    /// Tier for a quality score, `None` when the score is unknown.
    #[must_use]
    pub fn for_score(score: Option<f64>) -> Option<Self> {
        classify(score, QUALITY_TIERS)
    }

    /// Badge label shown next to the score.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
        }
    }
}

/// Match-strength label for a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLabel {
    /// Below 35.
    Low,

    /// 35 to below 50.
    Moderate,

    /// 50 to below 65.
    Good,

    /// 65 to below 80.
    Strong,

    /// 80 and above.
    Excellent,
}

const MATCH_LABELS: &[(f64, MatchLabel)] = &[
    (80.0, MatchLabel::Excellent),
    (65.0, MatchLabel::Strong),
    (50.0, MatchLabel::Good),
    (35.0, MatchLabel::Moderate),
    (0.0, MatchLabel::Low),
];

impl MatchLabel {
    /// Label for a composite match score, `None` when the score is unknown.
    #[must_use]
    pub fn for_score(score: Option<f64>) -> Option<Self> {
        classify(score, MATCH_LABELS)
    }

    /// Display text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Strong => "Strong",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

/// Relevance band for a relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceTier {
    /// Below 30.
    LowRelevance,

    /// 30 to below 50.
    SomewhatRelevant,

    /// 50 to below 70.
    Relevant,

    /// 70 to below 90.
    VeryRelevant,

    /// 90 and above.
    HighlyRelevant,
}

const RELEVANCE_TIERS: &[(f64, RelevanceTier)] = &[
    (90.0, RelevanceTier::HighlyRelevant),
    (70.0, RelevanceTier::VeryRelevant),
    (50.0, RelevanceTier::Relevant),
    (30.0, RelevanceTier::SomewhatRelevant),
    (0.0, RelevanceTier::LowRelevance),
];

impl RelevanceTier {
    /// Band for a relevance score, `None` when the score is unknown.
    #[must_use]
    pub fn for_score(score: Option<f64>) -> Option<Self> {
        classify(score, RELEVANCE_TIERS)
    }

    /// Display text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlyRelevant => "Highly Relevant",
            Self::VeryRelevant => "Very Relevant",
            Self::Relevant => "Relevant",
            Self::SomewhatRelevant => "Somewhat Relevant",
            Self::LowRelevance => "Low Relevance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_belongs_to_higher_tier() {
        assert_eq!(QualityTier::for_score(Some(70.0)), Some(QualityTier::Gold));
        assert_eq!(QualityTier::for_score(Some(69.9)), Some(QualityTier::Silver));
        assert_eq!(QualityTier::for_score(Some(50.0)), Some(QualityTier::Silver));
        assert_eq!(QualityTier::for_score(Some(49.9)), Some(QualityTier::Bronze));
    }

    #[test]
    fn unknown_score_has_no_tier() {
        assert_eq!(QualityTier::for_score(None), None);
        assert_eq!(MatchLabel::for_score(Some(f64::NAN)), None);
    }

    #[test]
    fn raw_scores_are_normalized_first() {
        assert_eq!(QualityTier::for_score(Some(500.0)), Some(QualityTier::Gold));
        assert_eq!(QualityTier::for_score(Some(-5.0)), Some(QualityTier::Bronze));
        assert_eq!(RelevanceTier::for_score(Some(f64::INFINITY)), Some(RelevanceTier::HighlyRelevant));
    }

    #[test]
    fn match_labels_cover_the_range() {
        assert_eq!(MatchLabel::for_score(Some(80.0)), Some(MatchLabel::Excellent));
        assert_eq!(MatchLabel::for_score(Some(65.0)), Some(MatchLabel::Strong));
        assert_eq!(MatchLabel::for_score(Some(50.0)), Some(MatchLabel::Good));
        assert_eq!(MatchLabel::for_score(Some(35.0)), Some(MatchLabel::Moderate));
        assert_eq!(MatchLabel::for_score(Some(0.0)), Some(MatchLabel::Low));
    }

    #[test]
    fn tiers_are_monotonic_in_score() {
        let scores = [0.0, 12.0, 29.9, 30.0, 49.0, 50.0, 69.0, 70.0, 89.0, 90.0, 100.0];
        for window in scores.windows(2) {
            let low = RelevanceTier::for_score(Some(window[0])).unwrap();
            let high = RelevanceTier::for_score(Some(window[1])).unwrap();
            assert!(high >= low);
        }
    }
}
