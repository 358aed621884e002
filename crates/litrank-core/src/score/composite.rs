//! Composite ranking score from independent relevance and quality scores.

use super::normalize::normalize_score;

/// Combine relevance and quality into one ranking score.
///
/// Both inputs are normalized first. When both are present the result is the
/// harmonic mean `2RQ / (R + Q)`, which punishes imbalance: a paper must be
/// good on BOTH axes to rank highly, and a single zero component drags the
/// composite to zero. When one input is absent the other is returned as-is;
/// when both are absent there is no composite.
///
/// The value is stored unrounded; rounding happens at display time only.
#[must_use]
pub fn harmonic_overall(relevance: Option<f64>, quality: Option<f64>) -> Option<f64> {
    match (normalize_score(relevance), normalize_score(quality)) {
        (Some(r), Some(q)) => {
            if r + q == 0.0 {
                Some(0.0)
            } else {
                Some(2.0 * r * q / (r + q))
            }
        }
        (Some(r), None) => Some(r),
        (None, Some(q)) => Some(q),
        (None, None) => None,
    }
}
