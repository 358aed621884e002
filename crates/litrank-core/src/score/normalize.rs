//! Score normalization into the canonical 0-100 range.

/// Lower bound of the canonical score range.
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of the canonical score range.
pub const SCORE_MAX: f64 = 100.0;

/// Normalize a raw score into `[0, 100]`.
///
/// `None` and NaN mean "no score" and stay `None`; that is distinct from a
/// score of zero. Infinities clamp to the nearest bound. Total function,
/// never panics, idempotent.
#[must_use]
pub fn normalize_score(score: Option<f64>) -> Option<f64> {
    let score = score?;
    if score.is_nan() {
        return None;
    }
    if score == f64::INFINITY {
        return Some(SCORE_MAX);
    }
    if score == f64::NEG_INFINITY {
        return Some(SCORE_MIN);
    }
    Some(score.clamp(SCORE_MIN, SCORE_MAX))
}
