//! Error types for the ranking core.
//!
//! The scoring and classification functions are total over their documented
//! input domains and never return errors; malformed numeric input is
//! normalized, malformed strings degrade to the "unknown" case. The only
//! fallible surface is pipeline configuration.

/// Errors from invalid pipeline parameters.
#[derive(thiserror::Error, Debug)]
pub enum CriteriaError {
    /// A closed interval with min above max.
    #[error("invalid {field} range: min {min} exceeds max {max}")]
    InvalidRange {
        /// Criteria field name (as serialized).
        field: &'static str,
        /// Lower bound supplied.
        min: f64,
        /// Upper bound supplied.
        max: f64,
    },

    /// A threshold outside its documented bounds.
    #[error("{field} must be within 0-100, got {value}")]
    ThresholdOutOfRange {
        /// Criteria field name (as serialized).
        field: &'static str,
        /// Value supplied.
        value: f64,
    },

    /// Page numbers are 1-based.
    #[error("page number must be at least 1")]
    InvalidPage,
}

impl CriteriaError {
    /// Create an invalid-range error.
    #[must_use]
    pub const fn invalid_range(field: &'static str, min: f64, max: f64) -> Self {
        Self::InvalidRange { field, min, max }
    }
}

/// Result type alias for criteria validation.
pub type CriteriaResult<T> = Result<T, CriteriaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message_names_field() {
        let err = CriteriaError::invalid_range("yearRange", 2030.0, 2020.0);
        let message = err.to_string();
        assert!(message.contains("yearRange"));
        assert!(message.contains("2030"));
    }

    #[test]
    fn test_threshold_message() {
        let err = CriteriaError::ThresholdOutOfRange {
            field: "minimumQualityScore",
            value: 150.0,
        };
        assert!(err.to_string().contains("minimumQualityScore"));
    }
}
