//! Pure scoring functions: normalization, tiers, composites, confidence,
//! and explanation parsing.
//!
//! Everything here is a total function of its inputs. Malformed numbers are
//! normalized rather than rejected; malformed strings degrade to `None`.

pub mod composite;
pub mod confidence;
pub mod explanation;
pub mod normalize;
pub mod tier;

pub use composite::harmonic_overall;
pub use confidence::{ConfidenceEstimate, ConfidenceLevel, MetadataSignals};
pub use explanation::{RelevanceBreakdown, parse_explanation};
pub use normalize::normalize_score;
pub use tier::{MatchLabel, QualityTier, RelevanceTier};
