//! Data models for papers and pipeline parameters.
//!
//! All models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match the backend naming.

mod criteria;
mod paper;

pub use criteria::{FilterCriteria, SortConfig, SortDirection, SortField};
pub use paper::{FullTextSource, FullTextStatus, MetadataCompleteness, Paper, QualityBreakdown};
