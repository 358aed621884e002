//! litrank-core
//!
//! Client-side ranking, quality-scoring, and filtering core for an academic
//! literature discovery tool. Papers arrive as immutable snapshots carrying
//! backend-computed scores; this crate derives everything the result list
//! shows from them:
//!
//! - **Scoring**: 0-100 normalization, harmonic-mean composite of relevance
//!   and quality, tier/badge classification, confidence caps from metadata
//!   completeness, relevance-explanation parsing.
//! - **Pipeline**: conjunctive filtering, stable sorting, pagination —
//!   deterministic and side-effect free.
//! - **Selection**: signature-tracked synchronization of the selected set
//!   with the visible result set.
//!
//! # Example
//!
//! ```
//! use litrank_core::config::Config;
//! use litrank_core::models::{FilterCriteria, Paper, SortConfig};
//! use litrank_core::pipeline;
//!
//! let papers = vec![Paper { id: "p1".into(), year: Some(2024), ..Default::default() }];
//! let view = pipeline::run(
//!     &papers,
//!     &FilterCriteria::default(),
//!     &SortConfig::default(),
//!     1,
//!     &Config::default(),
//!     2026,
//! )?;
//! assert_eq!(view.visible_papers.len(), 1);
//! # Ok::<(), litrank_core::error::CriteriaError>(())
//! ```

pub mod access;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod pipeline;
pub mod score;
pub mod selection;

pub use access::{AccessStatus, classify_access};
pub use config::Config;
pub use error::{CriteriaError, CriteriaResult};
pub use models::{FilterCriteria, Paper, SortConfig, SortDirection, SortField};
pub use pipeline::{SearchView, run};
pub use selection::{SelectionSync, SyncState};
