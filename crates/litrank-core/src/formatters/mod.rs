//! Output formatters for search views.

pub mod json;
pub mod markdown;

pub use json::{compact_paper, compact_view};
pub use markdown::{format_paper_markdown, format_view_markdown};
