//! # linecompare
//!
//! Line-oriented comparison of two text documents. The original document is
//! aligned against the changed one and every line is classified as equal,
//! removed, added or modified.
//!
//! ## Core Concepts
//!
//! - **Normalizers**: Canonical forms used only to decide equality
//! - **Aligners**: Walk both line sequences and emit [`LineRecord`]s
//! - **Comparison**: A whole-document [`Verdict`]
//! - **DiffEngine**: Applies a [`DiffConfig`] to both operations
//!
//! Alignment uses a bounded-lookahead heuristic. It does not compute a
//! minimal edit script and never looks inside a line.
//!
//! ## Example
//!
//! ```rust
//! use linecompare_core::{DiffConfig, DiffEngine, LineStatus};
//!
//! let engine = DiffEngine::new(DiffConfig::lenient());
//! let diff = engine.diff(Some("a\nb"), Some("a\nx\nb"));
//!
//! assert_eq!(diff.records[1].status, LineStatus::BOnly);
//! ```

pub mod algorithm;
pub mod compare;
pub mod config;
pub mod diff;
pub mod engine;
pub mod normalizers;
pub mod pipeline;

pub use algorithm::{LineAligner, LineMatcher, LOOKAHEAD_WINDOW};
pub use compare::{compare, ComparisonOutcome, StyleTag, Verdict};
pub use config::{AlignmentStrategy, DiffConfig};
pub use diff::{DiffStatistics, LineDiff, LineRecord, LineStatus};
pub use engine::DiffEngine;
pub use normalizers::normalize;
pub use pipeline::TextPipeline;

/// Align two documents line by line with the default lookahead strategy.
///
/// # Example
///
/// ```rust
/// use linecompare_core::{align, LineStatus};
///
/// let records = align("Line 1\nLine 2 in A only", "Line 1", false);
/// assert_eq!(records[1].status, LineStatus::AOnly);
/// ```
pub fn align(original: &str, changed: &str, ignore_whitespace: bool) -> Vec<LineRecord> {
    DiffEngine::new(DiffConfig::new().with_ignore_whitespace(ignore_whitespace))
        .align(Some(original), Some(changed))
}

/// Main entry point for computing a line diff between two documents
///
/// # Arguments
///
/// * `original` - The original text, or `None` when no document is loaded
/// * `changed` - The changed text, or `None`
/// * `config` - Optional configuration (uses default if None)
pub fn compute_diff(original: Option<&str>, changed: Option<&str>, config: Option<DiffConfig>) -> LineDiff {
    DiffEngine::new(config.unwrap_or_default()).diff(original, changed)
}
