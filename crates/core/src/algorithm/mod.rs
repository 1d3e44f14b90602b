//! Line alignment algorithms
//!
//! An aligner walks the original and changed line sequences and emits the
//! ordered [`LineRecord`]s that turn one into the other. Every line of both
//! inputs ends up in exactly one record.
pub mod lookahead;
pub mod positional;

use std::num::NonZeroUsize;

use crate::diff::LineRecord;
use crate::pipeline::TextPipeline;

pub use lookahead::{LookaheadAligner, LOOKAHEAD_WINDOW};
pub use positional::PositionalAligner;

/// Trait for line alignment algorithms
pub trait LineAligner: Send + Sync {
    /// Align two line sequences
    fn align(&self, original: &[&str], changed: &[&str], matcher: &LineMatcher) -> Vec<LineRecord>;

    /// Get the name of this algorithm
    fn name(&self) -> &str;
}

/// Decides whether two lines are considered the same
#[derive(Debug, Clone, Default)]
pub struct LineMatcher {
    pipeline: TextPipeline,
}

impl LineMatcher {
    pub fn new(pipeline: TextPipeline) -> Self {
        Self { pipeline }
    }

    /// Compare raw line text, including trailing spaces and case
    pub fn exact() -> Self {
        Self::default()
    }

    /// Compare whitespace-folded line text
    pub fn ignoring_whitespace() -> Self {
        Self::new(TextPipeline::for_lines(true))
    }

    pub fn matches(&self, a: &str, b: &str) -> bool {
        if self.pipeline.is_empty() {
            return a == b;
        }
        self.pipeline.apply(a) == self.pipeline.apply(b)
    }
}

/// Split a document into lines after dropping carriage returns.
///
/// A trailing line feed yields a final empty line, and an empty document is a
/// single empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace('\r', "").split('\n').map(str::to_string).collect()
}

/// 1-based line number of the line at `index`
pub(crate) fn line_number(index: usize) -> NonZeroUsize {
    NonZeroUsize::MIN.saturating_add(index)
}

/// Accumulates records while numbering lines from their cursor positions
pub(crate) struct RecordSink {
    records: Vec<LineRecord>,
}

impl RecordSink {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn equal(&mut self, i: usize, a: &str, j: usize, b: &str) {
        self.records
            .push(LineRecord::equal(a, line_number(i), b, line_number(j)));
    }

    pub(crate) fn modified(&mut self, i: usize, a: &str, j: usize, b: &str) {
        self.records
            .push(LineRecord::modified(a, line_number(i), b, line_number(j)));
    }

    pub(crate) fn a_only(&mut self, i: usize, a: &str) {
        self.records.push(LineRecord::a_only(a, line_number(i)));
    }

    pub(crate) fn b_only(&mut self, j: usize, b: &str) {
        self.records.push(LineRecord::b_only(b, line_number(j)));
    }

    pub(crate) fn finish(self) -> Vec<LineRecord> {
        self.records
    }
}
