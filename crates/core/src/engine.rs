//! Diff engine that ties configuration, alignment and comparison together

use log::debug;

use crate::algorithm::{split_lines, LineMatcher};
use crate::compare::{compare, is_blank, ComparisonOutcome};
use crate::config::DiffConfig;
use crate::diff::{LineDiff, LineRecord};

/// The main diff engine
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    /// Create a new diff engine with the given configuration
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Align two documents line by line.
    ///
    /// Absent documents are treated as empty text. When both documents are
    /// blank the result has no records at all, which tells "nothing to
    /// compare" apart from "compared and equal".
    pub fn align(&self, original: Option<&str>, changed: Option<&str>) -> Vec<LineRecord> {
        if is_blank(original) && is_blank(changed) {
            return Vec::new();
        }

        let original = split_lines(original.unwrap_or_default());
        let changed = split_lines(changed.unwrap_or_default());
        let original: Vec<&str> = original.iter().map(String::as_str).collect();
        let changed: Vec<&str> = changed.iter().map(String::as_str).collect();

        let aligner = self.config.build_aligner();
        let records = aligner.align(&original, &changed, &self.matcher());

        debug!(
            "{} aligned {} original and {} changed lines into {} records",
            aligner.name(),
            original.len(),
            changed.len(),
            records.len()
        );

        records
    }

    /// Align two documents and collect statistics over the records
    pub fn diff(&self, original: Option<&str>, changed: Option<&str>) -> LineDiff {
        let diff = LineDiff::from_records(self.align(original, changed));
        debug!("{}", diff.summary());
        diff
    }

    /// Whole-document verdict under this engine's whitespace setting
    pub fn compare(&self, original: Option<&str>, changed: Option<&str>) -> ComparisonOutcome {
        compare(original, changed, self.config.ignore_whitespace)
    }

    fn matcher(&self) -> LineMatcher {
        if self.config.ignore_whitespace {
            LineMatcher::ignoring_whitespace()
        } else {
            LineMatcher::exact()
        }
    }
}
