//! Line diff result types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

/// How a record relates the two documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineStatus {
    /// The line is present on both sides and compares equal
    Equal,
    /// The line only exists in the original document
    AOnly,
    /// The line only exists in the changed document
    BOnly,
    /// Both sides have a line at this position but they differ
    Modified,
}

impl LineStatus {
    /// Single-character marker used by plain-text renderings
    pub fn marker(self) -> char {
        match self {
            LineStatus::Equal => '=',
            LineStatus::AOnly => '-',
            LineStatus::BOnly => '+',
            LineStatus::Modified => '~',
        }
    }
}

/// One aligned unit of output
///
/// `line_a` / `line_b` are empty when the record does not consume a line from
/// that side; the matching line number is `None` in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    pub line_a: String,
    pub line_b: String,
    pub status: LineStatus,
    pub line_num_a: Option<NonZeroUsize>,
    pub line_num_b: Option<NonZeroUsize>,
}

impl LineRecord {
    pub fn equal(line_a: &str, num_a: NonZeroUsize, line_b: &str, num_b: NonZeroUsize) -> Self {
        Self::paired(LineStatus::Equal, line_a, num_a, line_b, num_b)
    }

    pub fn modified(line_a: &str, num_a: NonZeroUsize, line_b: &str, num_b: NonZeroUsize) -> Self {
        Self::paired(LineStatus::Modified, line_a, num_a, line_b, num_b)
    }

    pub fn a_only(line_a: &str, num_a: NonZeroUsize) -> Self {
        Self {
            line_a: line_a.to_string(),
            line_b: String::new(),
            status: LineStatus::AOnly,
            line_num_a: Some(num_a),
            line_num_b: None,
        }
    }

    pub fn b_only(line_b: &str, num_b: NonZeroUsize) -> Self {
        Self {
            line_a: String::new(),
            line_b: line_b.to_string(),
            status: LineStatus::BOnly,
            line_num_a: None,
            line_num_b: Some(num_b),
        }
    }

    fn paired(
        status: LineStatus,
        line_a: &str,
        num_a: NonZeroUsize,
        line_b: &str,
        num_b: NonZeroUsize,
    ) -> Self {
        Self {
            line_a: line_a.to_string(),
            line_b: line_b.to_string(),
            status,
            line_num_a: Some(num_a),
            line_num_b: Some(num_b),
        }
    }

    /// The original-side line, if this record consumed one
    pub fn original_line(&self) -> Option<&str> {
        self.line_num_a.map(|_| self.line_a.as_str())
    }

    /// The changed-side line, if this record consumed one
    pub fn changed_line(&self) -> Option<&str> {
        self.line_num_b.map(|_| self.line_b.as_str())
    }

    /// Get a human-readable description of this record
    pub fn description(&self) -> String {
        match self.status {
            LineStatus::Equal => format!("Equal: \"{}\"", self.line_a),
            LineStatus::AOnly => format!("Removed: \"{}\"", self.line_a),
            LineStatus::BOnly => format!("Added: \"{}\"", self.line_b),
            LineStatus::Modified => {
                format!("Modified: \"{}\" → \"{}\"", self.line_a, self.line_b)
            }
        }
    }
}

/// Counts over an aligned record sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffStatistics {
    /// Lines consumed from the original document
    pub original_lines: usize,

    /// Lines consumed from the changed document
    pub changed_lines: usize,

    pub equal: usize,
    pub a_only: usize,
    pub b_only: usize,
    pub modified: usize,

    /// Share of records that are not `Equal` (0.0 to 1.0)
    pub change_ratio: f64,
}

impl DiffStatistics {
    fn record(&mut self, record: &LineRecord) {
        match record.status {
            LineStatus::Equal => self.equal += 1,
            LineStatus::AOnly => self.a_only += 1,
            LineStatus::BOnly => self.b_only += 1,
            LineStatus::Modified => self.modified += 1,
        }
        if record.line_num_a.is_some() {
            self.original_lines += 1;
        }
        if record.line_num_b.is_some() {
            self.changed_lines += 1;
        }
    }

    /// Number of records that are not `Equal`
    pub fn changes(&self) -> usize {
        self.a_only + self.b_only + self.modified
    }

    fn calculate_change_ratio(&mut self) {
        let total = self.changes() + self.equal;
        self.change_ratio = if total > 0 {
            self.changes() as f64 / total as f64
        } else {
            0.0
        };
    }
}

/// Complete line diff result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineDiff {
    /// Aligned records in output order
    pub records: Vec<LineRecord>,

    /// Statistics about the records
    pub statistics: DiffStatistics,
}

impl LineDiff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a finalized diff from an aligned record sequence
    pub fn from_records(records: Vec<LineRecord>) -> Self {
        let mut diff = Self::new();
        for record in records {
            diff.add_record(record);
        }
        diff.finalize();
        diff
    }

    /// Add a record to the diff
    pub fn add_record(&mut self, record: LineRecord) {
        self.statistics.record(&record);
        self.records.push(record);
    }

    /// Finalize the diff result (calculate derived values)
    pub fn finalize(&mut self) {
        self.statistics.calculate_change_ratio();
    }

    /// True when there was nothing to compare
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when every record is `Equal`
    pub fn is_identical(&self) -> bool {
        self.records.iter().all(|r| r.status == LineStatus::Equal)
    }

    /// Original document lines, rebuilt from the records
    pub fn original_lines(&self) -> Vec<&str> {
        self.records.iter().filter_map(LineRecord::original_line).collect()
    }

    /// Changed document lines, rebuilt from the records
    pub fn changed_lines(&self) -> Vec<&str> {
        self.records.iter().filter_map(LineRecord::changed_line).collect()
    }

    /// Get only the changed records (exclude Equal)
    pub fn changed_records(&self) -> Vec<&LineRecord> {
        self.records
            .iter()
            .filter(|r| r.status != LineStatus::Equal)
            .collect()
    }

    /// Get a summary of the diff
    pub fn summary(&self) -> String {
        format!(
            "Line Diff Summary: {} equal, {} removed, {} added, {} modified. Change: {:.1}%",
            self.statistics.equal,
            self.statistics.a_only,
            self.statistics.b_only,
            self.statistics.modified,
            self.statistics.change_ratio * 100.0
        )
    }
}

impl fmt::Display for LineDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Line Diff ===")?;
        writeln!(f, "{}", self.summary())?;
        writeln!(f, "\nRecords:")?;

        for (i, record) in self.records.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, record.description())?;
        }

        Ok(())
    }
}
