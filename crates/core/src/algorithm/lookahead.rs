use log::trace;

use crate::algorithm::{LineAligner, LineMatcher, RecordSink};
use crate::diff::LineRecord;

/// Default number of lines scanned ahead when the cursors diverge
pub const LOOKAHEAD_WINDOW: usize = 5;

/// Single forward pass with bounded lookahead.
///
/// When the current pair of lines differs, the aligner first looks up to
/// `window` lines ahead in the changed document for the current original line
/// (treating the skipped lines as insertions), then up to `window` lines ahead
/// in the original for the current changed line (treating the skipped lines
/// as deletions). If neither resynchronizes, the pair is reported as
/// `Modified`, or as a one-sided record once the other side is exhausted.
///
/// This is a heuristic: it bounds the work per line to `O(window)` and does
/// not produce a minimal edit script.
#[derive(Debug, Clone, Copy)]
pub struct LookaheadAligner {
    window: usize,
}

impl LookaheadAligner {
    pub fn new() -> Self {
        Self {
            window: LOOKAHEAD_WINDOW,
        }
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// First index in `from..from + window` whose line satisfies `pred`
    fn scan(&self, lines: &[&str], from: usize, pred: impl Fn(&str) -> bool) -> Option<usize> {
        let end = from.saturating_add(self.window).min(lines.len());
        (from..end).find(|&k| pred(lines[k]))
    }
}

impl Default for LookaheadAligner {
    fn default() -> Self {
        Self::new()
    }
}

impl LineAligner for LookaheadAligner {
    fn align(&self, original: &[&str], changed: &[&str], matcher: &LineMatcher) -> Vec<LineRecord> {
        let mut sink = RecordSink::with_capacity(original.len().max(changed.len()));
        let mut i = 0;
        let mut j = 0;

        while i < original.len() || j < changed.len() {
            let a = original.get(i).copied();
            let b = changed.get(j).copied();

            if let (Some(a), Some(b)) = (a, b) {
                if matcher.matches(a, b) {
                    sink.equal(i, a, j, b);
                    i += 1;
                    j += 1;
                    continue;
                }
            }

            // Lines inserted into the changed document take precedence over
            // lines deleted from the original.
            if let Some(a) = a {
                if let Some(k) = self.scan(changed, j, |line| matcher.matches(a, line)) {
                    trace!("original line {} resyncs {} lines ahead in changed", i + 1, k - j);
                    for (offset, line) in changed[j..k].iter().enumerate() {
                        sink.b_only(j + offset, line);
                    }
                    sink.equal(i, a, k, changed[k]);
                    i += 1;
                    j = k + 1;
                    continue;
                }
            }

            if let Some(b) = b {
                if let Some(l) = self.scan(original, i, |line| matcher.matches(line, b)) {
                    trace!("changed line {} resyncs {} lines ahead in original", j + 1, l - i);
                    for (offset, line) in original[i..l].iter().enumerate() {
                        sink.a_only(i + offset, line);
                    }
                    sink.equal(l, original[l], j, b);
                    i = l + 1;
                    j += 1;
                    continue;
                }
            }

            match (a, b) {
                (Some(a), Some(b)) => {
                    sink.modified(i, a, j, b);
                    i += 1;
                    j += 1;
                }
                (Some(a), None) => {
                    sink.a_only(i, a);
                    i += 1;
                }
                (None, Some(b)) => {
                    sink.b_only(j, b);
                    j += 1;
                }
                (None, None) => break,
            }
        }

        sink.finish()
    }

    fn name(&self) -> &str {
        "lookahead"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::LineStatus;

    fn statuses(records: &[LineRecord]) -> Vec<LineStatus> {
        records.iter().map(|r| r.status).collect()
    }

    fn align(original: &[&str], changed: &[&str]) -> Vec<LineRecord> {
        LookaheadAligner::new().align(original, changed, &LineMatcher::exact())
    }

    #[test]
    fn test_identical_lines() {
        let records = align(&["a", "b", "c"], &["a", "b", "c"]);
        assert_eq!(statuses(&records), vec![LineStatus::Equal; 3]);
        assert_eq!(records[2].line_num_a.map(|n| n.get()), Some(3));
        assert_eq!(records[2].line_num_b.map(|n| n.get()), Some(3));
    }

    #[test]
    fn test_insertion_resyncs_in_changed() {
        let records = align(&["a", "b"], &["a", "x", "y", "b"]);
        assert_eq!(
            statuses(&records),
            vec![
                LineStatus::Equal,
                LineStatus::BOnly,
                LineStatus::BOnly,
                LineStatus::Equal
            ]
        );
        assert_eq!(records[1].line_b, "x");
        assert_eq!(records[2].line_b, "y");
        assert_eq!(records[3].line_num_a.map(|n| n.get()), Some(2));
        assert_eq!(records[3].line_num_b.map(|n| n.get()), Some(4));
    }

    #[test]
    fn test_deletion_resyncs_in_original() {
        let records = align(&["a", "x", "y", "b"], &["a", "b"]);
        assert_eq!(
            statuses(&records),
            vec![
                LineStatus::Equal,
                LineStatus::AOnly,
                LineStatus::AOnly,
                LineStatus::Equal
            ]
        );
        assert_eq!(records[3].line_num_a.map(|n| n.get()), Some(4));
        assert_eq!(records[3].line_num_b.map(|n| n.get()), Some(2));
    }

    #[test]
    fn test_insertion_preferred_over_deletion() {
        // "b" is one line ahead on both sides; the changed side wins.
        let records = align(&["a", "b"], &["b", "a"]);
        assert_eq!(
            statuses(&records),
            vec![LineStatus::BOnly, LineStatus::Equal, LineStatus::AOnly]
        );
        assert_eq!(records[0].line_b, "b");
        assert_eq!(records[1].line_a, "a");
        assert_eq!(records[2].line_a, "b");
    }

    #[test]
    fn test_window_bounds_resync() {
        let original = ["target"];
        let changed = ["1", "2", "3", "4", "5", "target"];

        let records = align(&original, &changed);
        assert_eq!(records[0].status, LineStatus::Modified);
        assert!(records[1..].iter().all(|r| r.status == LineStatus::BOnly));

        let wide = LookaheadAligner::new().with_window(6);
        let records = wide.align(&original, &changed, &LineMatcher::exact());
        assert_eq!(records.len(), 6);
        assert_eq!(records[5].status, LineStatus::Equal);
    }

    #[test]
    fn test_zero_window_never_resyncs() {
        let aligner = LookaheadAligner::new().with_window(0);
        let records = aligner.align(&["a", "b"], &["x", "a", "b"], &LineMatcher::exact());
        assert_eq!(
            statuses(&records),
            vec![LineStatus::Modified, LineStatus::Modified, LineStatus::BOnly]
        );
    }

    #[test]
    fn test_exhausted_side_does_not_match_blank_lines() {
        let records = align(&["a"], &["a", "", ""]);
        assert_eq!(
            statuses(&records),
            vec![LineStatus::Equal, LineStatus::BOnly, LineStatus::BOnly]
        );
    }

    #[test]
    fn test_blank_lines_pair_up() {
        let records = align(&["", "a"], &["", "b"]);
        assert_eq!(statuses(&records), vec![LineStatus::Equal, LineStatus::Modified]);
    }

    #[test]
    fn test_whitespace_insensitive_matching() {
        let records = LookaheadAligner::new().align(
            &["fn main() {", "\tprintln!();", "}"],
            &["fn main()  {", "    println!();", "}"],
            &LineMatcher::ignoring_whitespace(),
        );
        assert_eq!(statuses(&records), vec![LineStatus::Equal; 3]);
        assert_eq!(records[1].line_a, "\tprintln!();");
        assert_eq!(records[1].line_b, "    println!();");
    }
}
