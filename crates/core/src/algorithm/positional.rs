use crate::algorithm::{LineAligner, LineMatcher, RecordSink};
use crate::diff::LineRecord;

/// Compares line `n` of the original only with line `n` of the changed
/// document.
///
/// Matching pairs become `Equal`; any other position is split into an
/// `AOnly` record for the original line followed by a `BOnly` record for the
/// changed line (whichever of the two exist). There is no resynchronization,
/// so a single inserted line shifts everything after it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalAligner;

impl PositionalAligner {
    pub fn new() -> Self {
        Self
    }
}

impl LineAligner for PositionalAligner {
    fn align(&self, original: &[&str], changed: &[&str], matcher: &LineMatcher) -> Vec<LineRecord> {
        let total = original.len().max(changed.len());
        let mut sink = RecordSink::with_capacity(total);

        for n in 0..total {
            match (original.get(n).copied(), changed.get(n).copied()) {
                (Some(a), Some(b)) if matcher.matches(a, b) => sink.equal(n, a, n, b),
                (a, b) => {
                    if let Some(a) = a {
                        sink.a_only(n, a);
                    }
                    if let Some(b) = b {
                        sink.b_only(n, b);
                    }
                }
            }
        }

        sink.finish()
    }

    fn name(&self) -> &str {
        "positional"
    }
}
