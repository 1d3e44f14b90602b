//! Whole-document comparison outcome

use serde::{Deserialize, Serialize};

use crate::pipeline::TextPipeline;

/// Verdict for a pair of documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Identical,
    Different,
    /// Both documents are absent or blank
    Empty,
}

/// Presentation hint that maps 1:1 to a [`Verdict`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Match,
    Mismatch,
    None,
}

/// Result of [`compare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub verdict: Verdict,
}

impl ComparisonOutcome {
    pub fn new(verdict: Verdict) -> Self {
        Self { verdict }
    }

    pub fn style(&self) -> StyleTag {
        match self.verdict {
            Verdict::Identical => StyleTag::Match,
            Verdict::Different => StyleTag::Mismatch,
            Verdict::Empty => StyleTag::None,
        }
    }

    /// User-facing message; empty when there is nothing to compare
    pub fn message(&self) -> &'static str {
        match self.verdict {
            Verdict::Identical => "Files are IDENTICAL.",
            Verdict::Different => "Files are DIFFERENT.",
            Verdict::Empty => "",
        }
    }
}

pub(crate) fn is_blank(document: Option<&str>) -> bool {
    document.map_or(true, |text| text.trim().is_empty())
}

/// Compare two whole documents.
///
/// Carriage returns are stripped from both sides before anything else, so
/// documents that only differ in line endings are always identical. With
/// `ignore_whitespace`, each full document is whitespace-folded before the
/// comparison.
pub fn compare(original: Option<&str>, changed: Option<&str>, ignore_whitespace: bool) -> ComparisonOutcome {
    if is_blank(original) && is_blank(changed) {
        return ComparisonOutcome::new(Verdict::Empty);
    }

    let pipeline = TextPipeline::for_documents(ignore_whitespace);
    let original = pipeline.apply(original.unwrap_or_default());
    let changed = pipeline.apply(changed.unwrap_or_default());

    if original == changed {
        ComparisonOutcome::new(Verdict::Identical)
    } else {
        ComparisonOutcome::new(Verdict::Different)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs() {
        assert_eq!(compare(None, None, false).verdict, Verdict::Empty);
        assert_eq!(compare(Some(""), Some(""), false).verdict, Verdict::Empty);
        assert_eq!(compare(Some(" \r\n\t"), None, true).verdict, Verdict::Empty);
        assert_eq!(compare(None, None, false).style(), StyleTag::None);
        assert_eq!(compare(None, None, false).message(), "");
    }

    #[test]
    fn test_identical() {
        let outcome = compare(Some("a\nb"), Some("a\nb"), false);
        assert_eq!(outcome.verdict, Verdict::Identical);
        assert_eq!(outcome.style(), StyleTag::Match);
        assert_eq!(outcome.message(), "Files are IDENTICAL.");
    }

    #[test]
    fn test_carriage_returns_never_matter() {
        assert_eq!(
            compare(Some("a\r\nb\r\n"), Some("a\nb\n"), false).verdict,
            Verdict::Identical
        );
        assert_eq!(
            compare(Some("a\r\nb"), Some("a\nb"), true).verdict,
            Verdict::Identical
        );
    }

    #[test]
    fn test_whitespace_sensitivity() {
        let original = Some("a\n\t\n b c");
        let changed = Some("a b   c");

        let strict = compare(original, changed, false);
        assert_eq!(strict.verdict, Verdict::Different);
        assert_eq!(strict.style(), StyleTag::Mismatch);
        assert_eq!(strict.message(), "Files are DIFFERENT.");

        assert_eq!(compare(original, changed, true).verdict, Verdict::Identical);
    }

    #[test]
    fn test_one_side_absent() {
        assert_eq!(compare(Some("text"), None, false).verdict, Verdict::Different);
        assert_eq!(compare(None, Some("text"), true).verdict, Verdict::Different);
    }
}
