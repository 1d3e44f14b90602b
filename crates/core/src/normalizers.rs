//! Text normalizers
//!
//! Provides the `Normalizer` trait and the built-in implementations used to
//! decide equality between lines and documents. Normalizers never affect what
//! is reported back to the caller: records always carry the raw line text.

/// Trait for text normalizers
pub trait Normalizer: Send + Sync {
    /// Normalize the input text
    ///
    /// # Arguments
    ///
    /// * `input` - The text to normalize
    ///
    /// # Returns
    ///
    /// The canonical form of `input`
    fn normalize(&self, input: &str) -> String;

    /// Get the name of this normalizer
    fn name(&self) -> &str;

    /// Clone this normalizer into a Box
    fn clone_box(&self) -> Box<dyn Normalizer>;
}

impl Clone for Box<dyn Normalizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl std::fmt::Debug for dyn Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("name", &self.name())
            .finish()
    }
}

// ============================================================================
// Built-in Normalizers
// ============================================================================

/// Removes every carriage return, turning `\r\n` line endings into `\n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEndingNormalizer;

impl Normalizer for LineEndingNormalizer {
    fn normalize(&self, input: &str) -> String {
        input.replace('\r', "")
    }

    fn name(&self) -> &str {
        "line_endings"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(*self)
    }
}

/// Folds whitespace into single spaces.
///
/// The transformation is, in order:
///
/// 1. every run of `\r` / `\n` becomes one space,
/// 2. every run of tab, form feed and vertical tab becomes one space,
/// 3. every run of whitespace left over collapses into one space,
/// 4. leading and trailing whitespace is trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceNormalizer;

impl Normalizer for WhitespaceNormalizer {
    fn normalize(&self, input: &str) -> String {
        let mut normalized = String::with_capacity(input.len());
        let mut in_whitespace = false;

        // Line breaks and tab-likes become spaces before runs collapse, so
        // every whitespace run folds to a single space.
        for ch in input.chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    normalized.push(' ');
                }
                in_whitespace = true;
            } else {
                normalized.push(ch);
                in_whitespace = false;
            }
        }

        let trimmed = normalized.trim();
        if trimmed.len() != normalized.len() {
            return trimmed.to_string();
        }
        normalized
    }

    fn name(&self) -> &str {
        "whitespace"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(*self)
    }
}

/// Whitespace-fold `text` with [`WhitespaceNormalizer`].
///
/// ```
/// use linecompare_core::normalize;
///
/// assert_eq!(normalize("  a \t b\r\n c  "), "a b c");
/// ```
pub fn normalize(text: &str) -> String {
    WhitespaceNormalizer.normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_folding() {
        assert_eq!(
            normalize("Line 1.\n\nLine 2.\t\tWith tabs.\r\n"),
            "Line 1. Line 2. With tabs."
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\r\n\u{000B}\u{000C} "), "");
    }

    #[test]
    fn test_mixed_runs_collapse_to_one_space() {
        assert_eq!(normalize("a \n\t  b"), "a b");
        assert_eq!(normalize("a\u{00A0}\u{00A0}b"), "a b");
    }

    #[test]
    fn test_single_line_is_tab_and_space_folding() {
        assert_eq!(normalize("\tfn  main()  {"), "fn main() {");
    }

    #[test]
    fn test_unicode_whitespace_folds_like_spaces() {
        assert_eq!(normalize("a\u{2003}\t\u{3000}b"), "a b");
    }

    #[test]
    fn test_line_endings() {
        let normalizer = LineEndingNormalizer;
        assert_eq!(normalizer.normalize("a\r\nb\rc"), "a\nbc");
        assert_eq!(normalizer.name(), "line_endings");
        assert_eq!(WhitespaceNormalizer.name(), "whitespace");
    }
}
