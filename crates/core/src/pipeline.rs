//! Text normalization pipeline
//!
//! Chains normalizers so that each one works on the output of the previous
//! one.

use crate::normalizers::{LineEndingNormalizer, Normalizer, WhitespaceNormalizer};

/// An ordered chain of text normalizers
#[derive(Debug, Default, Clone)]
pub struct TextPipeline {
    normalizers: Vec<Box<dyn Normalizer>>,
}

impl TextPipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            normalizers: Vec::new(),
        }
    }

    /// Pipeline used for whole-document comparison.
    ///
    /// Carriage returns are always stripped; whitespace folding is added on
    /// top when `ignore_whitespace` is set.
    pub fn for_documents(ignore_whitespace: bool) -> Self {
        let pipeline = Self::new().add_normalizer(Box::new(LineEndingNormalizer));
        if ignore_whitespace {
            pipeline.add_normalizer(Box::new(WhitespaceNormalizer))
        } else {
            pipeline
        }
    }

    /// Pipeline used for comparing single lines.
    ///
    /// Lines have already been split on line feeds, so the only candidate
    /// normalizer is whitespace folding.
    pub fn for_lines(ignore_whitespace: bool) -> Self {
        if ignore_whitespace {
            Self::new().add_normalizer(Box::new(WhitespaceNormalizer))
        } else {
            Self::new()
        }
    }

    /// Add a normalizer to the pipeline
    pub fn add_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.normalizers.push(normalizer);
        self
    }

    /// Run `input` through every normalizer and return the final text
    pub fn apply(&self, input: &str) -> String {
        self.normalizers
            .iter()
            .fold(input.to_string(), |text, normalizer| normalizer.normalize(&text))
    }

    /// Get the number of normalizers in the pipeline
    pub fn len(&self) -> usize {
        self.normalizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalizers.is_empty()
    }
}
