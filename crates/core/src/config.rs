//! Configuration for the diff engine

use serde::{Deserialize, Serialize};

use crate::algorithm::{LineAligner, LookaheadAligner, PositionalAligner, LOOKAHEAD_WINDOW};

/// Line alignment strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentStrategy {
    /// Forward pass with bounded lookahead resynchronization (default)
    #[default]
    Lookahead,
    /// Position-by-position comparison without resynchronization
    Positional,
}

impl AlignmentStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignmentStrategy::Lookahead => "lookahead",
            AlignmentStrategy::Positional => "positional",
        }
    }
}

/// Configuration for line comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Algorithm used to align lines
    pub strategy: AlignmentStrategy,

    /// Compare whitespace-folded text instead of raw text
    pub ignore_whitespace: bool,

    /// Lines scanned ahead by the lookahead strategy
    pub lookahead_window: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            strategy: AlignmentStrategy::default(),
            ignore_whitespace: false,
            lookahead_window: LOOKAHEAD_WINDOW,
        }
    }

    /// Exact comparison: every byte of every line counts
    pub fn strict() -> Self {
        Self::new()
    }

    /// Whitespace-insensitive comparison
    pub fn lenient() -> Self {
        Self::new().with_ignore_whitespace(true)
    }

    /// Set the alignment strategy
    pub fn with_strategy(mut self, strategy: AlignmentStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set whether to ignore whitespace
    pub fn with_ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    /// Set the lookahead window
    pub fn with_lookahead_window(mut self, window: usize) -> Self {
        self.lookahead_window = window;
        self
    }

    /// Build the aligner this configuration selects
    pub fn build_aligner(&self) -> Box<dyn LineAligner> {
        match self.strategy {
            AlignmentStrategy::Lookahead => {
                Box::new(LookaheadAligner::new().with_window(self.lookahead_window))
            }
            AlignmentStrategy::Positional => Box::new(PositionalAligner::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DiffConfig::default();
        assert_eq!(config.strategy, AlignmentStrategy::Lookahead);
        assert!(!config.ignore_whitespace);
        assert_eq!(config.lookahead_window, 5);
        assert_eq!(config.build_aligner().name(), "lookahead");
    }

    #[test]
    fn test_presets() {
        assert_eq!(DiffConfig::strict(), DiffConfig::default());
        assert!(DiffConfig::lenient().ignore_whitespace);
    }

    #[test]
    fn test_builder_pattern() {
        let config = DiffConfig::new()
            .with_strategy(AlignmentStrategy::Positional)
            .with_lookahead_window(9)
            .with_ignore_whitespace(true);

        assert_eq!(config.strategy, AlignmentStrategy::Positional);
        assert_eq!(config.lookahead_window, 9);
        assert!(config.ignore_whitespace);
        assert_eq!(config.build_aligner().name(), "positional");
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: DiffConfig = serde_json::from_str(r#"{"strategy": "positional"}"#).unwrap();
        assert_eq!(config.strategy, AlignmentStrategy::Positional);
        assert_eq!(config.lookahead_window, LOOKAHEAD_WINDOW);
        assert_eq!(AlignmentStrategy::Positional.as_str(), "positional");
    }
}
