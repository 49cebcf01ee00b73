use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Fully-resolved matching configuration.
///
/// The engine never consults a preset registry; whatever maps a language id
/// or experiment flag to one of these values lives entirely in the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchOptions {
    /// Lines per comparison window; 0 disables matching
    pub window_size: usize,

    /// Minimum score, in [0, 1]; snippets must score strictly above it
    pub threshold: f32,

    /// Global cap on returned snippets; 0 short-circuits all work
    pub max_top_snippets: usize,

    /// Candidate files whose source is at least this long (in bytes) are
    /// skipped entirely
    pub max_chars_per_file: usize,

    /// Candidate list is truncated to this many files, in input order
    pub max_files: usize,

    /// Per-file cap on returned windows
    pub max_snippets_per_file: usize,

    /// Select the block/subset matcher (strategy B) over fixed windows
    pub use_subset_matching: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            window_size: 60,
            threshold: 0.0,
            max_top_snippets: 4,
            max_chars_per_file: 10_000,
            max_files: 20,
            max_snippets_per_file: 1,
            use_subset_matching: false,
        }
    }
}

impl MatchOptions {
    /// Small windows, high bar, single result. For hosts that would rather
    /// return nothing than a weak snippet.
    #[must_use]
    pub fn conservative() -> Self {
        Self {
            window_size: 10,
            threshold: 0.3,
            max_top_snippets: 1,
            max_snippets_per_file: 1,
            ..Default::default()
        }
    }

    /// Always-empty configuration. `max_top_snippets == 0` makes the
    /// aggregator return before any tokenization happens.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            window_size: 0,
            threshold: 1.0,
            max_top_snippets: 0,
            max_chars_per_file: 0,
            max_files: 0,
            max_snippets_per_file: 0,
            use_subset_matching: false,
        }
    }

    /// Per-language override with much larger budgets, for languages where
    /// wide retrieval pays off.
    #[must_use]
    pub fn expanded() -> Self {
        Self {
            window_size: 60,
            threshold: 0.0,
            max_top_snippets: 16,
            max_chars_per_file: 100_000,
            max_files: 200,
            max_snippets_per_file: 4,
            use_subset_matching: false,
        }
    }

    /// Builder: select strategy B
    #[must_use]
    pub const fn with_subset_matching(mut self) -> Self {
        self.use_subset_matching = true;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) || !self.threshold.is_finite() {
            return Err(MatchError::invalid_options(format!(
                "threshold ({}) must be within [0, 1]",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Whether this configuration can ever produce a snippet.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.max_top_snippets > 0 && self.window_size > 0
    }
}
