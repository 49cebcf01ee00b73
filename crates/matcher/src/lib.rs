//! # Snippet Matcher
//!
//! Window-level similarity matching for the similar-snippet retrieval
//! engine: tokenization, Jaccard scoring, two selectable window-matching
//! strategies, and overlap resolution.
//!
//! ## Architecture
//!
//! ```text
//! Document (text before cursor)
//!     │
//!     ├──> Reference tokens (last window_size lines, computed once)
//!     │
//! CandidateFile ──> Strategy A: fixed sliding windows + Jaccard
//!               └─> Strategy B: non-blank blocks + containment
//!     │
//!     ├──> Overlap resolution (best window of each cluster wins)
//!     │
//!     └──> find_matches(file, k) → top-k MatchedWindow
//! ```
//!
//! Both strategies share the [`Matcher`] trait so callers select one per
//! retrieval call and never re-check which is in effect.
//!
//! ## Example
//!
//! ```rust
//! use snippet_matcher::{CandidateFile, Document, FixedWindowMatcher, Matcher};
//!
//! let doc = Document::new("file:///active.rs", "let total = items.len();", "rust", 24);
//! let matcher = FixedWindowMatcher::new(1, &doc);
//!
//! let neighbor = CandidateFile::new("file:///sibling.rs", "let count = items.len();");
//! let matches = matcher.find_matches(&neighbor, 1);
//! assert!(matches[0].score > 0.0);
//! ```

mod config;
mod error;
mod overlap;
mod similarity;
mod strategy;
mod subset;
mod tokenizer;
mod types;
mod window;

pub use config::MatchOptions;
pub use error::{MatchError, Result};
pub use overlap::resolve_overlaps;
pub use similarity::{containment, jaccard};
pub use strategy::Matcher;
pub use subset::SubsetMatcher;
pub use tokenizer::{token_set, tokenize};
pub use types::{CandidateFile, Document, MatchedWindow, SortOrder};
pub use window::FixedWindowMatcher;
