//! # Snippet Retrieval
//!
//! Cross-file aggregation for the similar-snippet retrieval engine. Given
//! the document being edited, a flat list of candidate neighbor files, and a
//! fully-resolved [`MatchOptions`] record, [`get_similar_snippets`] returns
//! a ranked, size-bounded list of [`Snippet`]s for prompt injection.
//!
//! The engine is a pure synchronous computation: no I/O, no persistence, no
//! state across calls. Hosts running on a cooperative scheduler wrap it in
//! their own task mechanism and may pass a [`CancelFlag`] to abort between
//! candidate files.

mod aggregate;
mod cancel;
mod error;

pub use aggregate::{get_similar_snippets, get_similar_snippets_with_cancel, Snippet};
pub use cancel::CancelFlag;
pub use error::{Result, RetrievalError};

// Re-exported so callers assemble inputs without a direct dependency on the
// matcher crate.
pub use snippet_matcher::{CandidateFile, Document, MatchOptions};
