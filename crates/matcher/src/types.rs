use serde::{Deserialize, Serialize};

/// The document currently being edited, owned by the caller.
///
/// The engine only ever reads text strictly before `cursor_offset`; everything
/// at or after the cursor is invisible to matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Identifier for the document (editor URI or similar)
    pub uri: String,

    /// Full text of the document
    pub source: String,

    /// Language identifier (e.g. "rust", "python")
    pub language_id: String,

    /// Byte offset of the cursor within `source`
    pub cursor_offset: usize,

    /// Workspace-relative path, when the caller has one
    pub relative_path: Option<String>,
}

impl Document {
    pub fn new(
        uri: impl Into<String>,
        source: impl Into<String>,
        language_id: impl Into<String>,
        cursor_offset: usize,
    ) -> Self {
        Self {
            uri: uri.into(),
            source: source.into(),
            language_id: language_id.into(),
            cursor_offset,
            relative_path: None,
        }
    }

    /// Builder: set the workspace-relative path
    #[must_use]
    pub fn with_relative_path(mut self, path: impl Into<String>) -> Self {
        self.relative_path = Some(path.into());
        self
    }

    /// The text strictly before the cursor, clamped to the source length.
    ///
    /// Hosts may count offsets in units other than bytes, so an offset
    /// landing inside a multi-byte character is an expected caller
    /// condition; it is clamped back to the nearest char boundary rather
    /// than panicking.
    #[must_use]
    pub fn text_before_cursor(&self) -> &str {
        let mut end = self.cursor_offset.min(self.source.len());
        while !self.source.is_char_boundary(end) {
            end -= 1;
        }
        &self.source[..end]
    }
}

/// A neighbor file eligible for matching, read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateFile {
    /// Identifier for the file (editor URI or similar)
    pub uri: String,

    /// Full text of the file
    pub source: String,

    /// Workspace-relative path, when the caller has one
    pub relative_path: Option<String>,
}

impl CandidateFile {
    pub fn new(uri: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            source: source.into(),
            relative_path: None,
        }
    }

    /// Builder: set the workspace-relative path
    #[must_use]
    pub fn with_relative_path(mut self, path: impl Into<String>) -> Self {
        self.relative_path = Some(path.into());
        self
    }

    /// Path to report in output snippets: relative path when present,
    /// otherwise the uri.
    #[must_use]
    pub fn display_path(&self) -> &str {
        self.relative_path.as_deref().unwrap_or(&self.uri)
    }
}

/// A scored line range within a single candidate file.
///
/// Line ranges are 0-based and half-open: `[start_line, end_line)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedWindow {
    /// First line of the window (0-based, inclusive)
    pub start_line: usize,

    /// One past the last line of the window (exclusive)
    pub end_line: usize,

    /// Jaccard (strategy A) or containment (strategy B) score in [0, 1]
    pub score: f32,

    /// The rendered text of the window's lines
    pub text: String,
}

impl MatchedWindow {
    #[must_use]
    pub fn new(start_line: usize, end_line: usize, score: f32, text: String) -> Self {
        Self {
            start_line,
            end_line,
            score,
            text,
        }
    }

    /// Number of lines spanned by this window
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }

    /// Whether two windows share at least one line
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_line < other.end_line && other.start_line < self.end_line
    }
}

/// Ordering applied to the full overlap-resolved window listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Position order: by start line ascending
    #[default]
    None,

    /// By score ascending
    Ascending,

    /// By score descending
    Descending,
}
