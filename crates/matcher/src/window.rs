use std::collections::HashSet;

use crate::overlap::resolve_overlaps;
use crate::similarity::jaccard;
use crate::strategy::{reference_tokens, token_view, top_k, Matcher};
use crate::tokenizer::token_set;
use crate::types::{CandidateFile, Document, MatchedWindow, SortOrder};

/// Strategy A: fixed-window Jaccard matcher.
///
/// Slides a `window_size`-line window across each candidate file and scores
/// every window against a reference token set drawn from the text before the
/// cursor in the bound document. The reference set is computed at
/// construction and reused for every candidate.
pub struct FixedWindowMatcher {
    window_size: usize,
    reference: HashSet<String>,
    sort: SortOrder,
}

impl FixedWindowMatcher {
    /// Bind a matcher to `doc`. This triggers the one-time reference-token
    /// computation.
    #[must_use]
    pub fn new(window_size: usize, doc: &Document) -> Self {
        let reference = reference_tokens(doc, window_size);
        log::debug!(
            "Fixed-window matcher bound: window_size={}, reference_tokens={}",
            window_size,
            reference.len()
        );
        Self {
            window_size,
            reference,
            sort: SortOrder::Descending,
        }
    }

    /// Builder: ordering for `scored_windows` listings
    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// The memoized reference token set.
    #[must_use]
    pub const fn reference(&self) -> &HashSet<String> {
        &self.reference
    }

    /// All overlap-resolved windows of `file`, ordered per the configured
    /// `SortOrder`.
    ///
    /// Every valid start position produces a candidate window; a file with
    /// fewer lines than `window_size` produces exactly one window spanning
    /// the whole file. Windows never extend past end-of-file.
    #[must_use]
    pub fn scored_windows(&self, file: &CandidateFile) -> Vec<MatchedWindow> {
        if self.window_size == 0 {
            return Vec::new();
        }
        let lines: Vec<&str> = file.source.lines().collect();
        if lines.is_empty() {
            return Vec::new();
        }

        let reference = token_view(&self.reference);
        let size = self.window_size.min(lines.len());

        let windows: Vec<MatchedWindow> = (0..=lines.len() - size)
            .map(|start| {
                let end = start + size;
                let text = lines[start..end].join("\n");
                let score = jaccard(&token_set(&text), &reference);
                MatchedWindow::new(start, end, score, text)
            })
            .collect();

        log::trace!(
            "{}: {} raw windows of {} lines",
            file.display_path(),
            windows.len(),
            size
        );

        let mut resolved = resolve_overlaps(windows);
        match self.sort {
            SortOrder::None => {} // resolver already leaves position order
            SortOrder::Ascending => resolved.sort_by(|a, b| {
                a.score
                    .partial_cmp(&b.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.start_line.cmp(&b.start_line))
            }),
            SortOrder::Descending => resolved.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.start_line.cmp(&b.start_line))
            }),
        }
        resolved
    }
}

impl Matcher for FixedWindowMatcher {
    fn find_matches(&self, file: &CandidateFile, k: usize) -> Vec<MatchedWindow> {
        top_k(self.scored_windows(file), k)
    }
}
