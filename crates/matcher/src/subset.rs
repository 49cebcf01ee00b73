use std::collections::HashSet;

use crate::overlap::resolve_overlaps;
use crate::similarity::containment;
use crate::strategy::{reference_tokens, token_view, top_k, Matcher};
use crate::tokenizer::token_set;
use crate::types::{CandidateFile, Document, MatchedWindow};

/// Strategy B: block/subset matcher.
///
/// Instead of strict sliding windows, the candidate is segmented into blocks
/// of consecutive non-blank lines (long blocks are split at `window_size`
/// lines) and each block is scored by how much of the reference vocabulary
/// it contains: `|block ∩ reference| / |reference|`. A block holding the
/// whole reference vocabulary scores 1 regardless of how its boundaries line
/// up with the reference extraction length.
pub struct SubsetMatcher {
    window_size: usize,
    reference: HashSet<String>,
}

impl SubsetMatcher {
    /// Bind a matcher to `doc`, computing the reference tokens once.
    #[must_use]
    pub fn new(window_size: usize, doc: &Document) -> Self {
        let reference = reference_tokens(doc, window_size);
        log::debug!(
            "Subset matcher bound: window_size={}, reference_tokens={}",
            window_size,
            reference.len()
        );
        Self {
            window_size,
            reference,
        }
    }

    /// The memoized reference token set.
    #[must_use]
    pub const fn reference(&self) -> &HashSet<String> {
        &self.reference
    }

    /// Segment `lines` into half-open block ranges: runs of non-blank lines,
    /// split whenever a run exceeds `window_size` lines.
    fn blocks(&self, lines: &[&str]) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        let mut start: Option<usize> = None;

        for (idx, line) in lines.iter().enumerate() {
            let blank = line.trim().is_empty();
            match start {
                None if !blank => start = Some(idx),
                Some(s) if blank => {
                    out.push((s, idx));
                    start = None;
                }
                Some(s) if idx - s == self.window_size => {
                    out.push((s, idx));
                    start = Some(idx);
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            out.push((s, lines.len()));
        }
        out
    }

    /// All overlap-resolved scored blocks of `file`, in position order.
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
        let windows: Vec<MatchedWindow> = self
            .blocks(&lines)
            .into_iter()
            .map(|(start, end)| {
                let text = lines[start..end].join("\n");
                let score = containment(&token_set(&text), &reference);
                MatchedWindow::new(start, end, score, text)
            })
            .collect();

        log::trace!("{}: {} blocks", file.display_path(), windows.len());

        // Blocks are disjoint by construction; the resolver only
        // re-establishes position order and keeps the contract shared with
        // strategy A.
        resolve_overlaps(windows)
    }
}

impl Matcher for SubsetMatcher {
    fn find_matches(&self, file: &CandidateFile, k: usize) -> Vec<MatchedWindow> {
        top_k(self.scored_windows(file), k)
    }
}
