use std::collections::HashSet;

use crate::tokenizer::tokenize;
use crate::types::{CandidateFile, Document, MatchedWindow};

/// Common contract for both matching strategies, so the aggregator never
/// needs to know which one is in effect.
pub trait Matcher {
    /// Score `file` against the reference tokens and return the top `k`
    /// overlap-resolved windows, best first, ties broken by earlier start
    /// line.
    fn find_matches(&self, file: &CandidateFile, k: usize) -> Vec<MatchedWindow>;
}

/// Compute the reference token set for a matcher bound to `doc`.
///
/// Takes the lines strictly before the cursor (a partial current line
/// counts), keeps only the last `window_size` of them, and tokenizes. Lines
/// at or after the cursor never contribute. Computed once per matcher
/// instance and read for every candidate file.
pub(crate) fn reference_tokens(doc: &Document, window_size: usize) -> HashSet<String> {
    if window_size == 0 {
        return HashSet::new();
    }

    let before = doc.text_before_cursor();
    let lines: Vec<&str> = before.lines().collect();
    let start = lines.len().saturating_sub(window_size);
    let tail = lines[start..].join("\n");

    tokenize(&tail).map(str::to_owned).collect()
}

/// Borrowed view of an owned token set, for the set-algebra helpers.
pub(crate) fn token_view(tokens: &HashSet<String>) -> HashSet<&str> {
    tokens.iter().map(String::as_str).collect()
}

/// Top-`k` selection shared by both strategies: score descending, ties by
/// start line ascending.
pub(crate) fn top_k(mut windows: Vec<MatchedWindow>, k: usize) -> Vec<MatchedWindow> {
    windows.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.start_line.cmp(&b.start_line))
    });
    windows.truncate(k);
    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_excludes_text_after_cursor() {
        let source = "fn alpha() {}\nfn beta() {}\nfn gamma() {}\n";
        let cursor = source.find("beta").unwrap();
        let doc = Document::new("file:///a.rs", source, "rust", cursor);

        let tokens = reference_tokens(&doc, 10);
        assert!(tokens.contains("alpha"));
        assert!(tokens.contains("fn"));
        assert!(!tokens.contains("beta"));
        assert!(!tokens.contains("gamma"));
    }

    #[test]
    fn reference_is_clipped_to_last_window_size_lines() {
        let source = "one\ntwo\nthree\nfour\n";
        let doc = Document::new("file:///a.rs", source, "text", source.len());

        for window_size in 1..=4 {
            let tokens = reference_tokens(&doc, window_size);
            assert_eq!(tokens.len(), window_size, "window_size={window_size}");
            assert!(tokens.contains("four"));
        }

        let clipped = reference_tokens(&doc, 2);
        assert!(!clipped.contains("one"));
        assert!(!clipped.contains("two"));
        assert!(clipped.contains("three"));
    }

    #[test]
    fn zero_window_yields_empty_reference() {
        let doc = Document::new("file:///a.rs", "some text", "text", 9);
        assert!(reference_tokens(&doc, 0).is_empty());
    }

    #[test]
    fn partial_current_line_contributes() {
        let source = "first line\nseco";
        let doc = Document::new("file:///a.rs", source, "text", source.len());
        let tokens = reference_tokens(&doc, 2);
        assert!(tokens.contains("seco"));
        assert!(tokens.contains("first"));
    }

    #[test]
    fn top_k_orders_by_score_then_position() {
        let windows = vec![
            MatchedWindow::new(4, 6, 0.5, String::new()),
            MatchedWindow::new(0, 2, 0.9, String::new()),
            MatchedWindow::new(2, 4, 0.5, String::new()),
        ];
        let top = top_k(windows, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].start_line, 0);
        // Tied scores fall back to the earlier window.
        assert_eq!(top[1].start_line, 2);
    }
}
