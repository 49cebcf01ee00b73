use serde::{Deserialize, Serialize};
use snippet_matcher::{
    CandidateFile, Document, FixedWindowMatcher, MatchOptions, Matcher, SubsetMatcher,
};

use crate::cancel::CancelFlag;

/// A scored, file-attributed window returned to the caller.
///
/// Line ranges are 0-based and half-open, as in
/// [`snippet_matcher::MatchedWindow`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snippet {
    /// Path of the candidate file this snippet came from (relative path when
    /// available, uri otherwise)
    pub relative_path: String,

    /// First line of the snippet (0-based, inclusive)
    pub start_line: usize,

    /// One past the last line of the snippet (exclusive)
    pub end_line: usize,

    /// Similarity score in [0, 1]
    pub score: f32,

    /// The snippet text
    pub text: String,
}

/// Find the windows in `candidates` most similar to the context before the
/// cursor in `doc`.
///
/// Candidates are processed in caller order; that order decides which files
/// survive the `max_files` truncation and breaks score ties. The result is
/// sorted by score ascending and capped at `max_top_snippets` — callers
/// wanting best-first order re-sort. Inputs are never mutated; the engine
/// holds no state across calls.
#[must_use]
pub fn get_similar_snippets(
    doc: &Document,
    candidates: &[CandidateFile],
    options: &MatchOptions,
) -> Vec<Snippet> {
    get_similar_snippets_with_cancel(doc, candidates, options, &CancelFlag::new())
}

/// [`get_similar_snippets`] with a cooperative cancellation checkpoint
/// between candidate files.
///
/// Cancellation is advisory: when the flag is set mid-run, matching stops
/// before the next file and the filtered, sorted, truncated result of the
/// files already processed is returned (possibly empty).
#[must_use]
pub fn get_similar_snippets_with_cancel(
    doc: &Document,
    candidates: &[CandidateFile],
    options: &MatchOptions,
    cancel: &CancelFlag,
) -> Vec<Snippet> {
    // 1. Disabled configurations return before any tokenization happens.
    if options.max_top_snippets == 0 || options.window_size == 0 {
        return Vec::new();
    }

    // 2. Resolve the strategy once per call; binding it computes the
    //    reference tokens.
    let matcher: Box<dyn Matcher> = if options.use_subset_matching {
        Box::new(SubsetMatcher::new(options.window_size, doc))
    } else {
        Box::new(FixedWindowMatcher::new(options.window_size, doc))
    };

    // 3-4. Drop empty and oversized files, then truncate in caller order.
    let eligible: Vec<&CandidateFile> = candidates
        .iter()
        .filter(|f| !f.source.is_empty() && f.source.len() < options.max_chars_per_file)
        .take(options.max_files)
        .collect();

    log::debug!(
        "Similar snippets for {}: {} of {} candidates eligible",
        doc.uri,
        eligible.len(),
        candidates.len()
    );

    // 5. Sequential per-file matching, with a checkpoint between files.
    let mut scored: Vec<Snippet> = Vec::new();
    for file in eligible {
        if cancel.is_cancelled() {
            log::debug!("Similar snippets for {}: cancelled by host", doc.uri);
            break;
        }
        for window in matcher.find_matches(file, options.max_snippets_per_file) {
            scored.push(Snippet {
                relative_path: file.display_path().to_string(),
                start_line: window.start_line,
                end_line: window.end_line,
                score: window.score,
                text: window.text,
            });
        }
    }

    // 6. Keep only real matches strictly above the threshold.
    scored.retain(|s| {
        s.score.is_finite() && s.score > 0.0 && !s.text.is_empty() && s.score > options.threshold
    });

    // 7-8. Ascending by score (stable, so caller order breaks ties), then
    //      keep the highest-scoring tail.
    scored.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if scored.len() > options.max_top_snippets {
        scored.drain(..scored.len() - options.max_top_snippets);
    }

    log::debug!(
        "Similar snippets for {}: returning {} snippets",
        doc.uri,
        scored.len()
    );
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(source: &str) -> Document {
        Document::new("file:///active.txt", source, "text", source.len())
    }

    fn file(name: &str, source: &str) -> CandidateFile {
        CandidateFile::new(format!("file:///{name}"), source).with_relative_path(name)
    }

    #[test]
    fn disabled_options_short_circuit() {
        let candidates = vec![file("a.txt", "good morning")];
        let result =
            get_similar_snippets(&doc("good morning"), &candidates, &MatchOptions::disabled());
        assert!(result.is_empty());
    }

    #[test]
    fn zero_window_short_circuits() {
        let options = MatchOptions {
            window_size: 0,
            ..Default::default()
        };
        let candidates = vec![file("a.txt", "good morning")];
        assert!(get_similar_snippets(&doc("good morning"), &candidates, &options).is_empty());
    }

    #[test]
    fn empty_and_oversized_files_are_skipped() {
        let options = MatchOptions {
            window_size: 1,
            max_chars_per_file: 10,
            ..Default::default()
        };
        let candidates = vec![
            file("empty.txt", ""),
            file("big.txt", "good morning gang"), // 17 chars, over the cap
            file("ok.txt", "good mrng"),          // 9 chars
        ];
        let result = get_similar_snippets(&doc("good morning"), &candidates, &options);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].relative_path, "ok.txt");
    }

    #[test]
    fn file_at_exactly_max_chars_is_skipped() {
        let options = MatchOptions {
            window_size: 1,
            max_chars_per_file: 9,
            ..Default::default()
        };
        let candidates = vec![file("edge.txt", "good mrng")]; // exactly 9 chars
        assert!(get_similar_snippets(&doc("good morning"), &candidates, &options).is_empty());
    }

    #[test]
    fn later_files_fall_off_the_max_files_quota() {
        let options = MatchOptions {
            window_size: 1,
            max_files: 1,
            max_top_snippets: 10,
            ..Default::default()
        };
        let candidates = vec![
            file("first.txt", "nothing shared here"),
            file("second.txt", "good morning"),
        ];
        // Only first.txt is processed and it has no overlap with the
        // reference, so the exact match in second.txt is never seen.
        let result = get_similar_snippets(&doc("good morning"), &candidates, &options);
        assert!(result.is_empty());
    }

    #[test]
    fn scores_at_the_threshold_are_excluded() {
        // One shared token of three distinct: score exactly 1/3.
        let options = MatchOptions {
            window_size: 1,
            threshold: 1.0 / 3.0,
            ..Default::default()
        };
        let candidates = vec![file("a.txt", "good night")];
        assert!(get_similar_snippets(&doc("good morning"), &candidates, &options).is_empty());

        let looser = MatchOptions {
            threshold: 0.3,
            ..options
        };
        assert_eq!(
            get_similar_snippets(&doc("good morning"), &candidates, &looser).len(),
            1
        );
    }

    #[test]
    fn zero_score_windows_never_surface_at_zero_threshold() {
        let options = MatchOptions {
            window_size: 1,
            ..Default::default()
        };
        let candidates = vec![file("a.txt", "bad night")];
        assert!(get_similar_snippets(&doc("good morning"), &candidates, &options).is_empty());
    }

    #[test]
    fn result_is_ascending_and_capped_to_the_best_tail() {
        let options = MatchOptions {
            window_size: 1,
            max_top_snippets: 2,
            max_snippets_per_file: 1,
            ..Default::default()
        };
        let candidates = vec![
            file("third.txt", "good"),              // 1/2
            file("exact.txt", "good morning"),      // 1
            file("weak.txt", "good night person"),  // 1/4
        ];
        let result = get_similar_snippets(&doc("good morning"), &candidates, &options);

        assert_eq!(result.len(), 2);
        // Ascending order, highest-scoring tail survives the cap.
        assert_eq!(result[0].relative_path, "third.txt");
        assert!((result[0].score - 0.5).abs() < 1e-6);
        assert_eq!(result[1].relative_path, "exact.txt");
        assert_eq!(result[1].score, 1.0);
    }

    #[test]
    fn ties_keep_caller_order() {
        let options = MatchOptions {
            window_size: 1,
            max_top_snippets: 4,
            ..Default::default()
        };
        let candidates = vec![
            file("b.txt", "good night"),
            file("a.txt", "good evening"),
        ];
        let result = get_similar_snippets(&doc("good morning"), &candidates, &options);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].relative_path, "b.txt");
        assert_eq!(result[1].relative_path, "a.txt");
    }

    #[test]
    fn subset_strategy_is_selected_by_options() {
        let options = MatchOptions {
            window_size: 4,
            max_top_snippets: 4,
            ..Default::default()
        }
        .with_subset_matching();

        // Containment scoring: the block holds all reference tokens plus
        // noise, which plain Jaccard would score below 1.
        let candidates = vec![file("a.txt", "good extra\nmorning words")];
        let result = get_similar_snippets(&doc("good morning"), &candidates, &options);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].score, 1.0);
    }

    #[test]
    fn pre_cancelled_run_returns_empty() {
        let flag = CancelFlag::new();
        flag.cancel();

        let candidates = vec![file("a.txt", "good morning")];
        let result = get_similar_snippets_with_cancel(
            &doc("good morning"),
            &candidates,
            &MatchOptions::default(),
            &flag,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn snippet_falls_back_to_uri_without_relative_path() {
        let options = MatchOptions {
            window_size: 1,
            ..Default::default()
        };
        let candidates = vec![CandidateFile::new("file:///bare.txt", "good morning")];
        let result = get_similar_snippets(&doc("good morning"), &candidates, &options);
        assert_eq!(result[0].relative_path, "file:///bare.txt");
    }
}
