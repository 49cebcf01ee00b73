use crate::types::MatchedWindow;

/// Collapse overlapping windows from a single file to the highest-scoring
/// representatives.
///
/// Windows are visited by score descending, ties by start line ascending; a
/// window is kept only if it shares no line with an already-kept window. The
/// highest-scoring window of an overlapping cluster therefore wins and every
/// window overlapping it is dropped. Results come back in position order.
#[must_use]
pub fn resolve_overlaps(mut windows: Vec<MatchedWindow>) -> Vec<MatchedWindow> {
    windows.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.start_line.cmp(&b.start_line))
    });

    let mut kept: Vec<MatchedWindow> = Vec::new();
    for window in windows {
        if kept.iter().all(|k| !k.overlaps(&window)) {
            kept.push(window);
        }
    }

    kept.sort_by_key(|w| w.start_line);
    kept
}
