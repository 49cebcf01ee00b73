use std::collections::HashSet;

/// Jaccard similarity between two token sets: `|A ∩ B| / |A ∪ B|`.
///
/// Symmetric, in [0, 1]. Both sets empty is defined as 0 rather than a
/// division by zero.
#[must_use]
pub fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> f32 {
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();

    if union == 0 {
        0.0
    } else {
        intersection as f32 / union as f32
    }
}

/// Containment of `reference` within `candidate`: `|C ∩ R| / |R|`.
///
/// Used by the subset matcher; 0 when the reference set is empty.
#[must_use]
pub fn containment(candidate: &HashSet<&str>, reference: &HashSet<&str>) -> f32 {
    if reference.is_empty() {
        return 0.0;
    }
    let intersection = candidate.intersection(reference).count();
    intersection as f32 / reference.len() as f32
}
