use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// A token is a maximal run of ASCII alphanumerics. Everything else,
/// underscore included, separates tokens (`hello_world` yields two tokens,
/// `hello1` stays one).
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9]+").unwrap());

/// Split `text` into word tokens, in document order.
///
/// Lazy and restartable; case is preserved and no stop words are removed.
/// Any input yields a (possibly empty) sequence.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TOKEN.find_iter(text).map(|m| m.as_str())
}

/// Collect the distinct tokens of `text`. Order and repetition are
/// discarded; sets like these feed the Jaccard metric.
#[must_use]
pub fn token_set(text: &str) -> HashSet<&str> {
    tokenize(text).collect()
}
