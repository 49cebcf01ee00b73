use thiserror::Error;

/// Result type for matcher operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors that can occur when configuring the matcher.
///
/// Degenerate inputs (empty files, zero-sized windows, disjoint token sets)
/// are data conditions that produce empty results, not errors; only a
/// malformed `MatchOptions` is rejected.
#[derive(Error, Debug)]
pub enum MatchError {
    /// Invalid configuration
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl MatchError {
    /// Create an invalid options error
    pub fn invalid_options(msg: impl Into<String>) -> Self {
        Self::InvalidOptions(msg.into())
    }
}
