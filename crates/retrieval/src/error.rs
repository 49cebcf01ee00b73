use thiserror::Error;

pub type Result<T> = std::result::Result<T, RetrievalError>;

#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Matcher error: {0}")]
    MatcherError(#[from] snippet_matcher::MatchError),
}
