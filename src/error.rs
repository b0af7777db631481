use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("'{0}' is not a valid five-letter word")]
    InvalidWord(String),

    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    #[error("'{0}' is not a feedback pattern (expected e.g. gybbb, 21000 or 189)")]
    InvalidFeedback(String),

    #[error("{0} words do not fit in a 16-bit word index")]
    TooManyWords(usize),

    #[error("no strategy identifies every solution within six guesses")]
    Unresolvable,

    #[error("malformed feedback table artifact: {0}")]
    Artifact(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
