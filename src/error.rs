use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Offset {offset} is past the end of a {len}-unit document")]
    OutOfBounds { offset: usize, len: usize },

    #[error("Offset {offset} splits a surrogate pair")]
    SplitSurrogate { offset: usize },
}

/// Convenience Result type using our Error
pub type Result<T> = std::result::Result<T, Error>;
