//! Error types shared across the RAGNav crates

use thiserror::Error;

/// Result alias used throughout the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the knowledge-base pipeline
///
/// Every fallible operation returns one of these variants; stages propagate
/// errors unchanged to the pipeline caller. An empty retrieval result is not
/// an error and has no variant here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl Error {
    /// Process exit code for this error kind.
    ///
    /// The CLI maps error kinds to distinct exit codes instead of logging
    /// and swallowing them.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidInput(_) => 2,
            Error::Provider(_) | Error::Network(_) | Error::Timeout(_) => 3,
            Error::Store(_) => 4,
            Error::Configuration(_) | Error::Serialization(_) => 5,
            Error::Cancelled => 130,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        assert_eq!(Error::InvalidInput("x".into()).exit_code(), 2);
        assert_eq!(Error::Provider("x".into()).exit_code(), 3);
        assert_eq!(Error::Network("x".into()).exit_code(), 3);
        assert_eq!(Error::Store("x".into()).exit_code(), 4);
        assert_eq!(Error::Configuration("x".into()).exit_code(), 5);
        assert_eq!(Error::Cancelled.exit_code(), 130);
    }
}
