//! Error types for the zen-dl library.

use thiserror::Error;

/// Errors that can occur while fetching record metadata or downloading files.
#[derive(Error, Debug)]
pub enum Error {
    /// A command-line value could not be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    /// The request failed before a response was received.
    #[error("request error: {0}")]
    Request(reqwest::Error),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    RequestFailed {
        /// HTTP status returned by the server.
        status: reqwest::StatusCode,
    },

    /// The record metadata response was not in the expected shape.
    #[error("malformed record response: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Request(err)
        }
    }
}

/// A specialized `Result` type for zen-dl operations.
pub type Result<T> = std::result::Result<T, Error>;
