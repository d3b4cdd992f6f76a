use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the list generators
#[derive(Error, Debug)]
pub enum ListgenError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("{locator} is not valid UTF-8 (first bad byte at offset {valid_up_to})")]
    Decode { locator: String, valid_up_to: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid source: {0}")]
    InvalidSource(String),

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Unexpected data format: {0}")]
    Format(String),
}

/// Result type alias for the list generators
pub type Result<T> = std::result::Result<T, ListgenError>;

impl ListgenError {
    /// Create an invalid source error
    pub fn invalid_source<S: Into<String>>(msg: S) -> Self {
        ListgenError::InvalidSource(msg.into())
    }

    /// Create a data format error
    pub fn format<S: Into<String>>(msg: S) -> Self {
        ListgenError::Format(msg.into())
    }

    pub fn read<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        ListgenError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        ListgenError::Write {
            path: path.into(),
            source,
        }
    }
}
