//! Error types for eolwatch

use std::path::PathBuf;
use thiserror::Error;

/// Error type for the lifecycle lookup
#[derive(Debug, Error)]
pub enum EolError {
    #[error("Failed to read {}: {source}", path.display())]
    OsRelease {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No VERSION_ID entry found")]
    MissingVersionId,

    #[error("Invalid VERSION_ID value: {0:?}")]
    InvalidVersionId(String),

    #[error("Invalid API URL {url:?}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid response payload: {0}")]
    Payload(String),

    #[error("Metadata error: {0}")]
    Metadata(String),
}

impl EolError {
    pub fn os_release(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OsRelease {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn payload(msg: impl Into<String>) -> Self {
        Self::Payload(msg.into())
    }

    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, EolError>;
