//! Storage error types

use thiserror::Error;

/// Errors raised while reading or writing remote documents
#[derive(Error, Debug)]
pub enum StoreError {
    /// Access token or repository not configured
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The host refused the read, or the payload could not be decoded
    #[error("Failed to fetch {path}: {reason}")]
    RemoteFetch {
        path: String,
        status: Option<u16>,
        reason: String,
    },

    /// The host refused the write, or the content could not be encoded
    #[error("Failed to write {path}: {reason}")]
    RemoteWrite {
        path: String,
        status: Option<u16>,
        reason: String,
    },

    /// No record with the given id; nothing was written
    #[error("No {label} with id {id}")]
    NotFound { label: &'static str, id: i64 },
}

impl StoreError {
    pub fn fetch(path: &str, status: Option<u16>, reason: impl Into<String>) -> Self {
        StoreError::RemoteFetch {
            path: path.to_string(),
            status,
            reason: reason.into(),
        }
    }

    pub fn write(path: &str, status: Option<u16>, reason: impl Into<String>) -> Self {
        StoreError::RemoteWrite {
            path: path.to_string(),
            status,
            reason: reason.into(),
        }
    }

    /// HTTP status reported by the host, if the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::RemoteFetch { status, .. } | StoreError::RemoteWrite { status, .. } => {
                *status
            }
            _ => None,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
