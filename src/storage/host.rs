//! Content host abstraction
//!
//! Mirrors the two calls of the GitHub contents API the file store needs:
//! "read document by path" and "conditionally write document by path".

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::StoreResult;

/// A document as returned by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentsFile {
    /// Base64 payload, possibly wrapped with line breaks
    #[serde(default)]
    pub content: Option<String>,
    /// Version token of the current revision
    pub sha: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub encoding: Option<String>,
}

/// Body of a conditional write
#[derive(Debug, Clone, Serialize)]
pub struct PutContents {
    /// Commit message recorded by the host
    pub message: String,
    /// Base64 payload
    pub content: String,
    /// Token of the revision being replaced; absent when creating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

/// Remote version-controlled file host
#[async_trait]
pub trait ContentHost: Send + Sync {
    /// Fetch a document and its version token
    async fn get_file(&self, path: &str) -> StoreResult<ContentsFile>;

    /// Create or overwrite a document
    async fn put_file(&self, path: &str, body: &PutContents) -> StoreResult<()>;
}
