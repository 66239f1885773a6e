//! In-process content host
//!
//! Behaves like the GitHub contents API for the calls the file store makes:
//! payloads are base64 (served wrapped at 60 columns), every revision gets a
//! new version token, a write carrying a stale token is rejected with 409 and
//! overwriting an existing file without a token is rejected with 422.
//! Nothing survives a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};

use super::host::{ContentHost, ContentsFile, PutContents};
use super::{StoreError, StoreResult};

const LINE_WIDTH: usize = 60;

#[derive(Debug, Clone)]
struct StoredFile {
    content: String,
    sha: String,
}

#[derive(Debug, Default)]
pub struct MemoryHost {
    files: RwLock<HashMap<String, StoredFile>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl MemoryHost {
    /// Raw base64 payload of a document, unwrapped
    pub fn raw_content(&self, path: &str) -> Option<String> {
        self.files.read().get(path).map(|f| f.content.clone())
    }

    /// Current version token of a document
    pub fn sha(&self, path: &str) -> Option<String> {
        self.files.read().get(path).map(|f| f.sha.clone())
    }
}

#[async_trait]
impl ContentHost for MemoryHost {
    async fn get_file(&self, path: &str) -> StoreResult<ContentsFile> {
        // let concurrent callers interleave the way network calls would
        tokio::task::yield_now().await;

        let files = self.files.read();
        let file = files
            .get(path)
            .ok_or_else(|| StoreError::fetch(path, Some(404), "Not Found"))?;

        Ok(ContentsFile {
            content: Some(wrap_lines(&file.content)),
            sha: file.sha.clone(),
            path: path.to_string(),
            encoding: Some("base64".to_string()),
        })
    }

    async fn put_file(&self, path: &str, body: &PutContents) -> StoreResult<()> {
        tokio::task::yield_now().await;

        let mut files = self.files.write();
        if let Some(current) = files.get(path) {
            match body.sha.as_deref() {
                None => {
                    return Err(StoreError::write(
                        path,
                        Some(422),
                        "\"sha\" wasn't supplied",
                    ))
                }
                Some(sha) if sha != current.sha => {
                    return Err(StoreError::write(
                        path,
                        Some(409),
                        format!("{} does not match {}", path, sha),
                    ))
                }
                Some(_) => {}
            }
        }

        let content: String = body.content.split_whitespace().collect();
        let sha = hex::encode(Sha256::digest(content.as_bytes()));
        files.insert(path.to_string(), StoredFile { content, sha });
        Ok(())
    }
}

fn wrap_lines(content: &str) -> String {
    let mut wrapped = String::with_capacity(content.len() + content.len() / LINE_WIDTH + 1);
    for (i, ch) in content.chars().enumerate() {
        if i > 0 && i % LINE_WIDTH == 0 {
            wrapped.push('\n');
        }
        wrapped.push(ch);
    }
    wrapped.push('\n');
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(content: &str, sha: Option<String>) -> PutContents {
        PutContents {
            message: "Update data/students.json".to_string(),
            content: content.to_string(),
            sha,
        }
    }

    #[tokio::test]
    async fn test_create_then_conditional_overwrite() {
        let host = MemoryHost::new();
        let path = "data/students.json";

        host.put_file(path, &put("e30=", None)).await.unwrap();
        let first = host.get_file(path).await.unwrap();

        host.put_file(path, &put("W10=", Some(first.sha.clone())))
            .await
            .unwrap();
        let second = host.get_file(path).await.unwrap();
        assert_ne!(first.sha, second.sha);
        assert_eq!(host.raw_content(path).as_deref(), Some("W10="));
    }

    #[tokio::test]
    async fn test_stale_token_is_rejected() {
        let host = MemoryHost::new();
        let path = "data/students.json";
        host.put_file(path, &put("e30=", None)).await.unwrap();
        let stale = host.sha(path);
        host.put_file(path, &put("W10=", stale.clone())).await.unwrap();

        let err = host.put_file(path, &put("bnVsbA==", stale)).await.unwrap_err();
        assert_eq!(err.status(), Some(409));

        let err = host.put_file(path, &put("bnVsbA==", None)).await.unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert_eq!(host.raw_content(path).as_deref(), Some("W10="));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let host = MemoryHost::new();
        let err = host.get_file("data/teachers.json").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(host.sha("data/teachers.json").is_none());
    }

    #[test]
    fn test_wrap_lines() {
        let content = "a".repeat(130);
        let wrapped = wrap_lines(&content);
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 60);
        assert_eq!(lines[2].len(), 10);
    }
}
