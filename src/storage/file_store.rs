//! Remote file store
//!
//! Reads and overwrites whole JSON documents on a [`ContentHost`]. A read is
//! one round trip; a write is two (fetch the current version token, then the
//! conditional overwrite). Nothing is retried, and nothing holds the token
//! between the two calls of a write.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use super::host::{ContentHost, PutContents};
use super::{StoreError, StoreResult};

#[derive(Clone)]
pub struct RemoteFileStore {
    host: Arc<dyn ContentHost>,
}

impl RemoteFileStore {
    pub fn new(host: Arc<dyn ContentHost>) -> Self {
        Self { host }
    }

    /// Fetch a document and parse it as JSON
    pub async fn read(&self, path: &str) -> StoreResult<Value> {
        debug!("Fetching file: {}", path);
        let file = self.host.get_file(path).await?;

        let encoded = file
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| StoreError::fetch(path, None, "response has no content"))?;

        decode_content(path, &encoded)
    }

    /// Create or overwrite a document with `content`
    pub async fn write<T: Serialize + ?Sized>(&self, path: &str, content: &T) -> StoreResult<()> {
        let sha = match self.host.get_file(path).await {
            Ok(current) => Some(current.sha),
            Err(err @ StoreError::Configuration(_)) => return Err(err),
            Err(err) => {
                debug!("No current version of {} ({}), creating it", path, err);
                None
            }
        };

        let encoded = encode_content(content)
            .map_err(|e| StoreError::write(path, None, format!("failed to encode: {}", e)))?;

        let body = PutContents {
            message: format!("Update {}", path),
            content: encoded,
            sha,
        };

        self.host.put_file(path, &body).await.map_err(|err| {
            error!("Failed to save {}: {}", path, err);
            err
        })
    }
}

/// Decode a base64 payload (line breaks allowed) into a JSON value
pub fn decode_content(path: &str, encoded: &str) -> StoreResult<Value> {
    let compact: String = encoded.split_whitespace().collect();
    let bytes = B64
        .decode(compact.as_bytes())
        .map_err(|e| StoreError::fetch(path, None, format!("invalid base64 content: {}", e)))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| StoreError::fetch(path, None, format!("content is not UTF-8: {}", e)))?;
    serde_json::from_str(&text)
        .map_err(|e| StoreError::fetch(path, None, format!("content is not JSON: {}", e)))
}

/// Serialize `content` as two-space indented JSON and base64 it
pub fn encode_content<T: Serialize + ?Sized>(content: &T) -> serde_json::Result<String> {
    let text = serde_json::to_string_pretty(content)?;
    Ok(B64.encode(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GithubSettings;
    use crate::storage::{GithubHost, MemoryHost};
    use serde_json::json;

    fn store() -> (Arc<MemoryHost>, RemoteFileStore) {
        let host = Arc::new(MemoryHost::new());
        (host.clone(), RemoteFileStore::new(host))
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let (host, store) = store();
        let doc = json!({ "students": [{ "id": 1, "name": "김하늘", "instrument": "피아노", "phone": "010-1234-5678" }] });

        store.write("data/students.json", &doc).await.unwrap();
        let created_sha = host.sha("data/students.json").unwrap();
        assert_eq!(store.read("data/students.json").await.unwrap(), doc);

        // second write must pick up the token of the first
        let doc = json!({ "students": [] });
        store.write("data/students.json", &doc).await.unwrap();
        assert_ne!(host.sha("data/students.json").unwrap(), created_sha);
        assert_eq!(store.read("data/students.json").await.unwrap(), doc);
    }

    #[tokio::test]
    async fn test_read_missing_document() {
        let (_, store) = store();
        let err = store.read("data/payments.json").await.unwrap_err();
        assert!(matches!(err, StoreError::RemoteFetch { status: Some(404), .. }));
    }

    #[test]
    fn test_encoding_matches_pretty_json() {
        let encoded = encode_content(&json!({ "classes": [] })).unwrap();
        let decoded = B64.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "{\n  \"classes\": []\n}");
    }

    #[test]
    fn test_decode_wrapped_non_ascii_payload() {
        let text = r#"{"teachers":[{"id":1,"name":"박선생","bankAccount":"국민 123-45-678"}]}"#;
        let encoded = B64.encode(text.as_bytes());
        let wrapped: Vec<String> = encoded
            .as_bytes()
            .chunks(60)
            .map(|c| String::from_utf8(c.to_vec()).unwrap())
            .collect();
        let value = decode_content("data/teachers.json", &wrapped.join("\n")).unwrap();
        assert_eq!(value["teachers"][0]["name"], "박선생");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_content("data/classes.json", "not base64!").unwrap_err();
        assert!(matches!(err, StoreError::RemoteFetch { status: None, .. }));

        let not_json = B64.encode("hello");
        assert!(decode_content("data/classes.json", &not_json).is_err());
    }

    #[tokio::test]
    async fn test_write_without_token_is_not_a_create() {
        let settings = GithubSettings {
            repo: Some("sogon/academy-data".to_string()),
            ..Default::default()
        };
        let store = RemoteFileStore::new(Arc::new(GithubHost::new(&settings)));

        let err = store
            .write("data/students.json", &json!({ "students": [] }))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Configuration(_)));
    }
}
