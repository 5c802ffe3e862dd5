//! Object storage abstraction.
//!
//! The in-memory implementation serves development and tests; production
//! swaps in a bucket-backed implementation behind the same trait. Public
//! URLs are `{base_url}/{key}` in both directions, which is what lets the
//! removal path derive a storage key from the URL a campaign carries.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use talentlink_core::{MarketError, MarketResult};

pub trait ObjectStore: Send + Sync {
    fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> MarketResult<()>;
    fn delete(&self, key: &str) -> MarketResult<()>;
    /// Public URL under which the object is served.
    fn public_url(&self, key: &str) -> String;
    /// Inverse of `public_url`. `None` if the URL is not ours.
    fn key_for_url(&self, url: &str) -> Option<String>;
}

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub uploaded_at: DateTime<Utc>,
}

/// DashMap-backed store with a configurable CDN base URL.
pub struct InMemoryObjectStore {
    objects: DashMap<String, StoredObject>,
    base_url: String,
}

impl InMemoryObjectStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            objects: DashMap::new(),
            base_url,
        }
    }

    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.get(key).map(|r| r.value().clone())
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> MarketResult<()> {
        debug!(key, size = bytes.len(), content_type, "Storing object");
        self.objects.insert(
            key.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
                uploaded_at: Utc::now(),
            },
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> MarketResult<()> {
        self.objects
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| MarketError::Storage(format!("no object at key {:?}", key)))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    fn key_for_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(&format!("{}/", self.base_url))
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_round_trip() {
        let store = InMemoryObjectStore::new("https://cdn.talentlink.io/");
        let url = store.public_url("f1/c1/123-shot.png");
        assert_eq!(url, "https://cdn.talentlink.io/f1/c1/123-shot.png");
        assert_eq!(
            store.key_for_url(&url).as_deref(),
            Some("f1/c1/123-shot.png")
        );
        assert_eq!(store.key_for_url("https://elsewhere.io/x.png"), None);
    }

    #[test]
    fn test_put_get_delete() {
        let store = InMemoryObjectStore::new("https://cdn.talentlink.io");
        store
            .put("a/b/c.png", vec![1, 2, 3], "image/png")
            .unwrap();
        assert_eq!(store.object_count(), 1);
        assert_eq!(store.get("a/b/c.png").unwrap().bytes, vec![1, 2, 3]);

        store.delete("a/b/c.png").unwrap();
        assert!(store.get("a/b/c.png").is_none());
        assert!(store.delete("a/b/c.png").is_err());
    }
}
