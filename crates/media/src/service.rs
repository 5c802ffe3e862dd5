//! Batch upload service with per-file partial success.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::storage::ObjectStore;
use crate::validate;

/// One file in an upload batch.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A file that did not make it, and why.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedUpload {
    pub filename: String,
    pub reason: String,
}

/// Outcome of a batch: accepted public URLs plus per-file rejections.
/// An empty `rejected` list means full success.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchUploadResult {
    pub accepted: Vec<String>,
    pub rejected: Vec<RejectedUpload>,
}

pub struct MediaService {
    store: Arc<dyn ObjectStore>,
    max_upload_bytes: u64,
}

impl MediaService {
    pub fn new(store: Arc<dyn ObjectStore>, max_upload_bytes: u64) -> Self {
        Self {
            store,
            max_upload_bytes,
        }
    }

    /// Upload a batch of campaign media. Each file is validated and stored
    /// independently: a bad file is logged and skipped while the rest of
    /// the batch continues.
    ///
    /// Keys are `{founder}/{campaign}/{millis}-{n}-{filename}` so every
    /// object is traceable to who uploaded it, for which campaign, when.
    pub fn upload_batch(
        &self,
        founder_id: Uuid,
        campaign_id: Uuid,
        files: Vec<UploadFile>,
    ) -> BatchUploadResult {
        let mut result = BatchUploadResult::default();
        let batch_millis = Utc::now().timestamp_millis();

        for (n, file) in files.into_iter().enumerate() {
            if let Err(e) = validate::validate_upload(
                &file.filename,
                &file.content_type,
                file.bytes.len() as u64,
                self.max_upload_bytes,
            ) {
                warn!(filename = %file.filename, error = %e, "Upload rejected");
                metrics::counter!("media.uploads.rejected").increment(1);
                result.rejected.push(RejectedUpload {
                    filename: file.filename,
                    reason: e.to_string(),
                });
                continue;
            }

            let key = format!(
                "{}/{}/{}-{}-{}",
                founder_id,
                campaign_id,
                batch_millis,
                n,
                sanitize_filename(&file.filename)
            );
            match self.store.put(&key, file.bytes, &file.content_type) {
                Ok(()) => {
                    metrics::counter!("media.uploads.accepted").increment(1);
                    result.accepted.push(self.store.public_url(&key));
                }
                Err(e) => {
                    warn!(filename = %file.filename, error = %e, "Upload failed, skipping");
                    metrics::counter!("media.uploads.failed").increment(1);
                    result.rejected.push(RejectedUpload {
                        filename: file.filename,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            accepted = result.accepted.len(),
            rejected = result.rejected.len(),
            campaign_id = %campaign_id,
            "Media batch processed"
        );
        result
    }

    /// Best-effort removal of the object behind a public URL. Returns
    /// whether a backing object was actually deleted; the caller removes
    /// the URL from the campaign either way.
    pub fn remove_by_url(&self, url: &str) -> bool {
        let Some(key) = self.store.key_for_url(url) else {
            warn!(url, "Cannot derive storage key from URL, skipping delete");
            return false;
        };
        match self.store.delete(&key) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "Backing object delete failed");
                false
            }
        }
    }
}

/// Keep keys URL- and path-safe.
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryObjectStore;

    const MB: usize = 1024 * 1024;

    fn service() -> (MediaService, Arc<InMemoryObjectStore>) {
        let store = Arc::new(InMemoryObjectStore::new("https://cdn.talentlink.io"));
        (
            MediaService::new(store.clone(), validate::MAX_UPLOAD_BYTES),
            store,
        )
    }

    fn file(name: &str, content_type: &str, size: usize) -> UploadFile {
        UploadFile {
            filename: name.to_string(),
            content_type: content_type.to_string(),
            bytes: vec![0u8; size],
        }
    }

    #[test]
    fn test_batch_partial_success() {
        let (service, store) = service();
        let result = service.upload_batch(
            Uuid::new_v4(),
            Uuid::new_v4(),
            vec![
                file("shot.png", "image/png", 10 * MB),
                file("huge.mp4", "video/mp4", 25 * MB),
                file("notes.txt", "text/plain", 100),
                file("clip.mp4", "video/mp4", 5 * MB),
            ],
        );

        assert_eq!(result.accepted.len(), 2);
        assert_eq!(result.rejected.len(), 2);
        assert_eq!(store.object_count(), 2);
        assert!(result.accepted[0].starts_with("https://cdn.talentlink.io/"));
        assert!(result
            .rejected
            .iter()
            .any(|r| r.filename == "huge.mp4" && r.reason.contains("exceeds")));
        assert!(result
            .rejected
            .iter()
            .any(|r| r.filename == "notes.txt" && r.reason.contains("unsupported")));
    }

    #[test]
    fn test_remove_by_url() {
        let (service, store) = service();
        let result =
            service.upload_batch(Uuid::new_v4(), Uuid::new_v4(), vec![file("a.png", "image/png", 10)]);
        let url = result.accepted[0].clone();

        assert!(service.remove_by_url(&url));
        assert_eq!(store.object_count(), 0);
        // Second delete is a no-op, not a panic.
        assert!(!service.remove_by_url(&url));
        // Foreign URLs are skipped.
        assert!(!service.remove_by_url("https://elsewhere.io/x.png"));
    }

    #[test]
    fn test_key_sanitization() {
        let (service, store) = service();
        let result = service.upload_batch(
            Uuid::new_v4(),
            Uuid::new_v4(),
            vec![file("my photo (1).png", "image/png", 10)],
        );
        assert_eq!(result.accepted.len(), 1);
        assert!(result.accepted[0].ends_with("my-photo--1-.png"));
        assert_eq!(store.object_count(), 1);
    }
}
