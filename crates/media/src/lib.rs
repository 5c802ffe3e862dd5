//! Campaign media handling — upload validation, object storage, and the
//! batch upload service with per-file partial success.

pub mod service;
pub mod storage;
pub mod validate;

pub use service::{BatchUploadResult, MediaService, RejectedUpload, UploadFile};
pub use storage::{InMemoryObjectStore, ObjectStore};
pub use validate::{classify, validate_upload, MediaKind, MAX_UPLOAD_BYTES};
