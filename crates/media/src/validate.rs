//! Upload validation: media-type classification and the size cap.

use serde::{Deserialize, Serialize};

use talentlink_core::{MarketError, MarketResult};

/// Default per-file upload cap: 20 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// Broad media class of an upload, derived from its MIME content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// Classify a MIME content type. Anything that is not an image or a video
/// is not campaign media.
pub fn classify(content_type: &str) -> Option<MediaKind> {
    let ct = content_type.trim().to_ascii_lowercase();
    if ct.starts_with("image/") {
        Some(MediaKind::Image)
    } else if ct.starts_with("video/") {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// Validate one upload against the media-class and size rules.
pub fn validate_upload(
    filename: &str,
    content_type: &str,
    size_bytes: u64,
    max_bytes: u64,
) -> MarketResult<MediaKind> {
    let kind = classify(content_type).ok_or_else(|| {
        MarketError::Validation(format!(
            "{}: unsupported content type {:?} (images and videos only)",
            filename, content_type
        ))
    })?;
    if size_bytes > max_bytes {
        return Err(MarketError::Validation(format!(
            "{}: {} bytes exceeds the {} byte limit",
            filename, size_bytes, max_bytes
        )));
    }
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn test_classify() {
        assert_eq!(classify("image/png"), Some(MediaKind::Image));
        assert_eq!(classify("IMAGE/JPEG"), Some(MediaKind::Image));
        assert_eq!(classify("video/mp4"), Some(MediaKind::Video));
        assert_eq!(classify("text/plain"), None);
        assert_eq!(classify("application/pdf"), None);
    }

    #[test]
    fn test_validate_upload_rules() {
        // 10MB png accepted.
        assert_eq!(
            validate_upload("shot.png", "image/png", 10 * MB, MAX_UPLOAD_BYTES).unwrap(),
            MediaKind::Image
        );
        // 25MB file rejected on size.
        assert!(validate_upload("big.mp4", "video/mp4", 25 * MB, MAX_UPLOAD_BYTES).is_err());
        // Text file rejected on type.
        assert!(validate_upload("notes.txt", "text/plain", 1024, MAX_UPLOAD_BYTES).is_err());
        // Exactly at the cap is accepted.
        assert!(validate_upload("edge.png", "image/png", MAX_UPLOAD_BYTES, MAX_UPLOAD_BYTES).is_ok());
    }
}
