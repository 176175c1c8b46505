//! Selfie upload checks - file type and size before anything is sent

use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// 10 MB
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub const ALLOWED_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

#[derive(Debug, Error)]
pub enum SelfieError {
    #[error("Please upload a JPEG, PNG, or WebP image.")]
    UnsupportedType(String),

    #[error("File size must be less than 10MB.")]
    TooLarge(u64),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Type is checked first, then size
pub fn validate_selfie(mime: &str, size_bytes: u64) -> Result<(), SelfieError> {
    if !ALLOWED_TYPES.contains(&mime) {
        return Err(SelfieError::UnsupportedType(mime.to_string()));
    }

    if size_bytes > MAX_FILE_SIZE {
        return Err(SelfieError::TooLarge(size_bytes));
    }

    Ok(())
}

/// MIME type from file extension, empty string if unknown
pub fn mime_from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "",
    }
}

/// Validate a file on disk, returns its size
pub fn validate_selfie_file(path: &Path) -> Result<u64, SelfieError> {
    let metadata = std::fs::metadata(path).map_err(|source| SelfieError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mime = mime_from_path(path);
    debug!(path = %path.display(), mime, size = metadata.len(), "validating selfie");

    validate_selfie(mime, metadata.len())?;
    Ok(metadata.len())
}
