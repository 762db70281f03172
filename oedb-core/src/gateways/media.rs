use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Invalid file name")]
    FileName,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MediaError>;

/// Reference to a successfully stored upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub url: String,
}

/// A stored media file as seen by the orphan sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMediaFile {
    pub url: String,
    pub uploaded_at: Timestamp,
}

pub trait MediaGateway {
    /// Store `bytes` under the given storage path and return the
    /// public URL the file is served from.
    fn upload(&self, path: &str, bytes: &[u8]) -> Result<UploadedMedia>;

    /// All stored files uploaded before the cutoff.
    fn list_files_uploaded_before(&self, cutoff: Timestamp) -> Result<Vec<StoredMediaFile>>;

    /// Remove the file behind a previously returned URL.
    fn delete(&self, url: &str) -> Result<()>;
}

impl MediaGateway for Box<dyn MediaGateway + Send + Sync> {
    fn upload(&self, path: &str, bytes: &[u8]) -> Result<UploadedMedia> {
        self.as_ref().upload(path, bytes)
    }

    fn list_files_uploaded_before(&self, cutoff: Timestamp) -> Result<Vec<StoredMediaFile>> {
        self.as_ref().list_files_uploaded_before(cutoff)
    }

    fn delete(&self, url: &str) -> Result<()> {
        self.as_ref().delete(url)
    }
}

/// Collision-resistant storage path for an upload.
///
/// The original file name is kept as a suffix for operators browsing
/// the store; path traversal characters are rejected.
pub fn media_path(prefix: &str, file_name: &str) -> Result<String> {
    let file_name = file_name.trim();
    if file_name.is_empty()
        || file_name.contains(['/', '\\'])
        || file_name.split('.').any(|part| part == "..")
        || file_name.starts_with('.')
    {
        return Err(MediaError::FileName);
    }
    Ok(format!("{prefix}/{id}-{file_name}", id = Id::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_media_path() {
        let path = media_path("reviews/abc", "photo.jpg").unwrap();
        assert!(path.starts_with("reviews/abc/"));
        assert!(path.ends_with("-photo.jpg"));
    }

    #[test]
    fn reject_unacceptable_file_names() {
        assert!(media_path("p", "").is_err());
        assert!(media_path("p", "  ").is_err());
        assert!(media_path("p", "a/b.jpg").is_err());
        assert!(media_path("p", "a\\b.jpg").is_err());
        assert!(media_path("p", "..").is_err());
        assert!(media_path("p", ".hidden").is_err());
    }
}
