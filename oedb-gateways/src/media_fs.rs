use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::anyhow;
use time::OffsetDateTime;
use walkdir::WalkDir;

use oedb_core::{
    entities::Timestamp,
    gateways::media::{MediaError, MediaGateway, Result, StoredMediaFile, UploadedMedia},
};

/// Media storage on the local filesystem.
///
/// Files live below `root` under the storage path chosen by the caller
/// and are served under `base_url`. The upload time of a stored file is
/// its modification time on disk.
#[derive(Debug, Clone)]
pub struct FsMediaStorage {
    root: PathBuf,
    base_url: String,
}

impl FsMediaStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { root, base_url })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_path(&self, storage_path: &str) -> Result<PathBuf> {
        // Storage paths are relative and must stay below the root.
        if storage_path.is_empty()
            || storage_path
                .split('/')
                .any(|segment| segment.is_empty() || segment == "." || segment == "..")
        {
            return Err(MediaError::FileName);
        }
        Ok(self.root.join(storage_path))
    }
}

impl MediaGateway for FsMediaStorage {
    fn upload(&self, path: &str, bytes: &[u8]) -> Result<UploadedMedia> {
        let file = self.file_path(path)?;
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file, bytes)?;
        let url = format!("{}/{path}", self.base_url);
        log::debug!("Stored {} byte(s) at {url}", bytes.len());
        Ok(UploadedMedia { url })
    }

    fn list_files_uploaded_before(&self, cutoff: Timestamp) -> Result<Vec<StoredMediaFile>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let modified = entry.metadata().map_err(io::Error::from)?.modified()?;
            let uploaded_at = Timestamp::from(OffsetDateTime::from(modified));
            if uploaded_at >= cutoff {
                continue;
            }
            let Some(storage_path) = entry
                .path()
                .strip_prefix(&self.root)
                .ok()
                .and_then(Path::to_str)
            else {
                log::warn!(
                    "Skipping stored file with an unusable path: {}",
                    entry.path().display()
                );
                continue;
            };
            files.push(StoredMediaFile {
                url: format!("{}/{storage_path}", self.base_url),
                uploaded_at,
            });
        }
        Ok(files)
    }

    fn delete(&self, url: &str) -> Result<()> {
        let storage_path = url
            .strip_prefix(&self.base_url)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(|| MediaError::Other(anyhow!("URL is not served from this store: {url}")))?;
        let file = self.file_path(storage_path)?;
        fs::remove_file(file)?;
        log::debug!("Deleted stored file behind {url}");
        Ok(())
    }
}
