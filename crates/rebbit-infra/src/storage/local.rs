//! Filesystem image store - one file per image under a root directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use rebbit_core::error::StorageError;
use rebbit_core::ports::ImageStore;

/// Stores images as plain files in `root`.
///
/// File names are trusted to be single path components; the image service
/// validates them before they reach the store.
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    /// Open the store, creating the directory if it does not exist yet.
    pub async fn init(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| io_error(&root, e))?;

        tracing::info!(root = %root.display(), "Image store ready");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn io_error(path: &Path, err: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn put(&self, file_name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.root.join(file_name);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Failed to write image");
            io_error(&path, e)
        })?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Stored image");
        Ok(())
    }

    async fn get(&self, file_name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.root.join(file_name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read image");
                Err(io_error(&path, e))
            }
        }
    }
}
