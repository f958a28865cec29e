use async_trait::async_trait;

use crate::error::StorageError;

/// Blob storage for uploaded images, keyed by file name.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store `bytes` under `file_name`, replacing any existing file.
    async fn put(&self, file_name: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Read the file stored under `file_name`, `None` if there is none.
    async fn get(&self, file_name: &str) -> Result<Option<Vec<u8>>, StorageError>;
}
