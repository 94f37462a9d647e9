use async_trait::async_trait;

use super::error::StorageError;

/// File storage for uploaded images, addressed by a relative path such as
/// `events/20250101_120000_ab12cd34.png`.
///
/// Implementations own durability and layout; callers own naming and
/// metadata records.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Write the full contents of a file, replacing any existing file at the
    /// same path.
    async fn save(&self, rel_path: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Read the full contents of a stored file.
    async fn read(&self, rel_path: &str) -> Result<Vec<u8>, StorageError>;

    /// Check whether a file exists.
    async fn exists(&self, rel_path: &str) -> Result<bool, StorageError>;

    /// Delete a file.
    ///
    /// Returns `true` if the file was deleted, `false` if it did not exist.
    async fn delete(&self, rel_path: &str) -> Result<bool, StorageError>;
}
