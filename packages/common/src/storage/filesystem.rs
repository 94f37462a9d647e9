use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::error::StorageError;
use super::traits::ImageStore;

/// Filesystem-backed image store.
///
/// Files live under `{base_path}/{rel_path}`; writes go through a temp file
/// in `{base_path}/.tmp` and are renamed into place so a crashed upload never
/// leaves a partial file at its final path.
pub struct FilesystemImageStore {
    base_path: PathBuf,
}

impl FilesystemImageStore {
    /// Create a new filesystem store, creating the base directory if needed.
    pub async fn new(base_path: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&base_path).await?;
        fs::create_dir_all(base_path.join(".tmp")).await?;
        Ok(Self { base_path })
    }

    /// Resolve a relative path under the base directory, rejecting absolute
    /// paths and `..` components.
    fn resolve(&self, rel_path: &str) -> Result<PathBuf, StorageError> {
        let rel = Path::new(rel_path);
        if rel_path.is_empty()
            || rel
                .components()
                .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(StorageError::InvalidPath(rel_path.to_string()));
        }
        Ok(self.base_path.join(rel))
    }

    /// Path for a temporary file during writes.
    fn temp_path(&self) -> PathBuf {
        self.base_path
            .join(".tmp")
            .join(uuid::Uuid::new_v4().to_string())
    }
}

#[async_trait]
impl ImageStore for FilesystemImageStore {
    async fn save(&self, rel_path: &str, data: &[u8]) -> Result<(), StorageError> {
        let dest = self.resolve(rel_path)?;

        let temp_path = self.temp_path();
        let result = async {
            let mut temp_file = fs::File::create(&temp_path).await?;
            temp_file.write_all(data).await?;
            temp_file.flush().await?;
            drop(temp_file);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::rename(&temp_path, &dest).await?;
            Ok(())
        }
        .await;

        if result.is_err() {
            let _ = fs::remove_file(&temp_path).await;
        }
        result
    }

    async fn read(&self, rel_path: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(rel_path)?;
        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(rel_path.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, rel_path: &str) -> Result<bool, StorageError> {
        let path = self.resolve(rel_path)?;
        Ok(fs::try_exists(&path).await?)
    }

    async fn delete(&self, rel_path: &str) -> Result<bool, StorageError> {
        let path = self.resolve(rel_path)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
