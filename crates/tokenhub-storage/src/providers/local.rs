//! Local filesystem object store provider.
//!
//! Used for development and tests. Download tokens are minted locally at
//! upload time, mirroring what the bucket backend does server-side.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use tokenhub_core::error::{AppError, ErrorKind};
use tokenhub_core::result::AppResult;
use tokenhub_core::traits::object_store::ObjectStore;

/// Local filesystem object store.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    /// Root directory for all stored objects.
    root: PathBuf,
}

impl LocalObjectStore {
    /// Create a new local object store rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve an object name to an absolute path within the root.
    fn resolve(&self, object_name: &str) -> PathBuf {
        let clean = object_name.trim_start_matches('/');
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn upload(
        &self,
        object_name: &str,
        data: Bytes,
        _content_type: Option<&str>,
    ) -> AppResult<String> {
        let full_path = self.resolve(object_name);
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write object: {object_name}"),
                e,
            )
        })?;

        let token = Uuid::new_v4().to_string();
        debug!(object_name, bytes = data.len(), "Stored object");
        Ok(token)
    }

    async fn fetch(&self, object_name: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(object_name);
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Object not found: {object_name}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read object: {object_name}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn exists(&self, object_name: &str) -> AppResult<bool> {
        let full_path = self.resolve(object_name);
        Ok(full_path.exists())
    }

    async fn delete(&self, object_name: &str) -> AppResult<()> {
        let full_path = self.resolve(object_name);
        if full_path.exists() {
            fs::remove_file(&full_path).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete object: {object_name}"),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_fetch_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let data = Bytes::from("image bytes");
        let token = store
            .upload("abc-123", data.clone(), Some("image/png"))
            .await
            .unwrap();
        assert!(!token.is_empty());

        assert!(store.exists("abc-123").await.unwrap());

        let read_back = store.fetch("abc-123").await.unwrap();
        assert_eq!(read_back, data);

        store.delete("abc-123").await.unwrap();
        assert!(!store.exists("abc-123").await.unwrap());
    }

    #[tokio::test]
    async fn test_fetch_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let err = store.fetch("missing").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_tokens_are_unique_per_upload() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let first = store
            .upload("a", Bytes::from("x"), None)
            .await
            .unwrap();
        let second = store
            .upload("b", Bytes::from("y"), None)
            .await
            .unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        assert!(store.health_check().await.unwrap());
    }
}
