//! Object store trait for pluggable bucket backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for object storage backends.
///
/// Implementations exist for a Firebase-style bucket (production) and the
/// local filesystem (development and tests). The trait is defined here in
/// `tokenhub-core` and implemented in `tokenhub-storage`.
///
/// Uploads return the download token under which the object was stored;
/// public links are synthesized from it and remain stable for the lifetime
/// of the object.
#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "firebase").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store `data` under `object_name` and return the download token.
    async fn upload(
        &self,
        object_name: &str,
        data: Bytes,
        content_type: Option<&str>,
    ) -> AppResult<String>;

    /// Read an object into memory as a complete byte buffer.
    async fn fetch(&self, object_name: &str) -> AppResult<Bytes>;

    /// Check whether an object exists.
    async fn exists(&self, object_name: &str) -> AppResult<bool>;

    /// Delete an object.
    async fn delete(&self, object_name: &str) -> AppResult<()>;
}
