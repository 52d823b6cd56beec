//! Media store facade over the configured object store provider.
//!
//! Owns object naming and public-URL synthesis so that services never see
//! provider details.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use tokenhub_core::config::storage::ObjectStorageConfig;
use tokenhub_core::error::AppError;
use tokenhub_core::result::AppResult;
use tokenhub_core::traits::object_store::ObjectStore;

use crate::providers::{FirebaseObjectStore, LocalObjectStore};

/// Facade that uploads media under fresh unique object names and
/// synthesizes stable public download URLs.
#[derive(Debug, Clone)]
pub struct MediaStore {
    provider: Arc<dyn ObjectStore>,
    public_base_url: String,
}

/// A stored object together with its synthesized public URL.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Name the object was stored under.
    pub object_name: String,
    /// Download token minted for the object.
    pub download_token: String,
    /// Public download URL.
    pub url: String,
}

impl MediaStore {
    /// Build the media store from configuration, selecting the provider.
    pub async fn from_config(config: &ObjectStorageConfig) -> AppResult<Self> {
        let provider: Arc<dyn ObjectStore> = match config.provider.as_str() {
            "local" => Arc::new(LocalObjectStore::new(&config.local.root_path).await?),
            "firebase" => Arc::new(FirebaseObjectStore::new(&config.firebase)?),
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown storage provider: '{other}'. Expected one of: local, firebase"
                )));
            }
        };

        info!(
            provider = provider.provider_type(),
            "Object storage initialized"
        );
        Ok(Self::new(provider, &config.public_base_url))
    }

    /// Wrap an already-constructed provider.
    pub fn new(provider: Arc<dyn ObjectStore>, public_base_url: &str) -> Self {
        Self {
            provider,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Upload media under a freshly generated unique object name and
    /// return it with its public URL.
    pub async fn store(&self, data: Bytes, content_type: Option<&str>) -> AppResult<StoredObject> {
        let object_name = Uuid::new_v4().to_string();
        let download_token = self
            .provider
            .upload(&object_name, data, content_type)
            .await?;
        let url = self.public_url(&object_name, &download_token);
        Ok(StoredObject {
            object_name,
            download_token,
            url,
        })
    }

    /// Synthesize the public download URL for a stored object.
    ///
    /// The `<base>/o/<object>?alt=media&token=<token>` shape is the format
    /// every stored link was minted with; it must not change.
    pub fn public_url(&self, object_name: &str, token: &str) -> String {
        format!(
            "{}/o/{}?alt=media&token={}",
            self.public_base_url, object_name, token
        )
    }

    /// Check whether the underlying provider is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }

    /// Name of the active provider.
    pub fn provider_type(&self) -> &str {
        self.provider.provider_type()
    }
}
