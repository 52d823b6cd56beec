//! Object storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectStorageConfig {
    /// Active storage provider: `"local"` or `"firebase"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Base URL used to synthesize public object links. Download URLs are
    /// built as `<public_base_url>/o/<objectName>?alt=media&token=<token>`,
    /// so changing this breaks previously stored links.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Maximum upload size in bytes (default 25 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Local filesystem provider configuration.
    #[serde(default)]
    pub local: LocalStorageConfig,
    /// Firebase-style bucket provider configuration.
    #[serde(default)]
    pub firebase: FirebaseStorageConfig,
}

impl Default for ObjectStorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            public_base_url: default_public_base_url(),
            max_upload_size_bytes: default_max_upload(),
            local: LocalStorageConfig::default(),
            firebase: FirebaseStorageConfig::default(),
        }
    }
}

/// Local filesystem provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorageConfig {
    /// Root path for locally stored objects.
    #[serde(default = "default_local_root")]
    pub root_path: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_local_root(),
        }
    }
}

/// Firebase-style bucket provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseStorageConfig {
    /// Storage REST API base URL.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Bucket name (e.g. `myproject.appspot.com`).
    #[serde(default)]
    pub bucket: String,
}

impl Default for FirebaseStorageConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            bucket: String::new(),
        }
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:8080/storage".to_string()
}

fn default_max_upload() -> u64 {
    26_214_400 // 25 MB
}

fn default_local_root() -> String {
    "./data/objects".to_string()
}

fn default_api_base() -> String {
    "https://firebasestorage.googleapis.com".to_string()
}
