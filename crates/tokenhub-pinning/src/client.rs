//! Pinning service client.
//!
//! Speaks the fixed third-party protocol: a multipart `file` field posted
//! to the pin endpoint with `pinata_api_key` / `pinata_secret_api_key`
//! headers, answered by a JSON receipt carrying the content hash. Any
//! non-success status is a hard failure; there are no retries.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tokenhub_core::config::pinning::PinningConfig;
use tokenhub_core::error::{AppError, ErrorKind};
use tokenhub_core::result::AppResult;

/// Client for the pinning service.
#[derive(Debug, Clone)]
pub struct PinningClient {
    http: reqwest::Client,
    endpoint: String,
    gateway_base: String,
    api_key: String,
    secret_api_key: String,
}

/// Receipt returned for a successful pin.
///
/// Only the content hash is load-bearing; the service has been observed
/// to vary the types of the remaining fields, so they are parsed
/// leniently.
#[derive(Debug, Clone, Deserialize)]
pub struct PinReceipt {
    /// Content hash of the pinned payload.
    #[serde(rename = "IpfsHash")]
    pub ipfs_hash: String,
    /// Pinned size in bytes.
    #[serde(rename = "PinSize", default)]
    pub pin_size: Option<serde_json::Value>,
    /// Pin timestamp.
    #[serde(rename = "Timestamp", default)]
    pub timestamp: Option<String>,
    /// Whether the content was already pinned.
    #[serde(rename = "isDuplicate", default)]
    pub is_duplicate: Option<bool>,
}

impl PinningClient {
    /// Create a new pinning client from configuration.
    pub fn new(config: &PinningConfig) -> Self {
        if config.api_key.is_empty() || config.secret_api_key.is_empty() {
            warn!("Pinning credentials are not configured; pin requests will be rejected upstream");
        }
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            gateway_base: config.gateway_base.clone(),
            api_key: config.api_key.clone(),
            secret_api_key: config.secret_api_key.clone(),
        }
    }

    /// Pin raw bytes under the given filename and return the receipt.
    pub async fn pin_file(&self, file_name: &str, data: Bytes) -> AppResult<PinReceipt> {
        let part = Part::bytes(data.to_vec()).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&self.endpoint)
            .header("pinata_api_key", &self.api_key)
            .header("pinata_secret_api_key", &self.secret_api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Upstream, "Failed to reach pinning service", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_string());
            warn!(%status, file_name, "Pin request rejected");
            return Err(AppError::upstream(format!(
                "Pinning service returned status {status}: {body}"
            )));
        }

        let receipt: PinReceipt = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Upstream, "Invalid pinning response body", e)
        })?;

        debug!(file_name, hash = %receipt.ipfs_hash, "Pinned content");
        Ok(receipt)
    }

    /// Serialize a document to JSON and pin it under the given filename.
    pub async fn pin_json(
        &self,
        file_name: &str,
        document: &impl Serialize,
    ) -> AppResult<PinReceipt> {
        let bytes = serde_json::to_vec(document)?;
        self.pin_file(file_name, Bytes::from(bytes)).await
    }

    /// Resolve a content hash to its public gateway URL.
    pub fn gateway_url(&self, hash: &str) -> String {
        format!("{}{}", self.gateway_base, hash)
    }
}
