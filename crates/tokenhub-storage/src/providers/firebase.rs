//! Firebase-style bucket object store provider.
//!
//! Talks to the storage REST surface: objects are created with a simple
//! `POST .../o?name=<object>` upload and fetched back with `?alt=media`.
//! The backend mints a download token for every uploaded object and
//! returns it in the upload response; that token is what public links are
//! synthesized from.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use tokenhub_core::config::storage::FirebaseStorageConfig;
use tokenhub_core::error::{AppError, ErrorKind};
use tokenhub_core::result::AppResult;
use tokenhub_core::traits::object_store::ObjectStore;

/// Firebase-style bucket object store.
#[derive(Debug, Clone)]
pub struct FirebaseObjectStore {
    http: reqwest::Client,
    api_base: String,
    bucket: String,
}

/// The slice of the upload response this provider cares about.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    /// Comma-separated download tokens; the first one is used.
    #[serde(rename = "downloadTokens", default)]
    download_tokens: Option<String>,
}

impl FirebaseObjectStore {
    /// Create a new bucket provider from configuration.
    pub fn new(config: &FirebaseStorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration(
                "storage.firebase.bucket must be set for the firebase provider",
            ));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bucket: config.bucket.clone(),
        })
    }

    /// URL of the object collection (uploads, health).
    fn collection_url(&self) -> String {
        format!("{}/v0/b/{}/o", self.api_base, self.bucket)
    }

    /// URL of a single object's metadata.
    fn object_url(&self, object_name: &str) -> String {
        format!("{}/v0/b/{}/o/{}", self.api_base, self.bucket, object_name)
    }
}

#[async_trait]
impl ObjectStore for FirebaseObjectStore {
    fn provider_type(&self) -> &str {
        "firebase"
    }

    async fn health_check(&self) -> AppResult<bool> {
        let response = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Upstream, "Storage bucket unreachable", e)
            })?;
        // Unauthenticated listings answer 4xx; only 5xx means unhealthy.
        Ok(response.status().as_u16() < 500)
    }

    async fn upload(
        &self,
        object_name: &str,
        data: Bytes,
        content_type: Option<&str>,
    ) -> AppResult<String> {
        let mut request = self
            .http
            .post(self.collection_url())
            .query(&[("name", object_name)])
            .body(data);
        if let Some(content_type) = content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }

        let response = request.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Upstream,
                format!("Failed to upload object {object_name}"),
                e,
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_string());
            return Err(AppError::upstream(format!(
                "Object upload failed with status {status}: {body}"
            )));
        }

        let parsed: UploadResponse = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Upstream, "Invalid upload response body", e)
        })?;

        let token = parsed
            .download_tokens
            .as_deref()
            .and_then(|t| t.split(',').next())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::upstream("Upload response carried no download token"))?
            .to_string();

        debug!(object_name, "Uploaded object to bucket");
        Ok(token)
    }

    async fn fetch(&self, object_name: &str) -> AppResult<Bytes> {
        let response = self
            .http
            .get(self.object_url(object_name))
            .query(&[("alt", "media")])
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Upstream,
                    format!("Failed to fetch object {object_name}"),
                    e,
                )
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AppError::not_found(format!(
                "Object not found: {object_name}"
            ))),
            status if status.is_success() => response.bytes().await.map_err(|e| {
                AppError::with_source(ErrorKind::Upstream, "Failed to read object body", e)
            }),
            status => Err(AppError::upstream(format!(
                "Object fetch failed with status {status}"
            ))),
        }
    }

    async fn exists(&self, object_name: &str) -> AppResult<bool> {
        let response = self
            .http
            .get(self.object_url(object_name))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Upstream,
                    format!("Failed to stat object {object_name}"),
                    e,
                )
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(AppError::upstream(format!(
                "Object stat failed with status {status}"
            ))),
        }
    }

    async fn delete(&self, object_name: &str) -> AppResult<()> {
        let response = self
            .http
            .delete(self.object_url(object_name))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Upstream,
                    format!("Failed to delete object {object_name}"),
                    e,
                )
            })?;

        match response.status() {
            // Deleting an already-removed object is not an error.
            StatusCode::NOT_FOUND => Ok(()),
            status if status.is_success() => Ok(()),
            status => Err(AppError::upstream(format!(
                "Object delete failed with status {status}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serial_test::serial;

    fn store_for(server: &Server) -> FirebaseObjectStore {
        FirebaseObjectStore::new(&FirebaseStorageConfig {
            api_base: server.url(),
            bucket: "test-bucket".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_new_requires_bucket() {
        let err = FirebaseObjectStore::new(&FirebaseStorageConfig {
            api_base: "https://example.com".to_string(),
            bucket: String::new(),
        })
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[tokio::test]
    #[serial]
    async fn test_upload_returns_download_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v0/b/test-bucket/o")
            .match_query(Matcher::UrlEncoded("name".into(), "obj-1".into()))
            .match_header("content-type", "image/png")
            .with_status(200)
            .with_body(r#"{"name":"obj-1","bucket":"test-bucket","downloadTokens":"tok-123"}"#)
            .create_async()
            .await;

        let store = store_for(&server);
        let token = store
            .upload("obj-1", Bytes::from("png bytes"), Some("image/png"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(token, "tok-123");
    }

    #[tokio::test]
    #[serial]
    async fn test_upload_failure_is_upstream() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v0/b/test-bucket/o")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body("permission denied")
            .create_async()
            .await;

        let store = store_for(&server);
        let err = store
            .upload("obj-1", Bytes::from("data"), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Upstream);
        assert!(err.message.contains("403"));
    }

    #[tokio::test]
    #[serial]
    async fn test_upload_without_token_is_upstream() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v0/b/test-bucket/o")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"name":"obj-1","bucket":"test-bucket"}"#)
            .create_async()
            .await;

        let store = store_for(&server);
        let err = store
            .upload("obj-1", Bytes::from("data"), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Upstream);
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_and_missing_object() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v0/b/test-bucket/o/obj-1")
            .match_query(Matcher::UrlEncoded("alt".into(), "media".into()))
            .with_status(200)
            .with_body("image bytes")
            .create_async()
            .await;
        server
            .mock("GET", "/v0/b/test-bucket/o/gone")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let store = store_for(&server);
        let data = store.fetch("obj-1").await.unwrap();
        assert_eq!(data, Bytes::from("image bytes"));

        let err = store.fetch("gone").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    #[serial]
    async fn test_exists() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v0/b/test-bucket/o/here")
            .with_status(200)
            .with_body(r#"{"name":"here"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/v0/b/test-bucket/o/gone")
            .with_status(404)
            .create_async()
            .await;

        let store = store_for(&server);
        assert!(store.exists("here").await.unwrap());
        assert!(!store.exists("gone").await.unwrap());
    }
}
