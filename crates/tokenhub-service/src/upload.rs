//! Uploaded file payloads decoded from multipart form parts.

use bytes::Bytes;

/// A file extracted from a multipart request, buffered in memory.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// MIME type reported by the client, if any.
    pub content_type: Option<String>,
    /// Raw file bytes.
    pub data: Bytes,
}

impl FileUpload {
    /// Creates an upload from raw bytes and an optional MIME type.
    pub fn new(data: Bytes, content_type: Option<String>) -> Self {
        Self { content_type, data }
    }
}
