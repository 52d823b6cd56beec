//! Multipart form field helpers.

use axum::extract::multipart::Field;

use tokenhub_core::error::AppError;
use tokenhub_core::result::AppResult;
use tokenhub_service::upload::FileUpload;

/// Reads a multipart field as UTF-8 text.
pub async fn read_text(field: Field<'_>) -> AppResult<String> {
    let name = field.name().unwrap_or("field").to_string();
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Failed to read form field '{name}': {e}")))
}

/// Reads a multipart field as an uploaded file, buffered in memory.
pub async fn read_file(field: Field<'_>) -> AppResult<FileUpload> {
    let name = field.name().unwrap_or("file").to_string();
    let content_type = field.content_type().map(String::from);
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::validation(format!("Failed to read file part '{name}': {e}")))?;
    Ok(FileUpload::new(data, content_type))
}
