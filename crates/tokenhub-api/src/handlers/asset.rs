//! Asset submission, lookup, and tokenization handlers.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use uuid::Uuid;

use tokenhub_core::error::AppError;
use tokenhub_core::result::AppResult;
use tokenhub_service::asset::AssetSubmission;

use crate::dto::request::{CompleteTokenizationRequest, TokenizeRequest};
use crate::dto::response::{
    AssetEnvelope, AssetsEnvelope, CompleteTokenizationResponse, MetadataUrlResponse,
};
use crate::error::ApiError;
use crate::extractors::{read_file, read_text, require_non_empty};
use crate::state::AppState;

/// POST /api/assets
pub async fn create_asset(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AssetEnvelope>, ApiError> {
    let submission = read_asset_submission(&mut multipart).await?;
    let asset = state.asset_service.create(submission).await?;
    Ok(Json(AssetEnvelope { asset }))
}

/// GET /api/assets/creator/{user_id}
pub async fn list_by_creator(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<AssetsEnvelope>, ApiError> {
    require_non_empty("user_id", &user_id)?;
    let assets = state.asset_service.list_by_creator(&user_id).await?;
    Ok(Json(AssetsEnvelope { assets }))
}

/// GET /api/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssetEnvelope>, ApiError> {
    let asset = state.asset_service.get(id).await?;
    Ok(Json(AssetEnvelope { asset }))
}

/// POST /api/assets/tokenize
pub async fn tokenize_asset(
    State(state): State<AppState>,
    Json(req): Json<TokenizeRequest>,
) -> Result<Json<MetadataUrlResponse>, ApiError> {
    let metadata_url = state
        .tokenize_service
        .tokenize(req.id, &req.wallet_address)
        .await?;
    Ok(Json(MetadataUrlResponse { metadata_url }))
}

/// POST /api/assets/tokenize/complete
pub async fn complete_tokenization(
    State(state): State<AppState>,
    Json(req): Json<CompleteTokenizationRequest>,
) -> Result<Json<CompleteTokenizationResponse>, ApiError> {
    let asset = state
        .tokenize_service
        .complete(req.id, req.token_id)
        .await?;
    Ok(Json(CompleteTokenizationResponse { id: asset.id }))
}

/// Decodes the asset multipart form.
///
/// Repeated `fieldNames[]`/`values[]` parts accumulate in submission
/// order; unknown parts are ignored.
async fn read_asset_submission(multipart: &mut Multipart) -> AppResult<AssetSubmission> {
    let mut submission = AssetSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "name" => submission.name = read_text(field).await?,
            "description" => submission.description = read_text(field).await?,
            "equity" => submission.equity = read_text(field).await?,
            "seeking" => submission.seeking = read_text(field).await?,
            "location" => submission.location = read_text(field).await?,
            "category" => submission.category = read_text(field).await?,
            "valuation" => submission.valuation = read_text(field).await?,
            "sharePrice" => submission.share_price = read_text(field).await?,
            "creator" => submission.creator = read_text(field).await?,
            "owner" => submission.owner = read_text(field).await?,
            "fieldNames[]" => submission.field_names.push(read_text(field).await?),
            "values[]" => submission.values.push(read_text(field).await?),
            "imgData" => submission.image = Some(read_file(field).await?),
            "mapData" => submission.map = Some(read_file(field).await?),
            _ => {}
        }
    }

    Ok(submission)
}
