//! Organization lifecycle and membership handlers.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use uuid::Uuid;

use tokenhub_core::error::AppError;
use tokenhub_core::result::AppResult;
use tokenhub_service::organization::OrganizationSubmission;

use crate::dto::request::{InviteRequest, LeaveRequest};
use crate::dto::response::{
    AssetsEnvelope, MemberEnvelope, OrganizationEnvelope, OrganizationsEnvelope, StatusResponse,
    UserOrganizationsResponse, UsersEnvelope,
};
use crate::error::ApiError;
use crate::extractors::{read_file, read_text, require_non_empty};
use crate::state::AppState;

/// POST /api/organizations
pub async fn create_organization(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<OrganizationEnvelope>, ApiError> {
    let submission = read_organization_submission(&mut multipart).await?;
    let organization = state.organization_service.create(submission).await?;
    Ok(Json(OrganizationEnvelope { organization }))
}

/// GET /api/organizations/{id}
pub async fn get_organization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrganizationEnvelope>, ApiError> {
    let organization = state.organization_service.get(id).await?;
    Ok(Json(OrganizationEnvelope { organization }))
}

/// GET /api/organizations/user/{email}
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserOrganizationsResponse>, ApiError> {
    require_non_empty("email", &email)?;
    let (organizations, members) = state.organization_service.list_for_user(&email).await?;
    Ok(Json(UserOrganizationsResponse {
        organizations,
        members,
    }))
}

/// GET /api/organizations/{id}/users
pub async fn list_members(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UsersEnvelope>, ApiError> {
    let users = state.organization_service.list_members(id).await?;
    Ok(Json(UsersEnvelope { users }))
}

/// GET /api/organizations/admin/{email}
pub async fn list_administered(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<OrganizationsEnvelope>, ApiError> {
    require_non_empty("email", &email)?;
    let organizations = state.organization_service.list_administered(&email).await?;
    Ok(Json(OrganizationsEnvelope { organizations }))
}

/// GET /api/organizations/{id}/assets
pub async fn list_assets(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssetsEnvelope>, ApiError> {
    let assets = state.asset_service.list_by_owner(&id.to_string()).await?;
    Ok(Json(AssetsEnvelope { assets }))
}

/// POST /api/organizations/{id}/invite
pub async fn invite_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<InviteRequest>,
) -> Result<Json<MemberEnvelope>, ApiError> {
    let member = state.organization_service.invite(id, &req.email).await?;
    Ok(Json(MemberEnvelope { member }))
}

/// POST /api/organizations/{id}/leave
pub async fn leave_organization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<LeaveRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.organization_service.leave(id, &req.email).await?;
    Ok(Json(StatusResponse::success()))
}

/// Decodes the organization multipart form.
async fn read_organization_submission(
    multipart: &mut Multipart,
) -> AppResult<OrganizationSubmission> {
    let mut submission = OrganizationSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "name" => submission.name = read_text(field).await?,
            "email" => submission.email = read_text(field).await?,
            "logo" => submission.logo = Some(read_file(field).await?),
            _ => {}
        }
    }

    Ok(submission)
}
