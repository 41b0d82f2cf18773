//! Travel permission handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use tripmate_core::error::AppError;
use tripmate_entity::Permission;
use tripmate_service::permission::InvitePermissionRequest;

use crate::dto::request::{CreatePermissionRequest, PermissionStatusFilter};
use crate::dto::response::{ApiResponse, PaginatedResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/travel-permissions
pub async fn create_permission(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePermissionRequest>,
) -> Result<Json<ApiResponse<Permission>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let permission = state
        .permission_service
        .invite(
            &auth,
            InvitePermissionRequest {
                grantee_username: req.grantee_username,
                country_code: req.country_code,
                message: req.message,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(permission)))
}

/// POST /api/travel-permissions/{id}/accept
pub async fn accept_permission(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Permission>>, ApiError> {
    let permission = state.permission_service.accept(&auth, id).await?;
    Ok(Json(ApiResponse::ok(permission)))
}

/// POST /api/travel-permissions/{id}/decline
pub async fn decline_permission(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Permission>>, ApiError> {
    let permission = state.permission_service.decline(&auth, id).await?;
    Ok(Json(ApiResponse::ok(permission)))
}

/// DELETE /api/travel-permissions/{id}
pub async fn revoke_permission(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Permission>>, ApiError> {
    let permission = state.permission_service.revoke(&auth, id).await?;
    Ok(Json(ApiResponse::ok(permission)))
}

/// GET /api/travel-permissions/granted
pub async fn list_granted(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<PermissionStatusFilter>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<Permission>>, ApiError> {
    let page = state
        .permission_service
        .list_granted(&auth, filter.status, pagination.into_page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/travel-permissions/received
pub async fn list_received(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<PermissionStatusFilter>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<Permission>>, ApiError> {
    let page = state
        .permission_service
        .list_received(&auth, filter.status, pagination.into_page_request())
        .await?;
    Ok(Json(page.into()))
}
