//! Post handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use tripmate_core::error::AppError;
use tripmate_entity::Post;
use tripmate_service::post::UpdatePostRequest as ServiceUpdatePostRequest;

use crate::dto::request::{CreatePostRequest, UpdatePostRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PaginatedResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/posts
///
/// Returns every row the request produced: one for personal and
/// collaborator-only publications, two for a both-profiles shared pair.
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> Result<Json<ApiResponse<Vec<Post>>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let posts = state
        .post_service
        .create_post(&auth, req.into_service())
        .await?;

    Ok(Json(ApiResponse::ok(posts)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<ApiResponse<Post>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let post = state
        .post_service
        .update_post(
            &auth,
            id,
            ServiceUpdatePostRequest {
                caption: req.caption,
                collection_code: req.collection_code,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.post_service.delete_post(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("post.deleted"))))
}

/// GET /api/posts/shared-group/{group_id}
pub async fn shared_group(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(group_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Post>>>, ApiError> {
    let posts = state.post_service.shared_group(group_id).await?;
    Ok(Json(ApiResponse::ok(posts)))
}

/// GET /api/posts/profile/{user_id}
pub async fn list_by_profile(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<Post>>, ApiError> {
    let page = state
        .post_service
        .list_by_profile(user_id, pagination.into_page_request())
        .await?;
    Ok(Json(page.into()))
}
