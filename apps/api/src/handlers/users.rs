//! User CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use rosterly_domain::UserId;
use serde::Deserialize;

use crate::dto::{CreateUserRequest, ListUsersResponse, UpdateUserRequest, UserResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// Query string for the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    /// Requested page; defaults to the first page.
    pub page: Option<i64>,
}

/// `GET /api/users?page=N`
pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Json<ListUsersResponse>> {
    let page = state.user_service.list(query.page.unwrap_or(1)).await?;

    Ok(Json(ListUsersResponse {
        users: page.users.into_iter().map(UserResponse::from).collect(),
        total_pages: page.total_pages,
    }))
}

/// `POST /api/users`
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let created = state.user_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

/// `GET /api/users/{user_id}`
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let record = state.user_service.get_one(&UserId::new(user_id)).await?;
    Ok(Json(UserResponse::from(record)))
}

/// `PATCH /api/users/{user_id}`
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let updated = state
        .user_service
        .update(&UserId::new(user_id), payload.into())
        .await?;

    Ok(Json(UserResponse::from(updated)))
}

/// `DELETE /api/users/{user_id}`
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let removed = state
        .user_service
        .delete_one(&UserId::new(user_id))
        .await?;

    Ok(Json(UserResponse::from(removed)))
}
