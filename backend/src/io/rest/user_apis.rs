//! # REST API for User Management
//!
//! Endpoints for creating, retrieving, updating, and deleting users.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use crate::io::rest::error::ApiError;
use crate::io::rest::extract::ApiJson;
use crate::io::rest::mappers::UserMapper;
use crate::AppState;
use shared::{CreateUserRequest, MessageResponse, UpdateUserRequest, User};

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    info!("POST /users - request: {:?}", request);

    let user = state.user_service.create_user(request).await?;

    Ok((StatusCode::CREATED, Json(UserMapper::to_dto(user))))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    info!("GET /users/{}", user_id);

    let user = state.user_service.get_user(user_id).await?;

    Ok(Json(UserMapper::to_dto(user)))
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    info!("GET /users");

    let users = state.user_service.list_users().await?;

    Ok(Json(UserMapper::to_user_list_dto(users)))
}

/// Update a user's name and email
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    info!("PUT /users/{} - request: {:?}", user_id, request);

    let user = state.user_service.update_user(user_id, request).await?;

    Ok(Json(UserMapper::to_dto(user)))
}

/// Delete a user and their orders
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("DELETE /users/{}", user_id);

    state.user_service.delete_user(user_id).await?;

    Ok(Json(MessageResponse::new(format!(
        "successfully deleted user {}",
        user_id
    ))))
}
