//! Authentication and user management handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::auth::{CreateUserInput, LoginInput, TokenResponse, UserAccount};
use crate::services::AuthService;
use crate::AppState;

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> AppResult<Json<TokenResponse>> {
    let service = AuthService::new(state.db.clone(), state.config.clone());
    let tokens = service.login(input).await?;
    Ok(Json(tokens))
}

/// List all user accounts (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<UserAccount>>> {
    require_admin(&user)?;
    let service = AuthService::new(state.db.clone(), state.config.clone());
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Create a user account (admin only)
pub async fn create_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateUserInput>,
) -> AppResult<(StatusCode, Json<UserAccount>)> {
    require_admin(&user)?;
    let service = AuthService::new(state.db.clone(), state.config.clone());
    let created = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a user account (admin only)
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(user_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    let service = AuthService::new(state.db.clone(), state.config.clone());
    service.delete_user(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
