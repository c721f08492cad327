//! Cut-product ledger HTTP handlers
//!
//! No update route: cut records are immutable, so edits are delete-and-recreate.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::cut_product::{CutProductInput, CutProductRecord};
use crate::services::CutProductService;
use crate::AppState;

/// List all cutting records
pub async fn list_cut_products(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<Json<Vec<CutProductRecord>>> {
    let service = CutProductService::new(state.db.clone());
    let records = service.list().await?;
    Ok(Json(records))
}

/// Record a cutting order (admin only)
pub async fn create_cut_product(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CutProductInput>,
) -> AppResult<(StatusCode, Json<CutProductRecord>)> {
    require_admin(&user)?;
    let service = CutProductService::new(state.db.clone());
    let record = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Delete a cutting record (admin only)
pub async fn delete_cut_product(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    let service = CutProductService::new(state.db.clone());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
