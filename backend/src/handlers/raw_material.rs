//! Raw material ledger HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::MaterialBalance;
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::raw_material::{RawMaterialInput, RawMaterialRecord};
use crate::services::RawMaterialService;
use crate::AppState;

/// List all purchases
pub async fn list_raw_materials(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<Json<Vec<RawMaterialRecord>>> {
    let service = RawMaterialService::new(state.db.clone());
    let records = service.list().await?;
    Ok(Json(records))
}

/// Record a purchase (admin only)
pub async fn create_raw_material(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<RawMaterialInput>,
) -> AppResult<(StatusCode, Json<RawMaterialRecord>)> {
    require_admin(&user)?;
    let service = RawMaterialService::new(state.db.clone());
    let record = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace a purchase (admin only)
pub async fn update_raw_material(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(input): Json<RawMaterialInput>,
) -> AppResult<Json<RawMaterialRecord>> {
    require_admin(&user)?;
    let service = RawMaterialService::new(state.db.clone());
    let record = service.update(id, input).await?;
    Ok(Json(record))
}

/// Delete a purchase (admin only)
pub async fn delete_raw_material(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    let service = RawMaterialService::new(state.db.clone());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Per-category running balances
pub async fn get_material_balances(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<Json<Vec<MaterialBalance>>> {
    let service = RawMaterialService::new(state.db.clone());
    let balances = service.balances().await?;
    Ok(Json(balances))
}
