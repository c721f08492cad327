//! Production ledger HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::production::{ProductionInput, ProductionRecord};
use crate::services::ProductionService;
use crate::AppState;

/// List all production runs
pub async fn list_productions(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<Json<Vec<ProductionRecord>>> {
    let service = ProductionService::new(state.db.clone());
    let records = service.list().await?;
    Ok(Json(records))
}

/// Record a production run (admin only)
pub async fn create_production(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<ProductionInput>,
) -> AppResult<(StatusCode, Json<ProductionRecord>)> {
    require_admin(&user)?;
    let service = ProductionService::new(state.db.clone());
    let record = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace a production run (admin only)
pub async fn update_production(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(input): Json<ProductionInput>,
) -> AppResult<Json<ProductionRecord>> {
    require_admin(&user)?;
    let service = ProductionService::new(state.db.clone());
    let record = service.update(id, input).await?;
    Ok(Json(record))
}

/// Delete a production run (admin only)
pub async fn delete_production(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    let service = ProductionService::new(state.db.clone());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
