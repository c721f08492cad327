//! Daily consumption ledger HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::consumption::{ConsumptionInput, DailyConsumptionRecord};
use crate::services::ConsumptionService;
use crate::AppState;

/// List all machine-day consumption records
pub async fn list_consumptions(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<Json<Vec<DailyConsumptionRecord>>> {
    let service = ConsumptionService::new(state.db.clone());
    let records = service.list().await?;
    Ok(Json(records))
}

/// Record a machine-day (admin only)
pub async fn create_consumption(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<ConsumptionInput>,
) -> AppResult<(StatusCode, Json<DailyConsumptionRecord>)> {
    require_admin(&user)?;
    let service = ConsumptionService::new(state.db.clone());
    let record = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace a machine-day (admin only)
pub async fn update_consumption(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(input): Json<ConsumptionInput>,
) -> AppResult<Json<DailyConsumptionRecord>> {
    require_admin(&user)?;
    let service = ConsumptionService::new(state.db.clone());
    let record = service.update(id, input).await?;
    Ok(Json(record))
}

/// Delete a machine-day (admin only)
pub async fn delete_consumption(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    let service = ConsumptionService::new(state.db.clone());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
