//! Shipment ledger HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::shipment::{ShipmentInput, ShipmentRecord};
use crate::services::ShipmentService;
use crate::AppState;

/// List all shipments
pub async fn list_shipments(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<Json<Vec<ShipmentRecord>>> {
    let service = ShipmentService::new(state.db.clone());
    let records = service.list().await?;
    Ok(Json(records))
}

/// Record a shipment (admin only)
pub async fn create_shipment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<ShipmentInput>,
) -> AppResult<(StatusCode, Json<ShipmentRecord>)> {
    require_admin(&user)?;
    let service = ShipmentService::new(state.db.clone());
    let record = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace a shipment (admin only)
pub async fn update_shipment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(input): Json<ShipmentInput>,
) -> AppResult<Json<ShipmentRecord>> {
    require_admin(&user)?;
    let service = ShipmentService::new(state.db.clone());
    let record = service.update(id, input).await?;
    Ok(Json(record))
}

/// Delete a shipment (admin only)
pub async fn delete_shipment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    let service = ShipmentService::new(state.db.clone());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
