//! Stock snapshot HTTP handler

use axum::{extract::State, Json};
use shared::StockVariant;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::StockService;
use crate::AppState;

/// Current stock snapshot, derived from the three ledgers on every call
pub async fn get_stock(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<Json<Vec<StockVariant>>> {
    let service = StockService::new(state.db.clone());
    let stock = service.snapshot().await?;
    Ok(Json(stock))
}
