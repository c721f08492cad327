//! Currency rate HTTP handlers

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::currency::{CurrencyRates, SetRatesInput};
use crate::services::CurrencyService;
use crate::AppState;

/// Current USD and EUR rates
pub async fn get_currency_rates(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<Json<CurrencyRates>> {
    let service = CurrencyService::new(state.db.clone());
    let rates = service.get_rates().await?;
    Ok(Json(rates))
}

/// Replace the rates (admin only)
pub async fn set_currency_rates(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<SetRatesInput>,
) -> AppResult<Json<CurrencyRates>> {
    require_admin(&user)?;
    let service = CurrencyService::new(state.db.clone());
    let rates = service.set_rates(input).await?;
    Ok(Json(rates))
}
