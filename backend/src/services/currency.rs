//! Currency rate store
//!
//! A single-row, last-write-wins store for the USD and EUR rates against TL.
//! The raw material ledger reads the current rates at purchase-entry time;
//! rate changes never touch already-stored purchase records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use shared::validate_positive;

use crate::error::{AppError, AppResult};

/// Currency rate service
#[derive(Clone)]
pub struct CurrencyService {
    db: PgPool,
}

/// Current exchange rates
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CurrencyRates {
    pub usd_rate: Decimal,
    pub eur_rate: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// Input for setting the rates
#[derive(Debug, Deserialize)]
pub struct SetRatesInput {
    pub usd_rate: Decimal,
    pub eur_rate: Decimal,
}

impl CurrencyService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Current rates; both default to 1 until someone sets them
    pub async fn get_rates(&self) -> AppResult<CurrencyRates> {
        let rates = sqlx::query_as::<_, CurrencyRates>(
            "SELECT usd_rate, eur_rate, updated_at FROM currency_rates WHERE id = 1",
        )
        .fetch_optional(&self.db)
        .await?;

        Ok(rates.unwrap_or(CurrencyRates {
            usd_rate: Decimal::ONE,
            eur_rate: Decimal::ONE,
            updated_at: Utc::now(),
        }))
    }

    /// Replace the rates (last write wins)
    pub async fn set_rates(&self, input: SetRatesInput) -> AppResult<CurrencyRates> {
        validate_positive(input.usd_rate).map_err(|_| AppError::non_positive("usd_rate"))?;
        validate_positive(input.eur_rate).map_err(|_| AppError::non_positive("eur_rate"))?;

        let rates = sqlx::query_as::<_, CurrencyRates>(
            r#"
            INSERT INTO currency_rates (id, usd_rate, eur_rate, updated_at)
            VALUES (1, $1, $2, NOW())
            ON CONFLICT (id)
            DO UPDATE SET usd_rate = $1, eur_rate = $2, updated_at = NOW()
            RETURNING usd_rate, eur_rate, updated_at
            "#,
        )
        .bind(input.usd_rate)
        .bind(input.eur_rate)
        .fetch_one(&self.db)
        .await?;

        Ok(rates)
    }
}
