//! Daily consumption ledger service
//!
//! Per-day, per-machine feedstock and waste masses. The estol and talk doses
//! are derived from the inputs at every write; they are never accepted from
//! the caller, so stored derived values can never drift from their inputs.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::{derive_estol_talk, validate_non_negative, validate_positive};

use crate::error::{AppError, AppResult};

/// Consumption ledger service
#[derive(Clone)]
pub struct ConsumptionService {
    db: PgPool,
}

/// A machine-day consumption record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailyConsumptionRecord {
    pub id: Uuid,
    pub tarih: NaiveDate,
    pub makine: String,
    pub toplam_petkim_tuketim: Decimal,
    pub fire_kg: Decimal,
    /// 3% of (petkim + fire), recomputed on every write
    pub toplam_estol_tuketim: Decimal,
    /// 1.5% of (petkim + fire), recomputed on every write
    pub toplam_talk_tuketim: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input for recording or replacing a machine-day
#[derive(Debug, Deserialize)]
pub struct ConsumptionInput {
    pub tarih: NaiveDate,
    pub makine: String,
    pub petkim_kg: Decimal,
    pub fire_kg: Decimal,
}

impl ConsumptionInput {
    fn validate(&self) -> AppResult<()> {
        validate_positive(self.petkim_kg).map_err(|_| AppError::non_positive("petkim_kg"))?;
        // waste can legitimately be zero on a good day
        validate_non_negative(self.fire_kg).map_err(|_| AppError::negative("fire_kg"))?;
        Ok(())
    }
}

impl ConsumptionService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a machine-day
    pub async fn create(&self, input: ConsumptionInput) -> AppResult<DailyConsumptionRecord> {
        input.validate()?;
        let derived = derive_estol_talk(input.petkim_kg, input.fire_kg);

        let record = sqlx::query_as::<_, DailyConsumptionRecord>(
            r#"
            INSERT INTO daily_consumptions (
                tarih, makine, toplam_petkim_tuketim, fire_kg,
                toplam_estol_tuketim, toplam_talk_tuketim
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, tarih, makine, toplam_petkim_tuketim, fire_kg,
                      toplam_estol_tuketim, toplam_talk_tuketim, created_at
            "#,
        )
        .bind(input.tarih)
        .bind(&input.makine)
        .bind(input.petkim_kg)
        .bind(input.fire_kg)
        .bind(derived.estol_kg)
        .bind(derived.talk_kg)
        .fetch_one(&self.db)
        .await?;

        Ok(record)
    }

    /// List all machine-days, newest first
    pub async fn list(&self) -> AppResult<Vec<DailyConsumptionRecord>> {
        let records = sqlx::query_as::<_, DailyConsumptionRecord>(
            r#"
            SELECT id, tarih, makine, toplam_petkim_tuketim, fire_kg,
                   toplam_estol_tuketim, toplam_talk_tuketim, created_at
            FROM daily_consumptions
            ORDER BY tarih DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }

    /// Replace a machine-day; derived doses recompute atomically with it
    pub async fn update(
        &self,
        id: Uuid,
        input: ConsumptionInput,
    ) -> AppResult<DailyConsumptionRecord> {
        input.validate()?;
        let derived = derive_estol_talk(input.petkim_kg, input.fire_kg);

        let record = sqlx::query_as::<_, DailyConsumptionRecord>(
            r#"
            UPDATE daily_consumptions
            SET tarih = $1, makine = $2, toplam_petkim_tuketim = $3,
                fire_kg = $4, toplam_estol_tuketim = $5, toplam_talk_tuketim = $6
            WHERE id = $7
            RETURNING id, tarih, makine, toplam_petkim_tuketim, fire_kg,
                      toplam_estol_tuketim, toplam_talk_tuketim, created_at
            "#,
        )
        .bind(input.tarih)
        .bind(&input.makine)
        .bind(input.petkim_kg)
        .bind(input.fire_kg)
        .bind(derived.estol_kg)
        .bind(derived.talk_kg)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Consumption record".to_string()))?;

        Ok(record)
    }

    /// Delete a machine-day
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM daily_consumptions WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Consumption record".to_string()));
        }

        Ok(())
    }
}
