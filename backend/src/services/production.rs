//! Production ledger service
//!
//! Records finished-roll production runs. The per-roll area is always
//! computed server-side from width and length; the value sent by the client
//! is ignored. Edits are full replacements and recompute the area.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::{roll_area_m2, validate_positive, validate_positive_count, ProductType};

use crate::error::{AppError, AppResult};

/// Production ledger service
#[derive(Clone)]
pub struct ProductionService {
    db: PgPool,
}

/// A finished-roll production record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductionRecord {
    pub id: Uuid,
    pub tarih: NaiveDate,
    pub makine: String,
    pub kalinlik_mm: Decimal,
    pub en_cm: Decimal,
    pub metre: Decimal,
    /// Area of one roll in m2, `(en_cm / 100) * metre`
    pub metrekare: Decimal,
    pub adet: i32,
    pub masura_tipi: String,
    pub renk_kategori: String,
    pub renk: String,
    pub created_at: DateTime<Utc>,
}

impl ProductionRecord {
    /// Production always supplies Normal (roll) stock
    pub fn urun_tipi(&self) -> ProductType {
        ProductType::Normal
    }
}

/// Input for recording or replacing a production run
#[derive(Debug, Deserialize)]
pub struct ProductionInput {
    pub tarih: NaiveDate,
    pub makine: String,
    pub kalinlik_mm: Decimal,
    pub en_cm: Decimal,
    pub metre: Decimal,
    pub adet: i32,
    pub masura_tipi: String,
    pub renk_kategori: String,
    pub renk: String,
}

impl ProductionInput {
    fn validate(&self) -> AppResult<()> {
        validate_positive(self.kalinlik_mm)
            .map_err(|_| AppError::non_positive("kalinlik_mm"))?;
        validate_positive(self.en_cm).map_err(|_| AppError::non_positive("en_cm"))?;
        validate_positive(self.metre).map_err(|_| AppError::non_positive("metre"))?;
        validate_positive_count(self.adet).map_err(|_| AppError::non_positive("adet"))?;
        Ok(())
    }
}

impl ProductionService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a production run
    pub async fn create(&self, input: ProductionInput) -> AppResult<ProductionRecord> {
        input.validate()?;
        let metrekare = roll_area_m2(input.en_cm, input.metre);

        let record = sqlx::query_as::<_, ProductionRecord>(
            r#"
            INSERT INTO productions (
                tarih, makine, kalinlik_mm, en_cm, metre, metrekare, adet,
                masura_tipi, renk_kategori, renk
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, tarih, makine, kalinlik_mm, en_cm, metre, metrekare,
                      adet, masura_tipi, renk_kategori, renk, created_at
            "#,
        )
        .bind(input.tarih)
        .bind(&input.makine)
        .bind(input.kalinlik_mm)
        .bind(input.en_cm)
        .bind(input.metre)
        .bind(metrekare)
        .bind(input.adet)
        .bind(&input.masura_tipi)
        .bind(&input.renk_kategori)
        .bind(&input.renk)
        .fetch_one(&self.db)
        .await?;

        Ok(record)
    }

    /// List all production runs, newest first
    pub async fn list(&self) -> AppResult<Vec<ProductionRecord>> {
        let records = sqlx::query_as::<_, ProductionRecord>(
            r#"
            SELECT id, tarih, makine, kalinlik_mm, en_cm, metre, metrekare,
                   adet, masura_tipi, renk_kategori, renk, created_at
            FROM productions
            ORDER BY tarih DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }

    /// Replace a production run; the area is recomputed from the new inputs
    pub async fn update(&self, id: Uuid, input: ProductionInput) -> AppResult<ProductionRecord> {
        input.validate()?;
        let metrekare = roll_area_m2(input.en_cm, input.metre);

        let record = sqlx::query_as::<_, ProductionRecord>(
            r#"
            UPDATE productions
            SET tarih = $1, makine = $2, kalinlik_mm = $3, en_cm = $4,
                metre = $5, metrekare = $6, adet = $7, masura_tipi = $8,
                renk_kategori = $9, renk = $10
            WHERE id = $11
            RETURNING id, tarih, makine, kalinlik_mm, en_cm, metre, metrekare,
                      adet, masura_tipi, renk_kategori, renk, created_at
            "#,
        )
        .bind(input.tarih)
        .bind(&input.makine)
        .bind(input.kalinlik_mm)
        .bind(input.en_cm)
        .bind(input.metre)
        .bind(metrekare)
        .bind(input.adet)
        .bind(&input.masura_tipi)
        .bind(&input.renk_kategori)
        .bind(&input.renk)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Production record".to_string()))?;

        Ok(record)
    }

    /// Delete a production run
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM productions WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Production record".to_string()));
        }

        Ok(())
    }
}
