//! Cut-product ledger service
//!
//! A cutting order consumes whole parent rolls and produces cut-to-size
//! pieces. The number of parent rolls is derived, never supplied by the
//! client, and a failed derivation leaves no record behind.
//!
//! Cut records are immutable after creation: recomputing a historical cut
//! would invalidate already-derived stock numbers, so the only operations
//! are create, list and delete.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::{
    cut_piece_area_m2, required_parent_units, roll_area_m2, validate_positive,
    validate_positive_count,
};

use crate::error::{AppError, AppResult};

/// Cut-product ledger service
#[derive(Clone)]
pub struct CutProductService {
    db: PgPool,
}

/// A cutting record: parent material descriptor, child piece descriptor and
/// the derived parent consumption
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CutProductRecord {
    pub id: Uuid,
    pub tarih: NaiveDate,
    // parent material (roll stock)
    pub ana_kalinlik: Decimal,
    pub ana_en: Decimal,
    pub ana_metre: Decimal,
    /// Area of one parent roll in m2
    pub ana_metrekare: Decimal,
    pub ana_renk_kategori: String,
    pub ana_renk: String,
    // child piece (cut-to-size)
    pub kesim_kalinlik: Decimal,
    pub kesim_en: Decimal,
    pub kesim_boy: Decimal,
    pub kesim_renk_kategori: String,
    pub kesim_renk: String,
    pub kesim_adet: i32,
    /// Whole parent rolls consumed, `ceil(child area x count / parent area)`
    pub kullanilan_ana_adet: i32,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a cutting order
#[derive(Debug, Deserialize)]
pub struct CutProductInput {
    pub tarih: NaiveDate,
    pub ana_kalinlik: Decimal,
    pub ana_en: Decimal,
    pub ana_metre: Decimal,
    pub ana_renk_kategori: String,
    pub ana_renk: String,
    pub kesim_kalinlik: Decimal,
    pub kesim_en: Decimal,
    pub kesim_boy: Decimal,
    pub kesim_renk_kategori: String,
    pub kesim_renk: String,
    pub kesim_adet: i32,
}

impl CutProductInput {
    fn validate(&self) -> AppResult<()> {
        validate_positive(self.ana_kalinlik)
            .map_err(|_| AppError::non_positive("ana_kalinlik"))?;
        validate_positive(self.ana_en).map_err(|_| AppError::non_positive("ana_en"))?;
        validate_positive(self.ana_metre).map_err(|_| AppError::non_positive("ana_metre"))?;
        validate_positive(self.kesim_kalinlik)
            .map_err(|_| AppError::non_positive("kesim_kalinlik"))?;
        validate_positive(self.kesim_en).map_err(|_| AppError::non_positive("kesim_en"))?;
        validate_positive(self.kesim_boy).map_err(|_| AppError::non_positive("kesim_boy"))?;
        validate_positive_count(self.kesim_adet)
            .map_err(|_| AppError::non_positive("kesim_adet"))?;
        Ok(())
    }
}

impl CutProductService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a cutting order
    ///
    /// Derives the parent consumption before touching the database; any
    /// validation or calculation failure means nothing is persisted.
    pub async fn create(&self, input: CutProductInput) -> AppResult<CutProductRecord> {
        input.validate()?;

        let ana_metrekare = roll_area_m2(input.ana_en, input.ana_metre);
        let kesim_alani = cut_piece_area_m2(input.kesim_en, input.kesim_boy);

        let kullanilan_ana_adet =
            required_parent_units(ana_metrekare, kesim_alani, input.kesim_adet as u32).map_err(
                |_| {
                    AppError::Calculation(
                        "required parent units evaluated to zero; check the cut dimensions"
                            .to_string(),
                    )
                },
            )?;

        let record = sqlx::query_as::<_, CutProductRecord>(
            r#"
            INSERT INTO cut_products (
                tarih, ana_kalinlik, ana_en, ana_metre, ana_metrekare,
                ana_renk_kategori, ana_renk, kesim_kalinlik, kesim_en,
                kesim_boy, kesim_renk_kategori, kesim_renk, kesim_adet,
                kullanilan_ana_adet
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id, tarih, ana_kalinlik, ana_en, ana_metre, ana_metrekare,
                      ana_renk_kategori, ana_renk, kesim_kalinlik, kesim_en,
                      kesim_boy, kesim_renk_kategori, kesim_renk, kesim_adet,
                      kullanilan_ana_adet, created_at
            "#,
        )
        .bind(input.tarih)
        .bind(input.ana_kalinlik)
        .bind(input.ana_en)
        .bind(input.ana_metre)
        .bind(ana_metrekare)
        .bind(&input.ana_renk_kategori)
        .bind(&input.ana_renk)
        .bind(input.kesim_kalinlik)
        .bind(input.kesim_en)
        .bind(input.kesim_boy)
        .bind(&input.kesim_renk_kategori)
        .bind(&input.kesim_renk)
        .bind(input.kesim_adet)
        .bind(kullanilan_ana_adet as i32)
        .fetch_one(&self.db)
        .await?;

        Ok(record)
    }

    /// List all cutting records, newest first
    pub async fn list(&self) -> AppResult<Vec<CutProductRecord>> {
        let records = sqlx::query_as::<_, CutProductRecord>(
            r#"
            SELECT id, tarih, ana_kalinlik, ana_en, ana_metre, ana_metrekare,
                   ana_renk_kategori, ana_renk, kesim_kalinlik, kesim_en,
                   kesim_boy, kesim_renk_kategori, kesim_renk, kesim_adet,
                   kullanilan_ana_adet, created_at
            FROM cut_products
            ORDER BY tarih DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }

    /// Delete a cutting record (delete-and-recreate is the only way to "edit")
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM cut_products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Cut product record".to_string()));
        }

        Ok(())
    }
}
