//! Raw material ledger service
//!
//! Purchases of feedstock, chemicals and spool cores. Cost totals and the
//! TL equivalent are computed once, with the exchange rate in force at entry
//! time; later rate changes never rewrite stored records (historical cost
//! basis). The balance report replays purchases against the consumption and
//! production ledgers.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::{
    material_balances, purchase_totals, validate_positive, ConsumptionEvent, CurrencyCode,
    MaterialBalance, ProductionEvent, PurchaseEvent, RawMaterialCategory, UnitOfMeasure,
};

use crate::error::{AppError, AppResult};
use crate::services::currency::CurrencyService;

/// Raw material ledger service
#[derive(Clone)]
pub struct RawMaterialService {
    db: PgPool,
}

/// A raw material purchase record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RawMaterialRecord {
    pub id: Uuid,
    pub giris_tarihi: NaiveDate,
    pub malzeme_adi: String,
    /// Explicit category chosen at entry time; legacy rows fall back to
    /// keyword matching on the name
    pub kategori: Option<String>,
    pub birim: String,
    pub miktar: Decimal,
    pub para_birimi: String,
    pub birim_fiyat: Decimal,
    /// `miktar * birim_fiyat`, in the purchase currency
    pub toplam_tutar: Decimal,
    /// Exchange rate applied at entry time (1 for TL)
    pub kur: Decimal,
    /// `toplam_tutar * kur`
    pub tl_tutar: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input for recording or replacing a purchase
#[derive(Debug, Deserialize)]
pub struct RawMaterialInput {
    pub giris_tarihi: NaiveDate,
    pub malzeme_adi: String,
    pub kategori: Option<RawMaterialCategory>,
    pub birim: UnitOfMeasure,
    pub miktar: Decimal,
    pub para_birimi: CurrencyCode,
    pub birim_fiyat: Decimal,
}

impl RawMaterialInput {
    fn validate(&self) -> AppResult<()> {
        if self.malzeme_adi.trim().is_empty() {
            return Err(AppError::InvalidInput {
                field: "malzeme_adi".to_string(),
                message: "material name cannot be empty".to_string(),
                message_tr: "Malzeme adı boş olamaz".to_string(),
            });
        }
        validate_positive(self.miktar).map_err(|_| AppError::non_positive("miktar"))?;
        validate_positive(self.birim_fiyat)
            .map_err(|_| AppError::non_positive("birim_fiyat"))?;
        Ok(())
    }
}

/// Row projection for the balance report
#[derive(Debug, FromRow)]
struct PurchaseRow {
    malzeme_adi: String,
    kategori: Option<String>,
    miktar: Decimal,
}

#[derive(Debug, FromRow)]
struct ConsumptionRow {
    toplam_petkim_tuketim: Decimal,
    toplam_estol_tuketim: Decimal,
    toplam_talk_tuketim: Decimal,
}

#[derive(Debug, FromRow)]
struct MasuraRow {
    masura_tipi: String,
}

impl RawMaterialService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a purchase with the exchange rate in force right now
    pub async fn create(&self, input: RawMaterialInput) -> AppResult<RawMaterialRecord> {
        input.validate()?;

        let kur = self.applicable_rate(input.para_birimi).await?;
        let totals = purchase_totals(input.miktar, input.birim_fiyat, kur);

        let record = sqlx::query_as::<_, RawMaterialRecord>(
            r#"
            INSERT INTO raw_materials (
                giris_tarihi, malzeme_adi, kategori, birim, miktar,
                para_birimi, birim_fiyat, toplam_tutar, kur, tl_tutar
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, giris_tarihi, malzeme_adi, kategori, birim, miktar,
                      para_birimi, birim_fiyat, toplam_tutar, kur, tl_tutar,
                      created_at
            "#,
        )
        .bind(input.giris_tarihi)
        .bind(&input.malzeme_adi)
        .bind(input.kategori.map(|k| k.as_str()))
        .bind(input.birim.as_str())
        .bind(input.miktar)
        .bind(input.para_birimi.as_str())
        .bind(input.birim_fiyat)
        .bind(totals.toplam_tutar)
        .bind(kur)
        .bind(totals.tl_tutar)
        .fetch_one(&self.db)
        .await?;

        Ok(record)
    }

    /// List all purchases, newest first
    pub async fn list(&self) -> AppResult<Vec<RawMaterialRecord>> {
        let records = sqlx::query_as::<_, RawMaterialRecord>(
            r#"
            SELECT id, giris_tarihi, malzeme_adi, kategori, birim, miktar,
                   para_birimi, birim_fiyat, toplam_tutar, kur, tl_tutar,
                   created_at
            FROM raw_materials
            ORDER BY giris_tarihi DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }

    /// Replace a purchase; totals recompute with the CURRENT rate, since an
    /// edit is a new entry in all but id
    pub async fn update(&self, id: Uuid, input: RawMaterialInput) -> AppResult<RawMaterialRecord> {
        input.validate()?;

        let kur = self.applicable_rate(input.para_birimi).await?;
        let totals = purchase_totals(input.miktar, input.birim_fiyat, kur);

        let record = sqlx::query_as::<_, RawMaterialRecord>(
            r#"
            UPDATE raw_materials
            SET giris_tarihi = $1, malzeme_adi = $2, kategori = $3, birim = $4,
                miktar = $5, para_birimi = $6, birim_fiyat = $7,
                toplam_tutar = $8, kur = $9, tl_tutar = $10
            WHERE id = $11
            RETURNING id, giris_tarihi, malzeme_adi, kategori, birim, miktar,
                      para_birimi, birim_fiyat, toplam_tutar, kur, tl_tutar,
                      created_at
            "#,
        )
        .bind(input.giris_tarihi)
        .bind(&input.malzeme_adi)
        .bind(input.kategori.map(|k| k.as_str()))
        .bind(input.birim.as_str())
        .bind(input.miktar)
        .bind(input.para_birimi.as_str())
        .bind(input.birim_fiyat)
        .bind(totals.toplam_tutar)
        .bind(kur)
        .bind(totals.tl_tutar)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Raw material record".to_string()))?;

        Ok(record)
    }

    /// Delete a purchase
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM raw_materials WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Raw material record".to_string()));
        }

        Ok(())
    }

    /// Per-category running balances across the three ledgers
    pub async fn balances(&self) -> AppResult<Vec<MaterialBalance>> {
        let purchases = sqlx::query_as::<_, PurchaseRow>(
            "SELECT malzeme_adi, kategori, miktar FROM raw_materials",
        )
        .fetch_all(&self.db)
        .await?;

        let consumptions = sqlx::query_as::<_, ConsumptionRow>(
            r#"
            SELECT toplam_petkim_tuketim, toplam_estol_tuketim, toplam_talk_tuketim
            FROM daily_consumptions
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let masura_rows =
            sqlx::query_as::<_, MasuraRow>("SELECT masura_tipi FROM productions")
                .fetch_all(&self.db)
                .await?;

        let purchase_events: Vec<PurchaseEvent> = purchases
            .into_iter()
            .map(|row| PurchaseEvent {
                kategori: row.kategori.as_deref().and_then(RawMaterialCategory::parse),
                malzeme_adi: row.malzeme_adi,
                miktar: row.miktar,
            })
            .collect();

        let consumption_events: Vec<ConsumptionEvent> = consumptions
            .into_iter()
            .map(|row| ConsumptionEvent {
                petkim_kg: row.toplam_petkim_tuketim,
                estol_kg: row.toplam_estol_tuketim,
                talk_kg: row.toplam_talk_tuketim,
            })
            .collect();

        // the balance only reads the masura type off production events
        let production_events: Vec<ProductionEvent> = masura_rows
            .into_iter()
            .map(|row| ProductionEvent {
                kalinlik_mm: Decimal::ZERO,
                en_cm: Decimal::ZERO,
                metre: Decimal::ZERO,
                metrekare: Decimal::ZERO,
                adet: 0,
                masura_tipi: row.masura_tipi,
                renk_kategori: String::new(),
                renk: String::new(),
            })
            .collect();

        Ok(material_balances(
            &purchase_events,
            &consumption_events,
            &production_events,
        ))
    }

    async fn applicable_rate(&self, currency: CurrencyCode) -> AppResult<Decimal> {
        match currency {
            CurrencyCode::TL => Ok(Decimal::ONE),
            CurrencyCode::USD => Ok(CurrencyService::new(self.db.clone())
                .get_rates()
                .await?
                .usd_rate),
            CurrencyCode::EUR => Ok(CurrencyService::new(self.db.clone())
                .get_rates()
                .await?
                .eur_rate),
        }
    }
}
