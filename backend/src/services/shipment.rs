//! Shipment ledger service
//!
//! Outbound shipments decrement stock for either product type. The third
//! dimension is the roll length in metres for Normal goods and the piece
//! height in centimetres for Cut goods; the unit area is computed
//! accordingly at write time.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::{
    cut_piece_area_m2, roll_area_m2, validate_positive, validate_positive_count, ProductType,
};

use crate::error::{AppError, AppResult};

/// Shipment ledger service
#[derive(Clone)]
pub struct ShipmentService {
    db: PgPool,
}

/// An outbound shipment record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShipmentRecord {
    pub id: Uuid,
    pub tarih: NaiveDate,
    pub alici_firma: String,
    /// "Normal" or "Kesilmiş"
    pub urun_tipi: String,
    pub kalinlik_mm: Decimal,
    pub en_cm: Decimal,
    /// Metres for Normal, centimetres (height) for Cut
    pub uzunluk: Decimal,
    /// Area of one shipped unit in m2
    pub metrekare: Decimal,
    pub adet: i32,
    pub renk_kategori: String,
    pub renk: String,
    pub irsaliye_no: String,
    pub arac_plaka: String,
    pub sofor: String,
    pub cikis_saati: String,
    pub created_at: DateTime<Utc>,
}

/// Input for recording or replacing a shipment
#[derive(Debug, Deserialize)]
pub struct ShipmentInput {
    pub tarih: NaiveDate,
    pub alici_firma: String,
    pub urun_tipi: ProductType,
    pub kalinlik_mm: Decimal,
    pub en_cm: Decimal,
    pub uzunluk: Decimal,
    pub adet: i32,
    pub renk_kategori: String,
    pub renk: String,
    pub irsaliye_no: String,
    pub arac_plaka: String,
    pub sofor: String,
    pub cikis_saati: String,
}

impl ShipmentInput {
    fn validate(&self) -> AppResult<()> {
        validate_positive(self.kalinlik_mm)
            .map_err(|_| AppError::non_positive("kalinlik_mm"))?;
        validate_positive(self.en_cm).map_err(|_| AppError::non_positive("en_cm"))?;
        validate_positive(self.uzunluk).map_err(|_| AppError::non_positive("uzunluk"))?;
        validate_positive_count(self.adet).map_err(|_| AppError::non_positive("adet"))?;
        Ok(())
    }

    /// Unit area depends on the product type
    fn unit_area(&self) -> Decimal {
        match self.urun_tipi {
            ProductType::Normal => roll_area_m2(self.en_cm, self.uzunluk),
            ProductType::Cut => cut_piece_area_m2(self.en_cm, self.uzunluk),
        }
    }
}

impl ShipmentService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a shipment
    pub async fn create(&self, input: ShipmentInput) -> AppResult<ShipmentRecord> {
        input.validate()?;
        let metrekare = input.unit_area();

        let record = sqlx::query_as::<_, ShipmentRecord>(
            r#"
            INSERT INTO shipments (
                tarih, alici_firma, urun_tipi, kalinlik_mm, en_cm, uzunluk,
                metrekare, adet, renk_kategori, renk, irsaliye_no, arac_plaka,
                sofor, cikis_saati
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id, tarih, alici_firma, urun_tipi, kalinlik_mm, en_cm,
                      uzunluk, metrekare, adet, renk_kategori, renk,
                      irsaliye_no, arac_plaka, sofor, cikis_saati, created_at
            "#,
        )
        .bind(input.tarih)
        .bind(&input.alici_firma)
        .bind(input.urun_tipi.as_str())
        .bind(input.kalinlik_mm)
        .bind(input.en_cm)
        .bind(input.uzunluk)
        .bind(metrekare)
        .bind(input.adet)
        .bind(&input.renk_kategori)
        .bind(&input.renk)
        .bind(&input.irsaliye_no)
        .bind(&input.arac_plaka)
        .bind(&input.sofor)
        .bind(&input.cikis_saati)
        .fetch_one(&self.db)
        .await?;

        Ok(record)
    }

    /// List all shipments, newest first
    pub async fn list(&self) -> AppResult<Vec<ShipmentRecord>> {
        let records = sqlx::query_as::<_, ShipmentRecord>(
            r#"
            SELECT id, tarih, alici_firma, urun_tipi, kalinlik_mm, en_cm,
                   uzunluk, metrekare, adet, renk_kategori, renk,
                   irsaliye_no, arac_plaka, sofor, cikis_saati, created_at
            FROM shipments
            ORDER BY tarih DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }

    /// Replace a shipment; the unit area is recomputed from the new inputs
    pub async fn update(&self, id: Uuid, input: ShipmentInput) -> AppResult<ShipmentRecord> {
        input.validate()?;
        let metrekare = input.unit_area();

        let record = sqlx::query_as::<_, ShipmentRecord>(
            r#"
            UPDATE shipments
            SET tarih = $1, alici_firma = $2, urun_tipi = $3, kalinlik_mm = $4,
                en_cm = $5, uzunluk = $6, metrekare = $7, adet = $8,
                renk_kategori = $9, renk = $10, irsaliye_no = $11,
                arac_plaka = $12, sofor = $13, cikis_saati = $14
            WHERE id = $15
            RETURNING id, tarih, alici_firma, urun_tipi, kalinlik_mm, en_cm,
                      uzunluk, metrekare, adet, renk_kategori, renk,
                      irsaliye_no, arac_plaka, sofor, cikis_saati, created_at
            "#,
        )
        .bind(input.tarih)
        .bind(&input.alici_firma)
        .bind(input.urun_tipi.as_str())
        .bind(input.kalinlik_mm)
        .bind(input.en_cm)
        .bind(input.uzunluk)
        .bind(metrekare)
        .bind(input.adet)
        .bind(&input.renk_kategori)
        .bind(&input.renk)
        .bind(&input.irsaliye_no)
        .bind(&input.arac_plaka)
        .bind(&input.sofor)
        .bind(&input.cikis_saati)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Shipment record".to_string()))?;

        Ok(record)
    }

    /// Delete a shipment
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM shipments WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Shipment record".to_string()));
        }

        Ok(())
    }
}
