//! Stock snapshot service
//!
//! Loads the three ledgers that move finished goods and folds them into the
//! current per-variant snapshot. Nothing is cached or stored; every request
//! replays the full history, so the snapshot can never go stale.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use shared::{
    compute_stock, CutEvent, ProductType, ProductionEvent, ShipmentEvent, StockVariant,
};

use crate::error::AppResult;

/// Stock snapshot service
#[derive(Clone)]
pub struct StockService {
    db: PgPool,
}

/// Row projections carrying only the columns the fold reads
#[derive(Debug, FromRow)]
struct ProductionRow {
    kalinlik_mm: Decimal,
    en_cm: Decimal,
    metre: Decimal,
    metrekare: Decimal,
    adet: i32,
    masura_tipi: String,
    renk_kategori: String,
    renk: String,
}

#[derive(Debug, FromRow)]
struct CutRow {
    ana_kalinlik: Decimal,
    ana_en: Decimal,
    ana_metre: Decimal,
    ana_metrekare: Decimal,
    ana_renk_kategori: String,
    ana_renk: String,
    kesim_kalinlik: Decimal,
    kesim_en: Decimal,
    kesim_boy: Decimal,
    kesim_renk_kategori: String,
    kesim_renk: String,
    kesim_adet: i32,
    kullanilan_ana_adet: i32,
}

#[derive(Debug, FromRow)]
struct ShipmentRow {
    urun_tipi: String,
    kalinlik_mm: Decimal,
    en_cm: Decimal,
    uzunluk: Decimal,
    metrekare: Decimal,
    adet: i32,
    renk_kategori: String,
    renk: String,
}

impl StockService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Current stock, one entry per variant, negatives included
    pub async fn snapshot(&self) -> AppResult<Vec<StockVariant>> {
        let productions = sqlx::query_as::<_, ProductionRow>(
            r#"
            SELECT kalinlik_mm, en_cm, metre, metrekare, adet, masura_tipi,
                   renk_kategori, renk
            FROM productions
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let cuts = sqlx::query_as::<_, CutRow>(
            r#"
            SELECT ana_kalinlik, ana_en, ana_metre, ana_metrekare,
                   ana_renk_kategori, ana_renk, kesim_kalinlik, kesim_en,
                   kesim_boy, kesim_renk_kategori, kesim_renk, kesim_adet,
                   kullanilan_ana_adet
            FROM cut_products
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let shipments = sqlx::query_as::<_, ShipmentRow>(
            r#"
            SELECT urun_tipi, kalinlik_mm, en_cm, uzunluk, metrekare, adet,
                   renk_kategori, renk
            FROM shipments
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let production_events: Vec<ProductionEvent> = productions
            .into_iter()
            .map(|row| ProductionEvent {
                kalinlik_mm: row.kalinlik_mm,
                en_cm: row.en_cm,
                metre: row.metre,
                metrekare: row.metrekare,
                adet: row.adet as i64,
                masura_tipi: row.masura_tipi,
                renk_kategori: row.renk_kategori,
                renk: row.renk,
            })
            .collect();

        let cut_events: Vec<CutEvent> = cuts
            .into_iter()
            .map(|row| CutEvent {
                ana_kalinlik: row.ana_kalinlik,
                ana_en: row.ana_en,
                ana_metre: row.ana_metre,
                ana_metrekare: row.ana_metrekare,
                ana_renk_kategori: row.ana_renk_kategori,
                ana_renk: row.ana_renk,
                kesim_kalinlik: row.kesim_kalinlik,
                kesim_en: row.kesim_en,
                kesim_boy: row.kesim_boy,
                kesim_renk_kategori: row.kesim_renk_kategori,
                kesim_renk: row.kesim_renk,
                kesim_adet: row.kesim_adet as i64,
                kullanilan_ana_adet: row.kullanilan_ana_adet as i64,
            })
            .collect();

        let shipment_events: Vec<ShipmentEvent> =
            shipments.into_iter().filter_map(shipment_event).collect();

        Ok(compute_stock(
            &production_events,
            &cut_events,
            &shipment_events,
        ))
    }
}

/// One shipment row as a fold event. Rows whose product type label is not
/// recognised are skipped with a warning rather than poisoning the whole
/// snapshot; the schema constrains the column, so this only fires on rows
/// written outside the application.
fn shipment_event(row: ShipmentRow) -> Option<ShipmentEvent> {
    let Some(urun_tipi) = ProductType::parse(&row.urun_tipi) else {
        tracing::warn!(urun_tipi = %row.urun_tipi, "skipping shipment row with unknown product type");
        return None;
    };
    Some(ShipmentEvent {
        urun_tipi,
        kalinlik_mm: row.kalinlik_mm,
        en_cm: row.en_cm,
        uzunluk: row.uzunluk,
        metrekare: row.metrekare,
        adet: row.adet as i64,
        renk_kategori: row.renk_kategori,
        renk: row.renk,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn row(urun_tipi: &str) -> ShipmentRow {
        ShipmentRow {
            urun_tipi: urun_tipi.to_string(),
            kalinlik_mm: Decimal::from_str("0.05").unwrap(),
            en_cm: Decimal::from(100),
            uzunluk: Decimal::from(200),
            metrekare: Decimal::from(200),
            adet: 3,
            renk_kategori: "Şeffaf".to_string(),
            renk: "Şeffaf".to_string(),
        }
    }

    #[test]
    fn known_product_types_map_to_events() {
        let event = shipment_event(row("Normal")).unwrap();
        assert_eq!(event.urun_tipi, ProductType::Normal);
        assert_eq!(event.adet, 3);

        let cut = shipment_event(row("Kesilmiş")).unwrap();
        assert_eq!(cut.urun_tipi, ProductType::Cut);
    }

    #[test]
    fn unknown_product_type_is_skipped_not_fatal() {
        assert!(shipment_event(row("Bobin")).is_none());
        assert!(shipment_event(row("")).is_none());
    }
}
