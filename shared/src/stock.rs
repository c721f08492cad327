//! Stock aggregation
//!
//! The stock snapshot is never stored. Every query replays the full set of
//! production, cutting and shipment events and folds them into per-variant
//! totals. A cut record acts on two variants at once: it supplies its child
//! (cut) variant and consumes whole units of its parent (roll) variant.
//!
//! Record-level `metrekare` is always the area of ONE unit; batch totals are
//! unit area times piece count, so a 50-piece run of 2 m2 rolls adds 100 m2.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::conversion::cut_piece_area_m2;
use crate::types::ProductType;

/// Identity of a stock-keeping variant.
///
/// `length_or_height` is the roll length in metres for Normal goods and the
/// piece height in centimetres for Cut goods; the product type disambiguates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VariantKey {
    pub urun_tipi: ProductType,
    pub kalinlik_mm: Decimal,
    pub en_cm: Decimal,
    pub length_or_height: Decimal,
    pub renk_kategori: String,
    pub renk: String,
}

/// Computed on-hand figures for one variant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockVariant {
    #[serde(flatten)]
    pub key: VariantKey,
    pub toplam_adet: i64,
    pub toplam_metrekare: Decimal,
}

/// A finished-roll production event: supplies its own variant.
#[derive(Debug, Clone)]
pub struct ProductionEvent {
    pub kalinlik_mm: Decimal,
    pub en_cm: Decimal,
    pub metre: Decimal,
    /// Area of one roll in m2
    pub metrekare: Decimal,
    pub adet: i64,
    pub masura_tipi: String,
    pub renk_kategori: String,
    pub renk: String,
}

/// A cutting event: supplies the child variant, consumes the parent variant.
#[derive(Debug, Clone)]
pub struct CutEvent {
    pub ana_kalinlik: Decimal,
    pub ana_en: Decimal,
    pub ana_metre: Decimal,
    /// Area of one parent roll in m2
    pub ana_metrekare: Decimal,
    pub ana_renk_kategori: String,
    pub ana_renk: String,
    pub kesim_kalinlik: Decimal,
    pub kesim_en: Decimal,
    pub kesim_boy: Decimal,
    pub kesim_renk_kategori: String,
    pub kesim_renk: String,
    pub kesim_adet: i64,
    pub kullanilan_ana_adet: i64,
}

/// An outbound shipment event: consumes the variant it names.
#[derive(Debug, Clone)]
pub struct ShipmentEvent {
    pub urun_tipi: ProductType,
    pub kalinlik_mm: Decimal,
    pub en_cm: Decimal,
    pub uzunluk: Decimal,
    /// Area of one shipped unit in m2
    pub metrekare: Decimal,
    pub adet: i64,
    pub renk_kategori: String,
    pub renk: String,
}

impl CutEvent {
    fn parent_key(&self) -> VariantKey {
        VariantKey {
            urun_tipi: ProductType::Normal,
            kalinlik_mm: self.ana_kalinlik,
            en_cm: self.ana_en,
            length_or_height: self.ana_metre,
            renk_kategori: self.ana_renk_kategori.clone(),
            renk: self.ana_renk.clone(),
        }
    }

    fn child_key(&self) -> VariantKey {
        VariantKey {
            urun_tipi: ProductType::Cut,
            kalinlik_mm: self.kesim_kalinlik,
            en_cm: self.kesim_en,
            length_or_height: self.kesim_boy,
            renk_kategori: self.kesim_renk_kategori.clone(),
            renk: self.kesim_renk.clone(),
        }
    }
}

#[derive(Default)]
struct Totals {
    adet: i64,
    metrekare: Decimal,
}

/// Fold all ledger events into the current stock snapshot.
///
/// Pure and idempotent: two calls over the same inputs yield the same
/// snapshot. Variants whose totals went to zero or negative are kept in the
/// output; hiding them would hide over-consumption and data-entry errors.
/// No ordering between variants is guaranteed.
pub fn compute_stock(
    productions: &[ProductionEvent],
    cuts: &[CutEvent],
    shipments: &[ShipmentEvent],
) -> Vec<StockVariant> {
    let mut totals: HashMap<VariantKey, Totals> = HashMap::new();

    for prod in productions {
        let key = VariantKey {
            urun_tipi: ProductType::Normal,
            kalinlik_mm: prod.kalinlik_mm,
            en_cm: prod.en_cm,
            length_or_height: prod.metre,
            renk_kategori: prod.renk_kategori.clone(),
            renk: prod.renk.clone(),
        };
        let entry = totals.entry(key).or_default();
        entry.adet += prod.adet;
        entry.metrekare += prod.metrekare * Decimal::from(prod.adet);
    }

    for cut in cuts {
        // supply side: the cut pieces themselves
        let child_area = cut_piece_area_m2(cut.kesim_en, cut.kesim_boy);
        let child = totals.entry(cut.child_key()).or_default();
        child.adet += cut.kesim_adet;
        child.metrekare += child_area * Decimal::from(cut.kesim_adet);

        // consumption side: whole parent rolls withdrawn from roll stock
        let parent = totals.entry(cut.parent_key()).or_default();
        parent.adet -= cut.kullanilan_ana_adet;
        parent.metrekare -= cut.ana_metrekare * Decimal::from(cut.kullanilan_ana_adet);
    }

    for ship in shipments {
        let key = VariantKey {
            urun_tipi: ship.urun_tipi,
            kalinlik_mm: ship.kalinlik_mm,
            en_cm: ship.en_cm,
            length_or_height: ship.uzunluk,
            renk_kategori: ship.renk_kategori.clone(),
            renk: ship.renk.clone(),
        };
        let entry = totals.entry(key).or_default();
        entry.adet -= ship.adet;
        entry.metrekare -= ship.metrekare * Decimal::from(ship.adet);
    }

    totals
        .into_iter()
        .map(|(key, t)| StockVariant {
            key,
            toplam_adet: t.adet,
            toplam_metrekare: t.metrekare,
        })
        .collect()
}
