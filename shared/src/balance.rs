//! Raw material balance derivation
//!
//! The same replay-the-events pattern as stock aggregation, applied to raw
//! materials: purchased quantities per category, minus what the consumption
//! ledger says was metabolized (petkim, estol, talk), minus one spool core
//! per production run that names the matching masura size.
//!
//! Purchases carry free-text material names; categorisation prefers the
//! explicit category chosen at entry time and falls back to keyword matching
//! for legacy rows. A name matches a category only when it contains every
//! keyword of that category, case-insensitively.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::stock::ProductionEvent;

/// Fixed raw material categories tracked by the plant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RawMaterialCategory {
    Petkim,
    Estol,
    Talk,
    Masura100,
    Masura120,
    Masura150,
    Masura200,
}

pub const ALL_CATEGORIES: [RawMaterialCategory; 7] = [
    RawMaterialCategory::Petkim,
    RawMaterialCategory::Estol,
    RawMaterialCategory::Talk,
    RawMaterialCategory::Masura100,
    RawMaterialCategory::Masura120,
    RawMaterialCategory::Masura150,
    RawMaterialCategory::Masura200,
];

impl RawMaterialCategory {
    /// Keywords that must ALL appear in a material name for it to match
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            RawMaterialCategory::Petkim => &["petkim"],
            RawMaterialCategory::Estol => &["estol"],
            RawMaterialCategory::Talk => &["talk"],
            RawMaterialCategory::Masura100 => &["masura", "100"],
            RawMaterialCategory::Masura120 => &["masura", "120"],
            RawMaterialCategory::Masura150 => &["masura", "150"],
            RawMaterialCategory::Masura200 => &["masura", "200"],
        }
    }

    /// Case-insensitive substring match against a free-text material name
    pub fn matches_name(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.keywords().iter().all(|kw| lowered.contains(kw))
    }

    /// Masura size token, for matching against a production run's core type
    fn masura_token(&self) -> Option<&'static str> {
        match self {
            RawMaterialCategory::Masura100 => Some("100"),
            RawMaterialCategory::Masura120 => Some("120"),
            RawMaterialCategory::Masura150 => Some("150"),
            RawMaterialCategory::Masura200 => Some("200"),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RawMaterialCategory::Petkim => "petkim",
            RawMaterialCategory::Estol => "estol",
            RawMaterialCategory::Talk => "talk",
            RawMaterialCategory::Masura100 => "masura_100",
            RawMaterialCategory::Masura120 => "masura_120",
            RawMaterialCategory::Masura150 => "masura_150",
            RawMaterialCategory::Masura200 => "masura_200",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        ALL_CATEGORIES.iter().copied().find(|c| c.as_str() == s)
    }
}

/// A raw material purchase, projected to the fields the balance needs
#[derive(Debug, Clone)]
pub struct PurchaseEvent {
    pub malzeme_adi: String,
    pub kategori: Option<RawMaterialCategory>,
    pub miktar: Decimal,
}

impl PurchaseEvent {
    fn belongs_to(&self, category: RawMaterialCategory) -> bool {
        match self.kategori {
            Some(explicit) => explicit == category,
            None => category.matches_name(&self.malzeme_adi),
        }
    }
}

/// Consumption ledger figures relevant to the balance
#[derive(Debug, Clone, Copy)]
pub struct ConsumptionEvent {
    pub petkim_kg: Decimal,
    pub estol_kg: Decimal,
    pub talk_kg: Decimal,
}

/// Cost figures fixed at purchase entry time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseTotals {
    /// `miktar * birim_fiyat`, in the purchase currency
    pub toplam_tutar: Decimal,
    /// `toplam_tutar * kur`
    pub tl_tutar: Decimal,
}

/// Compute the stored cost columns for a purchase.
///
/// `kur` is the exchange rate in force when the record is written (1 for
/// TL); the result is persisted and never recomputed, so later rate changes
/// leave historical costs alone.
pub fn purchase_totals(miktar: Decimal, birim_fiyat: Decimal, kur: Decimal) -> PurchaseTotals {
    let toplam_tutar = miktar * birim_fiyat;
    PurchaseTotals {
        toplam_tutar,
        tl_tutar: toplam_tutar * kur,
    }
}

/// Running balance for one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialBalance {
    pub kategori: RawMaterialCategory,
    pub alinan: Decimal,
    pub tuketilen: Decimal,
    pub kalan: Decimal,
}

/// Derive per-category balances from the three ledgers.
pub fn material_balances(
    purchases: &[PurchaseEvent],
    consumptions: &[ConsumptionEvent],
    productions: &[ProductionEvent],
) -> Vec<MaterialBalance> {
    ALL_CATEGORIES
        .iter()
        .map(|&category| {
            let alinan: Decimal = purchases
                .iter()
                .filter(|p| p.belongs_to(category))
                .map(|p| p.miktar)
                .sum();

            let tuketilen: Decimal = match category {
                RawMaterialCategory::Petkim => {
                    consumptions.iter().map(|c| c.petkim_kg).sum()
                }
                RawMaterialCategory::Estol => {
                    consumptions.iter().map(|c| c.estol_kg).sum()
                }
                RawMaterialCategory::Talk => {
                    consumptions.iter().map(|c| c.talk_kg).sum()
                }
                masura => {
                    // one core per production run naming this masura size
                    let token = masura.masura_token().unwrap_or_default();
                    let count = productions
                        .iter()
                        .filter(|p| p.masura_tipi.contains(token))
                        .count();
                    Decimal::from(count)
                }
            };

            MaterialBalance {
                kategori: category,
                alinan,
                tuketilen,
                kalan: alinan - tuketilen,
            }
        })
        .collect()
}
