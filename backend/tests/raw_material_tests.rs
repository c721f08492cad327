//! Raw material balance tests
//!
//! Purchases are bucketed into fixed categories, by explicit choice or by
//! keyword matching on the free-text name, then netted against the
//! consumption ledger (chemicals) and the production ledger (spool cores).

use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{
    material_balances, purchase_totals, roll_area_m2, ConsumptionEvent, MaterialBalance,
    ProductionEvent, PurchaseEvent, RawMaterialCategory, ALL_CATEGORIES,
};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn purchase(name: &str, miktar: &str) -> PurchaseEvent {
    PurchaseEvent {
        malzeme_adi: name.to_string(),
        kategori: None,
        miktar: dec(miktar),
    }
}

fn production_run(masura: &str, adet: i64) -> ProductionEvent {
    ProductionEvent {
        kalinlik_mm: dec("0.05"),
        en_cm: dec("100"),
        metre: dec("200"),
        metrekare: roll_area_m2(dec("100"), dec("200")),
        adet,
        masura_tipi: masura.to_string(),
        renk_kategori: "Şeffaf".to_string(),
        renk: "Şeffaf".to_string(),
    }
}

fn balance_for(
    balances: &[MaterialBalance],
    category: RawMaterialCategory,
) -> &MaterialBalance {
    balances
        .iter()
        .find(|b| b.kategori == category)
        .expect("category missing from report")
}

#[test]
fn tl_purchase_costs_use_a_unit_rate() {
    // 100 kg at 10 TL/kg, rate 1: both stored totals are 1000
    let totals = purchase_totals(dec("100"), dec("10"), dec("1.0"));
    assert_eq!(totals.toplam_tutar, dec("1000"));
    assert_eq!(totals.tl_tutar, dec("1000"));
}

#[test]
fn stored_costs_keep_the_entry_time_rate() {
    // a USD purchase booked at 32.5; the clerk later changes the rate table
    let booked = purchase_totals(dec("100"), dec("10"), dec("32.5"));
    assert_eq!(booked.toplam_tutar, dec("1000"));
    assert_eq!(booked.tl_tutar, dec("32500"));

    // the stored record is never recomputed, so a new rate only affects
    // purchases entered after the change
    let rebooked = purchase_totals(dec("100"), dec("10"), dec("41.0"));
    assert_eq!(rebooked.tl_tutar, dec("41000"));
    assert_eq!(booked.tl_tutar, dec("32500"));
}

#[test]
fn report_covers_every_category_even_when_empty() {
    let balances = material_balances(&[], &[], &[]);
    assert_eq!(balances.len(), ALL_CATEGORIES.len());
    for balance in &balances {
        assert_eq!(balance.alinan, Decimal::ZERO);
        assert_eq!(balance.tuketilen, Decimal::ZERO);
        assert_eq!(balance.kalan, Decimal::ZERO);
    }
}

#[test]
fn chemical_purchases_net_against_consumption_ledger() {
    let purchases = vec![
        purchase("Petkim LDPE granül", "1000"),
        purchase("Estol 3742", "50"),
    ];
    let consumptions = vec![
        ConsumptionEvent {
            petkim_kg: dec("400"),
            estol_kg: dec("12"),
            talk_kg: dec("6"),
        },
        ConsumptionEvent {
            petkim_kg: dec("200"),
            estol_kg: dec("6"),
            talk_kg: dec("3"),
        },
    ];

    let balances = material_balances(&purchases, &consumptions, &[]);

    let petkim = balance_for(&balances, RawMaterialCategory::Petkim);
    assert_eq!(petkim.alinan, dec("1000"));
    assert_eq!(petkim.tuketilen, dec("600"));
    assert_eq!(petkim.kalan, dec("400"));

    let estol = balance_for(&balances, RawMaterialCategory::Estol);
    assert_eq!(estol.kalan, dec("32"));

    // talk was consumed but never purchased: balance goes negative
    let talk = balance_for(&balances, RawMaterialCategory::Talk);
    assert_eq!(talk.alinan, Decimal::ZERO);
    assert_eq!(talk.kalan, dec("-9"));
}

#[test]
fn masura_stock_is_consumed_by_production_runs() {
    let purchases = vec![purchase("Masura 100 karton", "500")];
    let runs = vec![
        production_run("Masura 100", 120),
        production_run("Masura 100", 30),
        production_run("Masura 150", 40),
    ];

    let balances = material_balances(&purchases, &[], &runs);

    // one core per production record naming the size
    let m100 = balance_for(&balances, RawMaterialCategory::Masura100);
    assert_eq!(m100.alinan, dec("500"));
    assert_eq!(m100.tuketilen, dec("2"));
    assert_eq!(m100.kalan, dec("498"));

    let m150 = balance_for(&balances, RawMaterialCategory::Masura150);
    assert_eq!(m150.tuketilen, dec("1"));
    assert_eq!(m150.kalan, dec("-1"));
}

#[test]
fn ambiguous_name_lands_in_exactly_one_bucket() {
    // "Masura 100" names both the keyword and a size token; it must count
    // once, in the 100 bucket, and nowhere else
    let balances = material_balances(&[purchase("Masura 100", "200")], &[], &[]);

    assert_eq!(
        balance_for(&balances, RawMaterialCategory::Masura100).alinan,
        dec("200")
    );
    for category in [
        RawMaterialCategory::Masura120,
        RawMaterialCategory::Masura150,
        RawMaterialCategory::Masura200,
    ] {
        assert_eq!(balance_for(&balances, category).alinan, Decimal::ZERO);
    }
}

#[test]
fn explicit_category_overrides_keyword_match() {
    // the name says petkim but the clerk picked talk
    let mut p = purchase("petkim karışım", "75");
    p.kategori = Some(RawMaterialCategory::Talk);

    let balances = material_balances(&[p], &[], &[]);
    assert_eq!(
        balance_for(&balances, RawMaterialCategory::Talk).alinan,
        dec("75")
    );
    assert_eq!(
        balance_for(&balances, RawMaterialCategory::Petkim).alinan,
        Decimal::ZERO
    );
}

#[test]
fn unmatched_names_are_excluded_from_every_bucket() {
    let balances = material_balances(&[purchase("selefon bant", "10")], &[], &[]);
    for balance in &balances {
        assert_eq!(balance.alinan, Decimal::ZERO);
    }
}

proptest! {
    /// kalan is always alinan - tuketilen, whatever the ledgers hold
    #[test]
    fn remaining_is_purchased_minus_consumed(
        purchased in 0u32..100_000,
        consumed_a in 0u32..50_000,
        consumed_b in 0u32..50_000,
    ) {
        let purchases = vec![purchase("Petkim LDPE", &purchased.to_string())];
        let consumptions = vec![
            ConsumptionEvent {
                petkim_kg: Decimal::from(consumed_a),
                estol_kg: Decimal::ZERO,
                talk_kg: Decimal::ZERO,
            },
            ConsumptionEvent {
                petkim_kg: Decimal::from(consumed_b),
                estol_kg: Decimal::ZERO,
                talk_kg: Decimal::ZERO,
            },
        ];

        let balances = material_balances(&purchases, &consumptions, &[]);
        let petkim = balance_for(&balances, RawMaterialCategory::Petkim);
        prop_assert_eq!(petkim.kalan, petkim.alinan - petkim.tuketilen);
        prop_assert_eq!(
            petkim.kalan,
            Decimal::from(purchased) - Decimal::from(consumed_a) - Decimal::from(consumed_b)
        );
    }
}
