//! Stock snapshot scenario tests
//!
//! Replays realistic ledger histories through the aggregator and checks the
//! derived snapshot: batch totals, cross-ledger movement, negative variants
//! and conservation of piece counts.

use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{
    compute_stock, roll_area_m2, ProductType, ProductionEvent, ShipmentEvent, StockVariant,
    VariantKey,
};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn production(en: &str, metre: &str, adet: i64, renk: &str) -> ProductionEvent {
    ProductionEvent {
        kalinlik_mm: dec("0.05"),
        en_cm: dec(en),
        metre: dec(metre),
        metrekare: roll_area_m2(dec(en), dec(metre)),
        adet,
        masura_tipi: "Masura 100".to_string(),
        renk_kategori: if renk == "Şeffaf" { "Şeffaf" } else { "Renkli" }.to_string(),
        renk: renk.to_string(),
    }
}

fn shipment(en: &str, uzunluk: &str, adet: i64, renk: &str) -> ShipmentEvent {
    ShipmentEvent {
        urun_tipi: ProductType::Normal,
        kalinlik_mm: dec("0.05"),
        en_cm: dec(en),
        uzunluk: dec(uzunluk),
        metrekare: roll_area_m2(dec(en), dec(uzunluk)),
        adet,
        renk_kategori: if renk == "Şeffaf" { "Şeffaf" } else { "Renkli" }.to_string(),
        renk: renk.to_string(),
    }
}

fn find<'a>(stock: &'a [StockVariant], key: &VariantKey) -> &'a StockVariant {
    stock
        .iter()
        .find(|v| &v.key == key)
        .expect("variant missing from snapshot")
}

fn key(en: &str, metre: &str, renk: &str) -> VariantKey {
    VariantKey {
        urun_tipi: ProductType::Normal,
        kalinlik_mm: dec("0.05"),
        en_cm: dec(en),
        length_or_height: dec(metre),
        renk_kategori: if renk == "Şeffaf" { "Şeffaf" } else { "Renkli" }.to_string(),
        renk: renk.to_string(),
    }
}

#[test]
fn fifty_roll_batch_totals() {
    // 0.05 mm x 100 cm x 200 m, 50 pieces: 200 m2 per roll, 10000 m2 total
    let stock = compute_stock(&[production("100", "200", 50, "Şeffaf")], &[], &[]);
    let variant = find(&stock, &key("100", "200", "Şeffaf"));
    assert_eq!(variant.toplam_adet, 50);
    assert_eq!(variant.toplam_metrekare, dec("10000"));
}

#[test]
fn repeated_runs_of_one_variant_accumulate() {
    let prods = vec![
        production("100", "200", 30, "Şeffaf"),
        production("100", "200", 20, "Şeffaf"),
    ];
    let stock = compute_stock(&prods, &[], &[]);
    assert_eq!(stock.len(), 1);
    assert_eq!(stock[0].toplam_adet, 50);
}

#[test]
fn shipments_move_batch_area_not_unit_area() {
    let prod = production("100", "200", 50, "Şeffaf");
    let ship = shipment("100", "200", 20, "Şeffaf");

    let stock = compute_stock(&[prod], &[], &[ship]);
    let variant = find(&stock, &key("100", "200", "Şeffaf"));
    assert_eq!(variant.toplam_adet, 30);
    // 30 remaining rolls x 200 m2
    assert_eq!(variant.toplam_metrekare, dec("6000"));
}

#[test]
fn overshipment_is_reported_not_clamped() {
    let prod = production("100", "200", 10, "Şeffaf");
    let ship = shipment("100", "200", 15, "Şeffaf");

    let stock = compute_stock(&[prod], &[], &[ship]);
    let variant = find(&stock, &key("100", "200", "Şeffaf"));
    assert_eq!(variant.toplam_adet, -5);
    assert_eq!(variant.toplam_metrekare, dec("-1000"));
}

#[test]
fn colour_and_dimension_variants_stay_separate() {
    let prods = vec![
        production("100", "200", 10, "Şeffaf"),
        production("100", "200", 10, "Mavi"),
        production("120", "200", 10, "Şeffaf"),
        production("100", "150", 10, "Şeffaf"),
    ];
    let stock = compute_stock(&prods, &[], &[]);
    assert_eq!(stock.len(), 4);
    for variant in &stock {
        assert_eq!(variant.toplam_adet, 10);
    }
}

#[test]
fn empty_ledgers_give_empty_snapshot() {
    let stock = compute_stock(&[], &[], &[]);
    assert!(stock.is_empty());
}

proptest! {
    /// Piece counts are conserved per variant: whatever enters minus
    /// whatever leaves is what remains
    #[test]
    fn per_variant_count_conservation(
        runs in prop::collection::vec((1i64..=100, 0usize..3), 1..8),
        shipped in prop::collection::vec((1i64..=100, 0usize..3), 0..8),
    ) {
        let colours = ["Şeffaf", "Mavi", "Kırmızı"];
        let prods: Vec<ProductionEvent> = runs
            .iter()
            .map(|(adet, c)| production("100", "200", *adet, colours[*c]))
            .collect();
        let ships: Vec<ShipmentEvent> = shipped
            .iter()
            .map(|(adet, c)| shipment("100", "200", *adet, colours[*c]))
            .collect();

        let stock = compute_stock(&prods, &[], &ships);

        for colour in colours {
            let produced: i64 = runs
                .iter()
                .filter(|(_, c)| colours[*c] == colour)
                .map(|(adet, _)| adet)
                .sum();
            let sent: i64 = shipped
                .iter()
                .filter(|(_, c)| colours[*c] == colour)
                .map(|(adet, _)| adet)
                .sum();

            let expected = produced - sent;
            let variant = stock
                .iter()
                .find(|v| v.key == key("100", "200", colour));
            match variant {
                Some(v) => prop_assert_eq!(v.toplam_adet, expected),
                // variant never touched by either ledger
                None => prop_assert_eq!(expected, 0),
            }
        }
    }

    /// The snapshot is a pure function of the ledgers: recomputing never
    /// changes it, and event order within a ledger does not matter
    #[test]
    fn snapshot_is_order_independent(
        runs in prop::collection::vec((1i64..=100, 0usize..3), 1..8),
    ) {
        let colours = ["Şeffaf", "Mavi", "Kırmızı"];
        let prods: Vec<ProductionEvent> = runs
            .iter()
            .map(|(adet, c)| production("100", "200", *adet, colours[*c]))
            .collect();
        let mut reversed = prods.clone();
        reversed.reverse();

        let sort = |mut v: Vec<StockVariant>| {
            v.sort_by(|a, b| a.key.renk.cmp(&b.key.renk));
            v
        };
        prop_assert_eq!(
            sort(compute_stock(&prods, &[], &[])),
            sort(compute_stock(&reversed, &[], &[]))
        );
    }
}
