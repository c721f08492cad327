//! Unit conversion for roll and cut goods
//!
//! Roll goods are described as width (cm) x length (m); cut pieces as
//! width (cm) x height (cm). Everything downstream (stock aggregation,
//! cutting requirements) works in square metres, so these helpers are the
//! single place where linear dimensions become areas.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from the cutting-requirement calculation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("{field} must be greater than zero")]
    NonPositiveInput { field: &'static str },
}

const CM_PER_M: Decimal = Decimal::ONE_HUNDRED;

/// Area of one roll in square metres: `(width_cm / 100) * length_m`
pub fn roll_area_m2(width_cm: Decimal, length_m: Decimal) -> Decimal {
    (width_cm / CM_PER_M) * length_m
}

/// Area of one cut piece in square metres: `(width_cm / 100) * (height_cm / 100)`
pub fn cut_piece_area_m2(width_cm: Decimal, height_cm: Decimal) -> Decimal {
    (width_cm / CM_PER_M) * (height_cm / CM_PER_M)
}

/// Number of whole parent sheets consumed by a cutting order.
///
/// Partial sheets cannot be split, so any remainder forces one additional
/// full unit: `ceil(child_area * child_count / parent_area)`. When the total
/// child area divides the parent area exactly, the quotient is returned
/// as-is. The result is at least 1 for valid inputs.
pub fn required_parent_units(
    parent_area_m2: Decimal,
    child_area_m2: Decimal,
    child_count: u32,
) -> Result<u32, ConversionError> {
    if parent_area_m2 <= Decimal::ZERO {
        return Err(ConversionError::NonPositiveInput {
            field: "parent_area_m2",
        });
    }
    if child_area_m2 <= Decimal::ZERO {
        return Err(ConversionError::NonPositiveInput {
            field: "child_area_m2",
        });
    }
    if child_count == 0 {
        return Err(ConversionError::NonPositiveInput {
            field: "child_count",
        });
    }

    let total_child_area = child_area_m2 * Decimal::from(child_count);
    let units = (total_child_area / parent_area_m2).ceil();

    // ceil of a positive quotient always fits well inside u32 for plant-scale
    // inputs; a failure here means the dimensions were absurd, not a bug.
    units
        .to_u32()
        .filter(|&u| u > 0)
        .ok_or(ConversionError::NonPositiveInput {
            field: "child_count",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn roll_area_basic() {
        // 100cm x 200m is a 1m wide, 200m long roll -> 200 m2
        assert_eq!(roll_area_m2(dec("100"), dec("200")), dec("200"));
        // 100cm x 2m -> 2 m2
        assert_eq!(roll_area_m2(dec("100"), dec("2")), dec("2"));
        // 50cm x 100m -> 50 m2
        assert_eq!(roll_area_m2(dec("50"), dec("100")), dec("50"));
    }

    #[test]
    fn cut_piece_area_basic() {
        // 50cm x 100cm -> 0.5 m2
        assert_eq!(cut_piece_area_m2(dec("50"), dec("100")), dec("0.5"));
        // 100cm x 100cm -> 1 m2
        assert_eq!(cut_piece_area_m2(dec("100"), dec("100")), dec("1"));
    }

    #[test]
    fn required_units_rounds_up() {
        // parent 2.0 m2, child 0.5 m2, count 5 -> total 2.5 -> ceil(1.25) = 2
        assert_eq!(required_parent_units(dec("2.0"), dec("0.5"), 5), Ok(2));
    }

    #[test]
    fn required_units_exact_fit_is_not_rounded_up() {
        // total child area == parent area -> exactly 1, no phantom +1
        assert_eq!(required_parent_units(dec("2.0"), dec("0.5"), 4), Ok(1));
        assert_eq!(required_parent_units(dec("1"), dec("1"), 1), Ok(1));
    }

    #[test]
    fn required_units_small_order_still_consumes_one_sheet() {
        assert_eq!(required_parent_units(dec("10"), dec("0.01"), 1), Ok(1));
    }

    #[test]
    fn required_units_rejects_non_positive_inputs() {
        assert_eq!(
            required_parent_units(dec("0"), dec("0.5"), 5),
            Err(ConversionError::NonPositiveInput {
                field: "parent_area_m2"
            })
        );
        assert_eq!(
            required_parent_units(dec("2"), dec("-1"), 5),
            Err(ConversionError::NonPositiveInput {
                field: "child_area_m2"
            })
        );
        assert_eq!(
            required_parent_units(dec("2"), dec("0.5"), 0),
            Err(ConversionError::NonPositiveInput {
                field: "child_count"
            })
        );
    }

    proptest::proptest! {
        #[test]
        fn roll_area_matches_formula(w in 1u32..10_000, l in 1u32..10_000) {
            let w = Decimal::from(w);
            let l = Decimal::from(l);
            proptest::prop_assert_eq!(
                roll_area_m2(w, l),
                (w / Decimal::ONE_HUNDRED) * l
            );
        }

        #[test]
        fn roll_area_is_monotonic(w in 1u32..5_000, l in 1u32..5_000) {
            let w = Decimal::from(w);
            let l = Decimal::from(l);
            let base = roll_area_m2(w, l);
            proptest::prop_assert!(roll_area_m2(w + Decimal::ONE, l) > base);
            proptest::prop_assert!(roll_area_m2(w, l + Decimal::ONE) > base);
        }

        #[test]
        fn required_units_is_positive_and_sufficient(
            parent in 1u32..1_000,
            child in 1u32..1_000,
            count in 1u32..1_000,
        ) {
            // areas in hundredths of a square metre to exercise fractions
            let parent_area = Decimal::new(parent as i64, 2);
            let child_area = Decimal::new(child as i64, 2);
            let units = required_parent_units(parent_area, child_area, count).unwrap();
            proptest::prop_assert!(units >= 1);
            // the allocated parent area always covers the order
            let allocated = parent_area * Decimal::from(units);
            let needed = child_area * Decimal::from(count);
            proptest::prop_assert!(allocated >= needed);
            // and removing one sheet would under-provision
            if units > 1 {
                let short = parent_area * Decimal::from(units - 1);
                proptest::prop_assert!(short < needed);
            }
        }
    }
}
