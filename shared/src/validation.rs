//! Validation of stock readings against the catalog

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Catalog, Reading};

/// Why a candidate reading was refused
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReadingViolation {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Item {item} is not listed under category {category}")]
    UnknownItem { category: String, item: String },

    #[error("Unknown cafe outlet: {0}")]
    UnknownOutlet(String),

    #[error("Quantity must not be negative, got {0}")]
    NegativeQuantity(Decimal),
}

impl ReadingViolation {
    /// Reading field the violation refers to
    pub fn field(&self) -> &'static str {
        match self {
            ReadingViolation::UnknownCategory(_) => "category",
            ReadingViolation::UnknownItem { .. } => "item_name",
            ReadingViolation::UnknownOutlet(_) => "cafe_outlet",
            ReadingViolation::NegativeQuantity(_) => "quantity",
        }
    }
}

/// Validate that a stock quantity is not negative
pub fn validate_quantity(quantity: Decimal) -> Result<(), ReadingViolation> {
    if quantity < Decimal::ZERO {
        return Err(ReadingViolation::NegativeQuantity(quantity));
    }
    Ok(())
}

/// Validate a reading against the catalog.
///
/// Checks run in order: category, item within category, outlet, quantity.
/// The first failing check is reported.
pub fn validate_reading(catalog: &Catalog, reading: &Reading) -> Result<(), ReadingViolation> {
    if !catalog.contains_category(&reading.category) {
        return Err(ReadingViolation::UnknownCategory(reading.category.clone()));
    }
    if !catalog.contains_item(&reading.category, &reading.item_name) {
        return Err(ReadingViolation::UnknownItem {
            category: reading.category.clone(),
            item: reading.item_name.clone(),
        });
    }
    if !catalog.contains_outlet(&reading.cafe_outlet) {
        return Err(ReadingViolation::UnknownOutlet(reading.cafe_outlet.clone()));
    }
    validate_quantity(reading.quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn reading(outlet: &str, category: &str, item: &str, quantity: &str) -> Reading {
        Reading::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            outlet,
            category,
            item,
            Decimal::from_str(quantity).unwrap(),
        )
    }

    // ========================================================================
    // Quantity Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(Decimal::ZERO).is_ok());
        assert!(validate_quantity(Decimal::from_str("0.1").unwrap()).is_ok());
        assert!(validate_quantity(Decimal::from(1_000_000)).is_ok());
        assert_eq!(
            validate_quantity(Decimal::from_str("-0.1").unwrap()),
            Err(ReadingViolation::NegativeQuantity(Decimal::from_str("-0.1").unwrap()))
        );
    }

    // ========================================================================
    // Catalog Validation Tests
    // ========================================================================

    #[test]
    fn test_valid_reading() {
        let catalog = Catalog::default();
        let r = reading("Downtown Cafe", "Milk", "Almond Milk", "5.0");
        assert!(validate_reading(&catalog, &r).is_ok());
    }

    #[test]
    fn test_unknown_category() {
        let catalog = Catalog::default();
        let r = reading("Downtown Cafe", "Pastries", "Croissant", "1");
        let err = validate_reading(&catalog, &r).unwrap_err();
        assert_eq!(err, ReadingViolation::UnknownCategory("Pastries".to_string()));
        assert_eq!(err.field(), "category");
    }

    #[test]
    fn test_item_from_other_category() {
        let catalog = Catalog::default();
        let r = reading("Downtown Cafe", "Milk", "Espresso", "1");
        let err = validate_reading(&catalog, &r).unwrap_err();
        assert_eq!(
            err,
            ReadingViolation::UnknownItem {
                category: "Milk".to_string(),
                item: "Espresso".to_string(),
            }
        );
        assert_eq!(err.field(), "item_name");
    }

    #[test]
    fn test_unknown_outlet() {
        let catalog = Catalog::default();
        let r = reading("Juhu Cafe", "Milk", "Almond Milk", "1");
        let err = validate_reading(&catalog, &r).unwrap_err();
        assert_eq!(err, ReadingViolation::UnknownOutlet("Juhu Cafe".to_string()));
        assert_eq!(err.field(), "cafe_outlet");
    }

    #[test]
    fn test_negative_quantity_reported_last() {
        let catalog = Catalog::default();
        let r = reading("Downtown Cafe", "Milk", "Almond Milk", "-1");
        assert_eq!(validate_reading(&catalog, &r).unwrap_err().field(), "quantity");

        // Bad category wins over bad quantity
        let r = reading("Downtown Cafe", "Pastries", "Croissant", "-1");
        assert_eq!(validate_reading(&catalog, &r).unwrap_err().field(), "category");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let catalog = Catalog::default();
        let r = reading("downtown cafe", "Milk", "Almond Milk", "1");
        assert!(validate_reading(&catalog, &r).is_err());
    }

    // ========================================================================
    // Property Tests
    // ========================================================================

    fn catalog_entry_strategy() -> impl Strategy<Value = (String, String, String)> {
        let catalog = Catalog::default();
        let mut entries = Vec::new();
        for category in catalog.categories() {
            for item in catalog.items_for(category).unwrap() {
                for outlet in catalog.outlets() {
                    entries.push((outlet.clone(), category.to_string(), item.clone()));
                }
            }
        }
        prop::sample::select(entries)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Every catalog combination with a non-negative quantity is accepted
        #[test]
        fn prop_catalog_combinations_accepted(
            (outlet, category, item) in catalog_entry_strategy(),
            units in 0i64..=1_000_000i64,
        ) {
            let catalog = Catalog::default();
            let r = Reading::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                outlet,
                category,
                item,
                Decimal::new(units, 1),
            );
            prop_assert!(validate_reading(&catalog, &r).is_ok());
        }

        /// Any negative quantity is refused
        #[test]
        fn prop_negative_quantity_rejected(
            (outlet, category, item) in catalog_entry_strategy(),
            units in 1i64..=1_000_000i64,
        ) {
            let catalog = Catalog::default();
            let r = Reading::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                outlet,
                category,
                item,
                Decimal::new(-units, 2),
            );
            prop_assert_eq!(
                validate_reading(&catalog, &r),
                Err(ReadingViolation::NegativeQuantity(Decimal::new(-units, 2)))
            );
        }
    }
}
