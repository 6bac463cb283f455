//! Receipt fixtures shared by the rule tests.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Item, Receipt, ValidatedReceipt, to_cents};
use crate::validation::{parse_purchase_date, parse_purchase_time};

pub(crate) fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// The Target receipt used throughout the scoring tests (28 points).
pub(crate) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            Item::new("Mountain Dew 12PK", dec("6.49")),
            Item::new("Emils Cheese Pizza", dec("12.25")),
            Item::new("Knorr Creamy Chicken", dec("1.26")),
            Item::new("Doritos Nacho Cheese", dec("3.35")),
            Item::new("   Klarbrunn 12-PK 12 FL OZ  ", dec("12.00")),
        ],
        total: dec("35.35"),
    }
}

/// The M&M Corner Market receipt (109 points).
pub(crate) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            Item::new("Gatorade", dec("2.25")),
            Item::new("Gatorade", dec("2.25")),
            Item::new("Gatorade", dec("2.25")),
            Item::new("Gatorade", dec("2.25")),
        ],
        total: dec("9.00"),
    }
}

/// Wraps a receipt without checking its total, so single rules can be exercised
/// with totals that do not match the items.
pub(crate) fn validated(receipt: Receipt) -> ValidatedReceipt {
    let date = parse_purchase_date(&receipt.purchase_date).unwrap();
    let time = parse_purchase_time(&receipt.purchase_time).unwrap();
    let total_cents = to_cents(receipt.total).unwrap();
    ValidatedReceipt::new(receipt, date, time, total_cents)
}
