//! Retailer name scoring.
//!
//! One point is awarded for every ASCII letter or digit in the retailer name.

use crate::models::{ScoreEntry, ScoringRule, ValidatedReceipt};

use super::normalize::strip_non_alphanumeric;

/// Scores the retailer name.
///
/// The entry is always reported, even though validation guarantees at least
/// one alphanumeric character.
///
/// # Examples
///
/// ```
/// use receipt_processor::calculation::score_retailer_name;
/// use receipt_processor::models::{Item, Receipt};
/// use receipt_processor::validation::accept;
/// use rust_decimal::Decimal;
///
/// let receipt = accept(Receipt {
///     retailer: "M&M Corner Market".to_string(),
///     purchase_date: "2022-03-20".to_string(),
///     purchase_time: "14:33".to_string(),
///     items: vec![Item::new("Gatorade", Decimal::new(225, 2))],
///     total: Decimal::new(225, 2),
/// })
/// .unwrap();
///
/// let entry = score_retailer_name(&receipt);
/// assert_eq!(entry.points, 14);
/// assert_eq!(entry.explanation, "retailer: \"MMCornerMarket\" has 14 alphanumeric characters");
/// ```
pub fn score_retailer_name(receipt: &ValidatedReceipt) -> ScoreEntry {
    let stripped = strip_non_alphanumeric(receipt.retailer());
    let count = stripped.chars().count() as u64;

    ScoreEntry::awarded(
        ScoringRule::RetailerName,
        count,
        format!(
            "retailer: \"{}\" has {} alphanumeric characters",
            stripped, count
        ),
    )
}
