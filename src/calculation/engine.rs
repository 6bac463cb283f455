//! Rule engine aggregation.
//!
//! Runs the seven scoring rules in order and collects their entries into a
//! [`ScoreCard`]. The points total and the breakdown are both derived from the
//! same card, so they always agree. Nothing is cached; every call recomputes.

use tracing::debug;

use crate::models::{ScoreCard, ValidatedReceipt};

use super::item_description::score_item_descriptions;
use super::item_pairs::score_item_pairs;
use super::purchase_day::score_purchase_day;
use super::purchase_time::score_purchase_time;
use super::retailer_name::score_retailer_name;
use super::total_amount::{score_quarter_multiple, score_round_total};

/// Evaluates every scoring rule for a receipt.
///
/// # Examples
///
/// ```
/// use receipt_processor::calculation::score_receipt;
/// use receipt_processor::models::{Item, Receipt, ScoringRule};
/// use receipt_processor::validation::accept;
/// use rust_decimal::Decimal;
///
/// let receipt = accept(Receipt {
///     retailer: "M&M Corner Market".to_string(),
///     purchase_date: "2022-03-20".to_string(),
///     purchase_time: "14:33".to_string(),
///     items: vec![Item::new("Gatorade", Decimal::new(225, 2)); 4],
///     total: Decimal::new(900, 2),
/// })
/// .unwrap();
///
/// let card = score_receipt(&receipt);
/// assert_eq!(card.total(), 109);
/// assert_eq!(card.points_for(ScoringRule::RoundTotal), 50);
/// ```
pub fn score_receipt(receipt: &ValidatedReceipt) -> ScoreCard {
    let mut entries = vec![
        score_retailer_name(receipt),
        score_round_total(receipt),
        score_quarter_multiple(receipt),
        score_item_pairs(receipt),
    ];
    entries.extend(score_item_descriptions(receipt));
    entries.push(score_purchase_day(receipt));
    entries.push(score_purchase_time(receipt));

    let card = ScoreCard::new(entries);
    debug!(
        retailer = %receipt.retailer(),
        items = receipt.items().len(),
        points = card.total(),
        "Scored receipt"
    );
    card
}

/// Returns the total points for a receipt.
pub fn calculate_points(receipt: &ValidatedReceipt) -> u64 {
    score_receipt(receipt).total()
}

/// Returns the breakdown lines for a receipt, ending with the total line.
pub fn calculate_breakdown(receipt: &ValidatedReceipt) -> Vec<String> {
    score_receipt(receipt).breakdown()
}
