//! Item description scoring.
//!
//! Items whose trimmed description length is a multiple of 3 earn points
//! based on their price. Each qualifying item produces its own entry so the
//! breakdown shows one line per item.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{Item, ScoreEntry, ScoringRule, ValidatedReceipt};

use super::normalize::trimmed_with_length;

/// The trimmed description length must be a multiple of this value.
pub const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;

/// Returns the multiplier applied to a qualifying item's price (0.2).
pub fn description_price_multiplier() -> Decimal {
    Decimal::new(2, 1)
}

/// Scores every item on the receipt, in item order.
///
/// Items that do not qualify produce an unreported zero-point entry.
pub fn score_item_descriptions(receipt: &ValidatedReceipt) -> Vec<ScoreEntry> {
    receipt.items().iter().map(score_item).collect()
}

/// Scores a single item.
///
/// The price is multiplied by 0.2 and rounded up to the nearest whole point.
/// The exact price is used, not the price rounded to cents. Negative results
/// are clamped to zero.
///
/// # Examples
///
/// ```
/// use receipt_processor::calculation::score_item;
/// use receipt_processor::models::Item;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entry = score_item(&Item::new("Emils Cheese Pizza", Decimal::from_str("12.25").unwrap()));
/// assert_eq!(entry.points, 3);
///
/// let entry = score_item(&Item::new("Pepsi", Decimal::from_str("12.25").unwrap()));
/// assert_eq!(entry.points, 0);
/// assert!(!entry.is_reported());
/// ```
pub fn score_item(item: &Item) -> ScoreEntry {
    let (trimmed, length) = trimmed_with_length(&item.short_description);

    if length % DESCRIPTION_LENGTH_MULTIPLE != 0 {
        return ScoreEntry::none(ScoringRule::ItemDescription);
    }

    let points = price_points(item.price);
    ScoreEntry::awarded(
        ScoringRule::ItemDescription,
        points,
        format!(
            "\"{}\" has {} characters and is a multiple of {}",
            trimmed, length, DESCRIPTION_LENGTH_MULTIPLE
        ),
    )
}

fn price_points(price: Decimal) -> u64 {
    let raw = (price * description_price_multiplier()).ceil();
    if raw <= Decimal::ZERO {
        0
    } else {
        raw.to_u64().unwrap_or(u64::MAX)
    }
}
