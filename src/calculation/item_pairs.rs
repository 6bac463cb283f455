//! Item count scoring.

use crate::models::{ScoreEntry, ScoringRule, ValidatedReceipt};

/// Points awarded for every two items on a receipt.
pub const POINTS_PER_ITEM_PAIR: u64 = 5;

/// Awards 5 points for every complete pair of items.
///
/// An odd leftover item earns nothing. The entry is always reported, including
/// for receipts with fewer than two items.
pub fn score_item_pairs(receipt: &ValidatedReceipt) -> ScoreEntry {
    let count = receipt.items().len() as u64;
    let pairs = count / 2;
    let points = pairs * POINTS_PER_ITEM_PAIR;

    ScoreEntry::awarded(
        ScoringRule::ItemPairs,
        points,
        format!(
            "{} items ({} pairs @ {} points per pair)",
            count, pairs, POINTS_PER_ITEM_PAIR
        ),
    )
}
