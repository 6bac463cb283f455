//! Purchase date scoring.

use chrono::Datelike;

use crate::models::{ScoreEntry, ScoringRule, ValidatedReceipt};

/// Points awarded when the day of the month is odd.
pub const ODD_DAY_POINTS: u64 = 6;

/// Awards 6 points if the day in the purchase date is odd.
pub fn score_purchase_day(receipt: &ValidatedReceipt) -> ScoreEntry {
    if receipt.purchase_date().day() % 2 == 1 {
        ScoreEntry::awarded(
            ScoringRule::OddPurchaseDay,
            ODD_DAY_POINTS,
            format!("date of {} is odd", receipt.receipt().purchase_date),
        )
    } else {
        ScoreEntry::none(ScoringRule::OddPurchaseDay)
    }
}
