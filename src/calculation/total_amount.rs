//! Scoring rules based on the receipt total.
//!
//! Both rules work on the total rounded to whole cents, so a total such as
//! `10.00` earns both the round-dollar and the quarter-multiple bonus.

use crate::models::{ScoreEntry, ScoringRule, ValidatedReceipt};

/// Points for a total with no cents.
pub const ROUND_TOTAL_POINTS: u64 = 50;

/// Points for a total that is a multiple of 0.25.
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

const CENTS_PER_DOLLAR: i128 = 100;
const CENTS_PER_QUARTER: i128 = 25;

/// Awards 50 points if the total is a round dollar amount.
pub fn score_round_total(receipt: &ValidatedReceipt) -> ScoreEntry {
    if receipt.total_cents() % CENTS_PER_DOLLAR == 0 {
        ScoreEntry::awarded(
            ScoringRule::RoundTotal,
            ROUND_TOTAL_POINTS,
            "total is a round dollar amount with no cents",
        )
    } else {
        ScoreEntry::none(ScoringRule::RoundTotal)
    }
}

/// Awards 25 points if the total is a multiple of 0.25.
pub fn score_quarter_multiple(receipt: &ValidatedReceipt) -> ScoreEntry {
    if receipt.total_cents() % CENTS_PER_QUARTER == 0 {
        ScoreEntry::awarded(
            ScoringRule::QuarterMultiple,
            QUARTER_MULTIPLE_POINTS,
            "total is a multiple of 0.25",
        )
    } else {
        ScoreEntry::none(ScoringRule::QuarterMultiple)
    }
}
