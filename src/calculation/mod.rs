//! Point calculation for validated receipts.
//!
//! This module contains the seven scoring rules (retailer name, round total,
//! quarter multiple, item pairs, item descriptions, odd purchase day and
//! afternoon purchase time), the text normalization they share with
//! validation, and the engine that combines them into a total and a
//! breakdown.

mod engine;
mod item_description;
mod item_pairs;
mod normalize;
mod purchase_day;
mod purchase_time;
mod retailer_name;
mod total_amount;

#[cfg(test)]
pub(crate) mod test_support;

pub use engine::{calculate_breakdown, calculate_points, score_receipt};
pub use item_description::{
    DESCRIPTION_LENGTH_MULTIPLE, description_price_multiplier, score_item,
    score_item_descriptions,
};
pub use item_pairs::{POINTS_PER_ITEM_PAIR, score_item_pairs};
pub use normalize::{strip_non_alphanumeric, trimmed_with_length};
pub use purchase_day::{ODD_DAY_POINTS, score_purchase_day};
pub use purchase_time::{
    AFTERNOON_POINTS, afternoon_window_end, afternoon_window_start, is_afternoon_purchase,
    score_purchase_time,
};
pub use retailer_name::score_retailer_name;
pub use total_amount::{
    QUARTER_MULTIPLE_POINTS, ROUND_TOTAL_POINTS, score_quarter_multiple, score_round_total,
};
