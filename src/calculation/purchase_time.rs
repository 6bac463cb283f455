//! Purchase time scoring.

use chrono::NaiveTime;

use crate::models::{ScoreEntry, ScoringRule, ValidatedReceipt};

/// Points awarded for an afternoon purchase.
pub const AFTERNOON_POINTS: u64 = 10;

const WINDOW_START_HOUR: u32 = 14;
const WINDOW_END_HOUR: u32 = 16;

/// Returns the exclusive start of the afternoon window (14:00).
pub fn afternoon_window_start() -> NaiveTime {
    on_the_hour(WINDOW_START_HOUR)
}

/// Returns the exclusive end of the afternoon window (16:00).
pub fn afternoon_window_end() -> NaiveTime {
    on_the_hour(WINDOW_END_HOUR)
}

fn on_the_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Awards 10 points if the purchase time is after 14:00 and before 16:00.
///
/// Both boundaries are excluded: a purchase at exactly 14:00 or 16:00 earns
/// nothing.
///
/// # Examples
///
/// ```
/// use receipt_processor::calculation::is_afternoon_purchase;
/// use chrono::NaiveTime;
///
/// assert!(is_afternoon_purchase(NaiveTime::from_hms_opt(14, 1, 0).unwrap()));
/// assert!(!is_afternoon_purchase(NaiveTime::from_hms_opt(16, 0, 0).unwrap()));
/// ```
pub fn is_afternoon_purchase(time: NaiveTime) -> bool {
    time > afternoon_window_start() && time < afternoon_window_end()
}

/// Scores the purchase time.
pub fn score_purchase_time(receipt: &ValidatedReceipt) -> ScoreEntry {
    if is_afternoon_purchase(receipt.purchase_time()) {
        ScoreEntry::awarded(
            ScoringRule::AfternoonPurchase,
            AFTERNOON_POINTS,
            format!(
                "time of {} is after 2:00pm and before 4:00pm",
                receipt.receipt().purchase_time
            ),
        )
    } else {
        ScoreEntry::none(ScoringRule::AfternoonPurchase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::test_support::{target_receipt, validated};

    fn points_at(time: &str) -> u64 {
        let mut receipt = target_receipt();
        receipt.purchase_time = time.to_string();
        score_purchase_time(&validated(receipt)).points
    }

    #[test]
    fn test_window_bounds_are_on_the_hour() {
        assert_eq!(afternoon_window_start(), NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(afternoon_window_end(), NaiveTime::from_hms_opt(16, 0, 0).unwrap());
    }

    #[test]
    fn test_window_boundaries_are_excluded() {
        assert_eq!(points_at("14:00"), 0);
        assert_eq!(points_at("16:00"), 0);
    }

    #[test]
    fn test_inside_window_earns_ten() {
        assert_eq!(points_at("14:01"), 10);
        assert_eq!(points_at("15:00"), 10);
        assert_eq!(points_at("15:59"), 10);
    }

    #[test]
    fn test_outside_window_earns_nothing() {
        assert_eq!(points_at("13:59"), 0);
        assert_eq!(points_at("16:01"), 0);
        assert_eq!(points_at("02:30"), 0);
        assert_eq!(points_at("00:00"), 0);
    }

    #[test]
    fn test_explanation_uses_submitted_time() {
        let mut receipt = target_receipt();
        receipt.purchase_time = "14:33".to_string();
        let entry = score_purchase_time(&validated(receipt));
        assert_eq!(
            entry.line(),
            "10 points - time of 14:33 is after 2:00pm and before 4:00pm"
        );
    }
}
