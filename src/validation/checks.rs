//! Receipt validation checks.
//!
//! Every check runs on every receipt; a receipt is acceptable only when no
//! check reports an issue. Item checks report once per receipt, however many
//! items fail them.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::calculation::strip_non_alphanumeric;
use crate::error::{EngineError, EngineResult};
use crate::models::{Receipt, ValidatedReceipt, format_amount, to_cents};

use super::ValidationIssue;

/// Date format accepted for `purchaseDate`.
pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format accepted for `purchaseTime`.
pub const PURCHASE_TIME_FORMAT: &str = "%H:%M";

/// Validates a receipt and returns every problem found.
///
/// An empty result means the receipt is acceptable.
///
/// # Examples
///
/// ```
/// use receipt_processor::models::{Item, Receipt};
/// use receipt_processor::validation::{ValidationIssue, validate};
/// use rust_decimal::Decimal;
///
/// let receipt = Receipt {
///     retailer: "&&&".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     items: vec![Item::new("Pepsi", Decimal::new(125, 2))],
///     total: Decimal::new(125, 2),
/// };
///
/// assert_eq!(validate(&receipt), vec![ValidationIssue::EmptyRetailer]);
/// ```
pub fn validate(receipt: &Receipt) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if receipt.items.iter().any(|item| item.price.is_zero()) {
        issues.push(ValidationIssue::InvalidPrice);
    }

    if receipt
        .items
        .iter()
        .any(|item| item.short_description.is_empty())
    {
        issues.push(ValidationIssue::MissingDescription);
    }

    if let Some(issue) = check_total(receipt) {
        issues.push(issue);
    }

    if parse_purchase_date(&receipt.purchase_date).is_none() {
        issues.push(ValidationIssue::InvalidPurchaseDate);
    }

    if parse_purchase_time(&receipt.purchase_time).is_none() {
        issues.push(ValidationIssue::InvalidPurchaseTime);
    }

    if strip_non_alphanumeric(&receipt.retailer).is_empty() {
        issues.push(ValidationIssue::EmptyRetailer);
    }

    issues
}

/// Validates a receipt and, if it passes, promotes it to a [`ValidatedReceipt`].
///
/// # Returns
///
/// Returns the validated receipt, or `InvalidReceipt` carrying every issue found.
pub fn accept(receipt: Receipt) -> EngineResult<ValidatedReceipt> {
    let issues = validate(&receipt);

    match (
        issues.is_empty(),
        parse_purchase_date(&receipt.purchase_date),
        parse_purchase_time(&receipt.purchase_time),
        to_cents(receipt.total),
    ) {
        (true, Some(date), Some(time), Some(total_cents)) => {
            Ok(ValidatedReceipt::new(receipt, date, time, total_cents))
        }
        _ => Err(EngineError::InvalidReceipt { issues }),
    }
}

/// Parses a `YYYY-MM-DD` purchase date.
///
/// Only the canonical form is accepted: `2022-1-1` or surrounding whitespace
/// is rejected even though it names a real date.
pub fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, PURCHASE_DATE_FORMAT)
        .ok()
        .filter(|date| date.format(PURCHASE_DATE_FORMAT).to_string() == raw)
}

/// Parses a 24-hour `HH:MM` purchase time, canonical form only.
pub fn parse_purchase_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, PURCHASE_TIME_FORMAT)
        .ok()
        .filter(|time| time.format(PURCHASE_TIME_FORMAT).to_string() == raw)
}

fn check_total(receipt: &Receipt) -> Option<ValidationIssue> {
    let items_sum = receipt
        .items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.price));

    let Some(items_sum) = items_sum else {
        return Some(ValidationIssue::TotalOutOfRange);
    };

    match (to_cents(items_sum), to_cents(receipt.total)) {
        (Some(computed), Some(declared)) if computed == declared => None,
        (Some(_), Some(_)) => Some(ValidationIssue::TotalMismatch {
            computed: format_amount(items_sum),
            declared: format_amount(receipt.total),
        }),
        _ => Some(ValidationIssue::TotalOutOfRange),
    }
}
