//! Validation issue types.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A single problem found while validating a receipt.
///
/// The `Display` output is the message surfaced to API clients.
///
/// # Example
///
/// ```
/// use receipt_processor::validation::ValidationIssue;
///
/// assert_eq!(ValidationIssue::EmptyRetailer.to_string(), "Retailer is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// At least one item has a zero price.
    #[error("Item is missing or has an invalid price")]
    InvalidPrice,

    /// At least one item has an empty short description.
    #[error("Item is missing or has an invalid short description")]
    MissingDescription,

    /// The declared total differs from the cent-rounded sum of item prices.
    #[error("Total does not match sum of items. Total from items: {computed} Total from receipt: {declared}")]
    TotalMismatch {
        /// Sum of item prices, formatted with two decimals.
        computed: String,
        /// Declared total, formatted with two decimals.
        declared: String,
    },

    /// The item prices or the total cannot be expressed as a whole number of cents.
    #[error("Total or item prices are too large to be expressed in cents")]
    TotalOutOfRange,

    /// The purchase date is not a `YYYY-MM-DD` calendar date.
    #[error("PurchaseDate is an invalid date. Please use the format YYYY-MM-DD")]
    InvalidPurchaseDate,

    /// The purchase time is not a 24-hour `HH:MM` time.
    #[error("PurchaseTime is an invalid time. Please use the format HH:MM")]
    InvalidPurchaseTime,

    /// The retailer has no letters or digits.
    #[error("Retailer is empty")]
    EmptyRetailer,
}

impl Serialize for ValidationIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
