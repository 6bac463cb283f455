//! Receipt models.
//!
//! [`Receipt`] and [`Item`] mirror the JSON document clients submit.
//! [`ValidatedReceipt`] is a receipt that has passed every validation check;
//! it carries the parsed purchase date and time and is the only input the
//! scoring rules accept.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};


/// A line item on a receipt.
///
/// A missing `price` deserializes as zero and a missing `shortDescription` as
/// an empty string, so absent fields surface as validation issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// The short product description printed on the receipt.
    pub short_description: String,
    /// The price paid for the item.
    pub price: Decimal,
}

impl Item {
    /// Creates an item from a description and price.
    pub fn new(short_description: impl Into<String>, price: Decimal) -> Self {
        Self {
            short_description: short_description.into(),
            price,
        }
    }
}

/// A receipt as submitted by a client.
///
/// # Example
///
/// ```
/// use receipt_processor::models::Receipt;
///
/// let json = r#"{
///     "retailer": "M&M Corner Market",
///     "purchaseDate": "2022-03-20",
///     "purchaseTime": "14:33",
///     "items": [{ "shortDescription": "Gatorade", "price": "2.25" }],
///     "total": "2.25"
/// }"#;
///
/// let receipt: Receipt = serde_json::from_str(json).unwrap();
/// assert_eq!(receipt.retailer, "M&M Corner Market");
/// assert_eq!(receipt.items.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    /// The retailer or store name.
    pub retailer: String,
    /// The purchase date, expected as `YYYY-MM-DD`.
    pub purchase_date: String,
    /// The purchase time, expected as 24-hour `HH:MM`.
    pub purchase_time: String,
    /// The purchased items, in receipt order.
    pub items: Vec<Item>,
    /// The total amount paid.
    pub total: Decimal,
}

/// A receipt that passed validation, with its date and time parsed.
///
/// Instances are only created by [`crate::validation::accept`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReceipt {
    receipt: Receipt,
    purchase_date: NaiveDate,
    purchase_time: NaiveTime,
    total_cents: i128,
}

impl ValidatedReceipt {
    pub(crate) fn new(
        receipt: Receipt,
        purchase_date: NaiveDate,
        purchase_time: NaiveTime,
        total_cents: i128,
    ) -> Self {
        Self {
            receipt,
            purchase_date,
            purchase_time,
            total_cents,
        }
    }

    /// Returns the receipt as it was submitted.
    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    /// Returns the retailer name as submitted.
    pub fn retailer(&self) -> &str {
        &self.receipt.retailer
    }

    /// Returns the items in receipt order.
    pub fn items(&self) -> &[Item] {
        &self.receipt.items
    }

    /// Returns the declared total.
    pub fn total(&self) -> Decimal {
        self.receipt.total
    }

    /// Returns the declared total rounded to whole cents.
    pub fn total_cents(&self) -> i128 {
        self.total_cents
    }

    /// Returns the parsed purchase date.
    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    /// Returns the parsed purchase time.
    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    /// Consumes the wrapper and returns the submitted receipt.
    pub fn into_receipt(self) -> Receipt {
        self.receipt
    }
}
