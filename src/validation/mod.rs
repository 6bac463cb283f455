//! Receipt validation.
//!
//! This module checks submitted receipts for structural and business
//! correctness before they are stored and scored.

mod checks;
mod issue;

pub use checks::{
    PURCHASE_DATE_FORMAT, PURCHASE_TIME_FORMAT, accept, parse_purchase_date, parse_purchase_time,
    validate,
};
pub use issue::ValidationIssue;
