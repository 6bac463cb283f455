//! Receipt processing service.
//!
//! [`ReceiptService`] is the boundary used by the HTTP API and the command
//! line: it validates submissions before storing them, and scores stored
//! receipts on every request.

use std::sync::Arc;

use tracing::{info, warn};

use crate::calculation::score_receipt;
use crate::error::{EngineError, EngineResult};
use crate::models::{Receipt, ScoreCard, ValidatedReceipt};
use crate::store::{InMemoryReceiptStore, ReceiptId, ReceiptStore};
use crate::validation::accept;

/// Text returned by [`ReceiptService::debug_listing`] when nothing is stored.
pub const EMPTY_LISTING: &str = "No receipts yet";

/// Decodes a receipt from JSON text.
///
/// Absent fields take their defaults and are reported later by validation;
/// only syntax errors and mistyped fields fail here.
pub fn parse_receipt(json: &str) -> EngineResult<Receipt> {
    serde_json::from_str(json).map_err(|err| EngineError::MalformedReceipt {
        message: err.to_string(),
    })
}

/// Validates, stores and scores receipts.
///
/// # Example
///
/// ```
/// use receipt_processor::models::{Item, Receipt};
/// use receipt_processor::service::ReceiptService;
/// use rust_decimal::Decimal;
///
/// let service = ReceiptService::in_memory();
/// let id = service
///     .submit(Receipt {
///         retailer: "Target".to_string(),
///         purchase_date: "2022-01-02".to_string(),
///         purchase_time: "13:13".to_string(),
///         items: vec![Item::new("Pepsi - 12-oz", Decimal::new(125, 2))],
///         total: Decimal::new(125, 2),
///     })
///     .unwrap();
///
/// assert_eq!(service.points(&id.to_string()).unwrap(), 31);
/// ```
#[derive(Clone)]
pub struct ReceiptService {
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptService {
    /// Creates a service backed by the given store.
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }

    /// Creates a service backed by a fresh [`InMemoryReceiptStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryReceiptStore::new()))
    }

    /// Validates and stores a receipt, returning its new identifier.
    ///
    /// # Returns
    ///
    /// Returns `InvalidReceipt` with every validation issue if the receipt is
    /// rejected; nothing is stored in that case.
    pub fn submit(&self, receipt: Receipt) -> EngineResult<ReceiptId> {
        let validated = match accept(receipt) {
            Ok(validated) => validated,
            Err(err) => {
                if let EngineError::InvalidReceipt { issues } = &err {
                    warn!(issue_count = issues.len(), "Rejected receipt");
                }
                return Err(err);
            }
        };

        let retailer = validated.retailer().to_string();
        let id = self.store.submit(validated)?;
        info!(receipt_id = %id, retailer = %retailer, "Accepted receipt");
        Ok(id)
    }

    /// Looks up a stored receipt by its identifier string.
    ///
    /// Identifiers that are not well-formed UUIDs are reported as not found.
    pub fn get(&self, id: &str) -> EngineResult<Arc<ValidatedReceipt>> {
        let receipt_id: ReceiptId = id.parse().map_err(|_| EngineError::ReceiptNotFound {
            id: id.to_string(),
        })?;
        self.store.get(&receipt_id)
    }

    /// Scores a stored receipt.
    pub fn score(&self, id: &str) -> EngineResult<ScoreCard> {
        let receipt = self.get(id)?;
        Ok(score_receipt(&receipt))
    }

    /// Returns the total points for a stored receipt.
    pub fn points(&self, id: &str) -> EngineResult<u64> {
        self.score(id).map(|card| card.total())
    }

    /// Returns the breakdown lines for a stored receipt.
    pub fn breakdown(&self, id: &str) -> EngineResult<Vec<String>> {
        self.score(id).map(|card| card.breakdown())
    }

    /// Renders every stored receipt as its id followed by its breakdown,
    /// oldest first, separated by blank lines.
    pub fn debug_listing(&self) -> EngineResult<String> {
        let stored = self.store.list()?;
        if stored.is_empty() {
            return Ok(EMPTY_LISTING.to_string());
        }

        let sections: Vec<String> = stored
            .iter()
            .map(|entry| {
                let breakdown = score_receipt(&entry.receipt).breakdown();
                format!("{}\n{}\n", entry.id, breakdown.join("\n"))
            })
            .collect();
        Ok(sections.join("\n"))
    }
}
