//! Receipt storage.
//!
//! The service depends on the [`ReceiptStore`] trait rather than a concrete
//! map, so validation and scoring stay independent of how receipts are kept.
//! [`InMemoryReceiptStore`] keeps receipts for the lifetime of the process.

mod memory;
mod receipt_id;

use std::sync::Arc;

use crate::error::EngineResult;
use crate::models::ValidatedReceipt;

pub use memory::InMemoryReceiptStore;
pub use receipt_id::ReceiptId;

/// A receipt held by a store, with its identifier and submission order.
#[derive(Debug, Clone)]
pub struct StoredReceipt {
    /// The identifier assigned on submission.
    pub id: ReceiptId,
    /// The validated receipt.
    pub receipt: Arc<ValidatedReceipt>,
    /// Submission order within the store, starting at zero.
    pub sequence: u64,
}

/// Storage abstraction for accepted receipts.
pub trait ReceiptStore: Send + Sync {
    /// Stores a receipt under a freshly generated identifier and returns it.
    fn submit(&self, receipt: ValidatedReceipt) -> EngineResult<ReceiptId>;

    /// Looks up a receipt, returning `ReceiptNotFound` if the id is unknown.
    fn get(&self, id: &ReceiptId) -> EngineResult<Arc<ValidatedReceipt>>;

    /// Returns every stored receipt in submission order.
    fn list(&self) -> EngineResult<Vec<StoredReceipt>>;
}
