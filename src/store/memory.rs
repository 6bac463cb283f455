//! In-memory receipt store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::ValidatedReceipt;

use super::{ReceiptId, ReceiptStore, StoredReceipt};

#[derive(Debug, Default)]
struct Inner {
    receipts: HashMap<ReceiptId, StoredReceipt>,
    next_sequence: u64,
}

/// A thread-safe receipt store backed by a `HashMap`.
///
/// Cloning the store yields another handle to the same receipts.
#[derive(Debug, Default, Clone)]
pub struct InMemoryReceiptStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored receipts.
    pub fn len(&self) -> EngineResult<usize> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.receipts.len())
    }

    /// Returns true if no receipts have been stored.
    pub fn is_empty(&self) -> EngineResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn submit(&self, receipt: ValidatedReceipt) -> EngineResult<ReceiptId> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        let mut id = ReceiptId::new();
        while inner.receipts.contains_key(&id) {
            id = ReceiptId::new();
        }

        let sequence = inner.next_sequence;
        inner.next_sequence += 1;
        inner.receipts.insert(
            id,
            StoredReceipt {
                id,
                receipt: Arc::new(receipt),
                sequence,
            },
        );

        debug!(receipt_id = %id, sequence, "Stored receipt");
        Ok(id)
    }

    fn get(&self, id: &ReceiptId) -> EngineResult<Arc<ValidatedReceipt>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        inner
            .receipts
            .get(id)
            .map(|stored| Arc::clone(&stored.receipt))
            .ok_or_else(|| EngineError::ReceiptNotFound { id: id.to_string() })
    }

    fn list(&self) -> EngineResult<Vec<StoredReceipt>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        let mut stored: Vec<StoredReceipt> = inner.receipts.values().cloned().collect();
        stored.sort_by_key(|entry| entry.sequence);
        Ok(stored)
    }
}

fn poisoned() -> EngineError {
    EngineError::StoreUnavailable {
        message: "receipt store lock poisoned".to_string(),
    }
}
