//! Application state for the receipt processor API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::service::ReceiptService;

/// Shared application state.
///
/// Wraps the [`ReceiptService`], which in turn holds the receipt store.
#[derive(Clone)]
pub struct AppState {
    service: ReceiptService,
}

impl AppState {
    /// Creates application state around an existing service.
    pub fn new(service: ReceiptService) -> Self {
        Self { service }
    }

    /// Creates application state backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(ReceiptService::in_memory())
    }

    /// Returns the receipt service.
    pub fn service(&self) -> &ReceiptService {
        &self.service
    }
}
