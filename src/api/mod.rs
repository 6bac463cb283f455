//! HTTP API module for the receipt processor.
//!
//! This module provides the REST API endpoints for submitting receipts and
//! retrieving their points and breakdowns.

mod handlers;
mod response;
mod state;

pub use handlers::{WELCOME_TEXT, create_router};
pub use response::{ApiError, ApiErrorResponse, BreakdownResponse, PointsResponse, ProcessResponse};
pub use state::AppState;
