//! Response types for the receipt processor API.
//!
//! This module defines the success bodies for each endpoint, the error
//! response structure, and the mapping from [`EngineError`] to HTTP status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::store::ReceiptId;

/// Body returned by `POST /receipts/process`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// The identifier assigned to the accepted receipt.
    pub id: ReceiptId,
}

/// Body returned by `GET /receipts/{id}/points`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    /// Total points awarded.
    pub points: u64,
}

/// Body returned by `GET /receipts/{id}/breakdown`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownResponse {
    /// Breakdown lines, ending with the total line.
    pub breakdown: Vec<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Validation problems, when the request was rejected by validation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            issues: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response listing every issue.
    pub fn validation_error(issues: Vec<String>) -> Self {
        Self {
            issues,
            ..Self::new("VALIDATION_ERROR", "The receipt is invalid")
        }
    }

    /// Creates a receipt not found error response.
    pub fn receipt_not_found(id: &str) -> Self {
        Self::with_details(
            "RECEIPT_NOT_FOUND",
            "No receipt found for that ID.",
            format!("No receipt is stored under '{}'", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidReceipt { issues } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(
                    issues.iter().map(ToString::to_string).collect(),
                ),
            },
            EngineError::ReceiptNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::receipt_not_found(&id),
            },
            EngineError::MalformedReceipt { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::malformed_json(message),
            },
            EngineError::StoreUnavailable { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_UNAVAILABLE", "Receipt store unavailable", message),
            },
            other @ (EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidServerAddress { .. }
            | EngineError::Telemetry { .. }
            | EngineError::Io(_)) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("INTERNAL_ERROR", "Internal server error", other.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationIssue;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
        assert!(!json.contains("issues"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_receipt_maps_to_400_with_issues() {
        let api_error: ApiErrorResponse = EngineError::InvalidReceipt {
            issues: vec![ValidationIssue::EmptyRetailer, ValidationIssue::InvalidPurchaseTime],
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert_eq!(
            api_error.error.issues,
            vec![
                "Retailer is empty",
                "PurchaseTime is an invalid time. Please use the format HH:MM"
            ]
        );
    }

    #[test]
    fn test_receipt_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = EngineError::ReceiptNotFound {
            id: "abc".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "RECEIPT_NOT_FOUND");
        assert!(api_error.error.details.unwrap().contains("abc"));
    }

    #[test]
    fn test_store_unavailable_maps_to_500() {
        let api_error: ApiErrorResponse = EngineError::StoreUnavailable {
            message: "lock poisoned".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "STORE_UNAVAILABLE");
    }
}
