//! HTTP request handlers for the receipt processor API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::Receipt;

use super::response::{
    ApiError, ApiErrorResponse, BreakdownResponse, PointsResponse, ProcessResponse,
};
use super::state::AppState;

/// Text served at `/`.
pub const WELCOME_TEXT: &str = "Welcome to the receipt processor API!\n\n\
Please use the following endpoints to interact with the API:\n\n\
POST /receipts/process           submit a receipt and receive its ID\n\
GET  /receipts/{id}/points       point total for a receipt\n\
GET  /receipts/{id}/breakdown    line-by-line explanation of a receipt's points\n\
GET  /debug                      every stored receipt with its breakdown\n";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/receipts/process", post(process_handler))
        .route("/receipts/:id/points", get(points_handler))
        .route("/receipts/:id/breakdown", get(breakdown_handler))
        .route("/debug", get(debug_handler))
        .with_state(state)
}

async fn index_handler() -> &'static str {
    WELCOME_TEXT
}

/// Handler for POST /receipts/process.
///
/// Validates and stores the receipt, returning its new ID. Validation
/// failures are returned as a 400 listing every issue.
async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing receipt submission");

    let receipt = match payload {
        Ok(Json(receipt)) => receipt,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match state.service().submit(receipt) {
        Ok(id) => {
            info!(
                correlation_id = %correlation_id,
                receipt_id = %id,
                duration_us = start_time.elapsed().as_micros(),
                "Receipt processed"
            );
            (StatusCode::OK, Json(ProcessResponse { id })).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Receipt rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /receipts/{id}/points.
async fn points_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiErrorResponse> {
    let points = state.service().points(&id).inspect_err(|err| {
        warn!(receipt_id = %id, error = %err, "Points lookup failed");
    })?;

    info!(receipt_id = %id, points, "Returned points");
    Ok(Json(PointsResponse { points }))
}

/// Handler for GET /receipts/{id}/breakdown.
async fn breakdown_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BreakdownResponse>, ApiErrorResponse> {
    let breakdown = state.service().breakdown(&id).inspect_err(|err| {
        warn!(receipt_id = %id, error = %err, "Breakdown lookup failed");
    })?;

    info!(receipt_id = %id, lines = breakdown.len(), "Returned breakdown");
    Ok(Json(BreakdownResponse { breakdown }))
}

/// Handler for GET /debug.
///
/// Lists every stored receipt with its breakdown as plain text.
async fn debug_handler(State(state): State<AppState>) -> Result<String, ApiErrorResponse> {
    Ok(state.service().debug_listing()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::test_support::target_receipt;
    use axum::{body::Body, http::Request};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn post_json(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_process_valid_receipt_returns_id() {
        let router = create_router(AppState::in_memory());
        let body = serde_json::to_string(&target_receipt()).unwrap();

        let (status, body) = send(router, post_json(body)).await;

        assert_eq!(status, StatusCode::OK);
        let response: ProcessResponse = serde_json::from_slice(&body).unwrap();
        assert!(!response.id.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_process_then_points() {
        let state = AppState::in_memory();
        let body = serde_json::to_string(&target_receipt()).unwrap();

        let (_, body) = send(create_router(state.clone()), post_json(body)).await;
        let id = serde_json::from_slice::<ProcessResponse>(&body).unwrap().id;

        let (status, body) = send(
            create_router(state),
            get_request(&format!("/receipts/{}/points", id)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "points": 28 }));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(AppState::in_memory());

        let (status, body) = send(router, post_json("{invalid json".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_wrong_field_type_returns_400() {
        let router = create_router(AppState::in_memory());
        let body = json!({ "retailer": "Target", "items": "not a list" }).to_string();

        let (status, body) = send(router, post_json(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(AppState::in_memory());
        let request = Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .body(Body::from(serde_json::to_string(&target_receipt()).unwrap()))
            .unwrap();

        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_invalid_receipt_lists_issues() {
        let router = create_router(AppState::in_memory());
        let mut receipt = target_receipt();
        receipt.purchase_date = "01/01/2022".to_string();

        let (status, body) = send(router, post_json(serde_json::to_string(&receipt).unwrap())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(
            error.issues,
            vec!["PurchaseDate is an invalid date. Please use the format YYYY-MM-DD"]
        );
    }

    #[tokio::test]
    async fn test_unknown_receipt_returns_404() {
        let router = create_router(AppState::in_memory());

        let (status, body) = send(router, get_request("/receipts/does-not-exist/breakdown")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "RECEIPT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_index_lists_endpoints() {
        let router = create_router(AppState::in_memory());

        let (status, body) = send(router, get_request("/")).await;

        assert_eq!(status, StatusCode::OK);
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("POST /receipts/process"));
        assert!(text.contains("GET  /debug"));
    }

    #[tokio::test]
    async fn test_debug_with_no_receipts() {
        let router = create_router(AppState::in_memory());

        let (status, body) = send(router, get_request("/debug")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(String::from_utf8(body).unwrap(), "No receipts yet");
    }
}
