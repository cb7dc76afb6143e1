//! HTTP request handlers for the Shipping Quote Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_quote;
use crate::error::EngineError;
use crate::models::QuoteRequest;

use super::request::QuoteRequestBody;
use super::response::{ApiError, ApiErrorResponse, QuoteResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote-by-zip", post(quote_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Handler for POST /quote-by-zip endpoint.
///
/// Accepts a quote request and returns the priced quote.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    // Handle JSON parsing errors
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Missing fields and wrong types are both validation failures
                    ApiError::validation_error(body_text)
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
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let result = QuoteRequest::try_from(body)
        .and_then(|request| calculate_quote(&request, state.config()));

    match result {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                quote_id = %quote.quote_id,
                origin_zip = %quote.origin_zip,
                dest_zip = %quote.dest_zip,
                mode = %quote.mode,
                total_usd = %quote.total_usd(),
                duration_us = quote.audit_trace.duration_us,
                "Quote completed successfully"
            );
            (StatusCode::OK, Json(QuoteResponse::from(quote))).into_response()
        }
        Err(err) => {
            log_rejection(correlation_id, &err);
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn log_rejection(correlation_id: Uuid, err: &EngineError) {
    match err {
        EngineError::UnknownLocation { zip } => {
            warn!(correlation_id = %correlation_id, zip = %zip, "Unknown ZIP code");
        }
        _ => {
            warn!(correlation_id = %correlation_id, error = %err, "Quote failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::default())
    }

    async fn post_json(router: Router, body: String) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/quote-by-zip")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = serde_json::to_string(&QuoteRequestBody::new("30301")).unwrap();
        let (status, bytes) = post_json(create_test_router(), body).await;

        assert_eq!(status, StatusCode::OK);
        let response: QuoteResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(response.total_usd, Decimal::from_str("1.28").unwrap());
        assert_eq!(response.quote.origin_zip, "90001");
        assert_eq!(response.display.total_usd, "$1.28");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, bytes) = post_json(create_test_router(), "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_dest_zip_returns_400() {
        let (status, bytes) = post_json(create_test_router(), r#"{"weight_kg": 2}"#.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("dest_zip"));
    }

    #[tokio::test]
    async fn test_unknown_zip_returns_400() {
        let body = serde_json::to_string(&QuoteRequestBody::new("99999")).unwrap();
        let (status, bytes) = post_json(create_test_router(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "UNKNOWN_ZIP");
    }

    #[tokio::test]
    async fn test_invalid_mode_returns_400() {
        let mut request = QuoteRequestBody::new("30301");
        request.mode = Some("rocket".to_string());
        let body = serde_json::to_string(&request).unwrap();
        let (status, bytes) = post_json(create_test_router(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_MODE");
    }

    #[tokio::test]
    async fn test_negative_weight_returns_400() {
        let mut request = QuoteRequestBody::new("30301");
        request.weight_kg = Some(Decimal::from_str("-2").unwrap());
        let body = serde_json::to_string(&request).unwrap();
        let (status, bytes) = post_json(create_test_router(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_error_responses_are_json() {
        for body in ["{invalid json", r#"{"dest_zip": "99999"}"#] {
            let response = create_test_router()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/quote-by-zip")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.headers()[axum::http::header::CONTENT_TYPE],
                "application/json"
            );
        }
    }

    #[tokio::test]
    async fn test_huge_dimensions_return_400() {
        let body = r#"{"dest_zip":"30301","length_cm":1e15,"width_cm":1e15,"height_cm":1e15}"#;
        let (status, bytes) = post_json(create_test_router(), body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.details.as_deref(), Some("length_cm"));
    }
}
