//! Response types for the Shipping Quote Engine API.
//!
//! This module defines the quote response body, the error response
//! structures, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::format_usd;
use crate::error::EngineError;
use crate::models::QuoteCalculation;

/// Currency-formatted amounts for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDisplay {
    /// Base cost, e.g. `$1.12`.
    pub base_cost_usd: String,
    /// Handling fee.
    pub handling_fee_usd: String,
    /// Fuel surcharge.
    pub fuel_surcharge_usd: String,
    /// Regional surcharge.
    pub regional_surcharge_usd: String,
    /// Enterprise discount.
    pub enterprise_discount_usd: String,
    /// Total.
    pub total_usd: String,
}

/// Response body for a successful `/quote-by-zip` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// The quote with breakdown and audit trace.
    #[serde(flatten)]
    pub quote: QuoteCalculation,
    /// The total in USD, rounded to cents.
    pub total_usd: Decimal,
    /// Formatted amounts.
    pub display: QuoteDisplay,
}

impl From<QuoteCalculation> for QuoteResponse {
    fn from(quote: QuoteCalculation) -> Self {
        let breakdown = &quote.breakdown;
        let display = QuoteDisplay {
            base_cost_usd: format_usd(breakdown.base_cost),
            handling_fee_usd: format_usd(breakdown.handling_fee),
            fuel_surcharge_usd: format_usd(breakdown.fuel_surcharge),
            regional_surcharge_usd: format_usd(breakdown.regional_surcharge),
            enterprise_discount_usd: format_usd(breakdown.enterprise_discount),
            total_usd: format_usd(breakdown.total),
        };
        Self {
            total_usd: quote.total_usd(),
            display,
            quote,
        }
    }
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
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an unknown ZIP error response.
    pub fn unknown_zip(zip: &str) -> Self {
        Self::with_details(
            "UNKNOWN_ZIP",
            format!("Unknown ZIP code: {}", zip),
            format!("The ZIP code '{}' is not in the supported coverage area", zip),
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
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::ConfigInvalid { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
            EngineError::UnknownLocation { zip } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::unknown_zip(&zip),
            },
            EngineError::InvalidMode { mode } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MODE",
                    format!("Invalid shipping mode: {}", mode),
                    "Supported modes are ground, air and express",
                ),
            },
            EngineError::InvalidParameter { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid parameter '{}': {}", field, message),
                    field,
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
