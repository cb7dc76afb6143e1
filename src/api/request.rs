//! Request types for the Shipping Quote Engine API.
//!
//! This module defines the JSON request structure for the `/quote-by-zip`
//! endpoint. Only `dest_zip` is required; a missing or `null` field takes its
//! documented default.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    DEFAULT_ORIGIN_ZIP, Package, QuoteRequest, ShippingMode, default_fuel_surcharge_pct,
    default_height_cm, default_length_cm, default_regional_surcharge_pct, default_weight_kg,
    default_width_cm,
};

/// Request body for the `/quote-by-zip` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteRequestBody {
    /// Destination ZIP code.
    pub dest_zip: String,
    /// Origin ZIP code (default "90001").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_zip: Option<String>,
    /// Package weight in kg (default 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<Decimal>,
    /// Package length in cm (default 30.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_cm: Option<Decimal>,
    /// Package width in cm (default 20.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_cm: Option<Decimal>,
    /// Package height in cm (default 10.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<Decimal>,
    /// Shipping mode name (default "ground").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Fuel surcharge percentage (default 12.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_surcharge_pct: Option<Decimal>,
    /// Regional surcharge percentage (default 3.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional_surcharge_pct: Option<Decimal>,
    /// Apply the enterprise discount (default false).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_rate_card: Option<bool>,
}

impl QuoteRequestBody {
    /// Creates a body with only the destination set.
    pub fn new(dest_zip: impl Into<String>) -> Self {
        Self {
            dest_zip: dest_zip.into(),
            ..Self::default()
        }
    }
}

/// Applies defaults and parses the mode name.
///
/// Range checks are left to [`QuoteRequest::validate`], which the engine
/// runs before pricing.
impl TryFrom<QuoteRequestBody> for QuoteRequest {
    type Error = EngineError;

    fn try_from(body: QuoteRequestBody) -> Result<Self, Self::Error> {
        let mode = match body.mode {
            Some(mode) => mode.parse::<ShippingMode>()?,
            None => ShippingMode::default(),
        };

        Ok(QuoteRequest {
            dest_zip: body.dest_zip,
            origin_zip: body
                .origin_zip
                .unwrap_or_else(|| DEFAULT_ORIGIN_ZIP.to_string()),
            package: Package {
                weight_kg: body.weight_kg.unwrap_or_else(default_weight_kg),
                length_cm: body.length_cm.unwrap_or_else(default_length_cm),
                width_cm: body.width_cm.unwrap_or_else(default_width_cm),
                height_cm: body.height_cm.unwrap_or_else(default_height_cm),
            },
            mode,
            fuel_surcharge_pct: body
                .fuel_surcharge_pct
                .unwrap_or_else(default_fuel_surcharge_pct),
            regional_surcharge_pct: body
                .regional_surcharge_pct
                .unwrap_or_else(default_regional_surcharge_pct),
            enterprise_rate_card: body.enterprise_rate_card.unwrap_or(false),
        })
    }
}
