//! Core data models for the Shipping Quote Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod centroid;
mod quote_request;
mod quote_result;
mod shipping_mode;

pub use centroid::Centroid;
pub use quote_request::{
    DEFAULT_ORIGIN_ZIP, MAX_DIMENSION_CM, MAX_WEIGHT_KG, Package, QuoteRequest, default_fuel_surcharge_pct, default_height_cm,
    default_length_cm, default_regional_surcharge_pct, default_weight_kg, default_width_cm,
};
pub use quote_result::{
    AuditStep, AuditTrace, AuditWarning, QuoteBreakdown, QuoteCalculation, QuoteResult,
};
pub use shipping_mode::ShippingMode;
