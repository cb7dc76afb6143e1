//! Calculation logic for the Shipping Quote Engine.
//!
//! This module contains the pricing pipeline: postal code resolution,
//! great-circle distance, billable weight, mode-based base rating, handling
//! fees, and surcharge/discount composition into a rounded total.

mod billable_weight;
mod coordinates;
mod currency;
mod distance;
mod handling_fee;
mod quote;
mod rate_engine;
mod surcharges;

pub use billable_weight::{BillableWeightResult, calculate_billable_weight, dimensional_weight};
pub use coordinates::{RouteResolution, resolve_centroid, resolve_route};
pub use currency::{format_usd, round_currency};
pub use distance::{DistanceResult, EARTH_RADIUS_KM, calculate_distance, haversine_km};
pub use handling_fee::{HandlingFeeResult, calculate_handling_fee};
pub use quote::{calculate_quote, compute_quote};
pub use rate_engine::{BaseCostResult, calculate_base_cost};
pub use surcharges::{SurchargeInputs, SurchargeResult, apply_surcharges};
