//! Great-circle distance between two centroids.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Centroid};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres.
///
/// ```text
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
/// d = 2·R·asin(√a)
/// ```
///
/// # Examples
///
/// ```
/// use shipping_quote::calculation::haversine_km;
/// use shipping_quote::models::Centroid;
///
/// let la = Centroid::new(33.973951, -118.248405);
/// assert_eq!(haversine_km(la, la), 0.0);
/// ```
pub fn haversine_km(origin: Centroid, destination: Centroid) -> f64 {
    let lat1 = origin.lat.to_radians();
    let lat2 = destination.lat.to_radians();
    let dlat = (destination.lat - origin.lat).to_radians();
    let dlon = (destination.lon - origin.lon).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push `a` a hair past 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

/// The result of a distance calculation.
#[derive(Debug, Clone)]
pub struct DistanceResult {
    /// Distance in kilometres, rounded to the metre.
    pub distance_km: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the shipment distance and converts it to a decimal.
///
/// Fails with `CalculationError` only if the coordinates produce a
/// non-finite distance.
pub fn calculate_distance(
    origin: Centroid,
    destination: Centroid,
    step_number: u32,
) -> EngineResult<DistanceResult> {
    let raw_km = haversine_km(origin, destination);
    let distance_km = Decimal::from_f64(raw_km)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("distance is not a finite number: {}", raw_km),
        })?
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero);

    let audit_step = AuditStep {
        step_number,
        rule_id: "haversine_distance".to_string(),
        rule_name: "Great-Circle Distance".to_string(),
        input: serde_json::json!({
            "origin": { "lat": origin.lat, "lon": origin.lon },
            "destination": { "lat": destination.lat, "lon": destination.lon },
            "earth_radius_km": EARTH_RADIUS_KM
        }),
        output: serde_json::json!({
            "distance_km": distance_km.normalize().to_string()
        }),
        reasoning: format!("Haversine distance is {} km", distance_km.normalize()),
    };

    Ok(DistanceResult {
        distance_km,
        audit_step,
    })
}
