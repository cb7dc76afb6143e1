//! Postal code to coordinate resolution.
//!
//! Unknown codes are rejected; there is no approximate fallback.

use crate::config::CentroidTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Centroid};

/// Returns the centroid for `zip`, or `UnknownLocation` naming the code.
///
/// # Examples
///
/// ```
/// use shipping_quote::calculation::resolve_centroid;
/// use shipping_quote::config::CentroidTable;
///
/// let atlanta = resolve_centroid("30301", CentroidTable::builtin()).unwrap();
/// assert!((atlanta.lat - 33.75288).abs() < 1e-9);
/// assert!(resolve_centroid("99999", CentroidTable::builtin()).is_err());
/// ```
pub fn resolve_centroid(zip: &str, table: &CentroidTable) -> EngineResult<Centroid> {
    table
        .get(zip)
        .copied()
        .ok_or_else(|| EngineError::UnknownLocation {
            zip: zip.to_string(),
        })
}

/// Both ends of a shipment, resolved.
#[derive(Debug, Clone)]
pub struct RouteResolution {
    /// Centroid of the origin code.
    pub origin: Centroid,
    /// Centroid of the destination code.
    pub destination: Centroid,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Resolves origin and destination codes. The origin is checked first.
pub fn resolve_route(
    origin_zip: &str,
    dest_zip: &str,
    table: &CentroidTable,
    step_number: u32,
) -> EngineResult<RouteResolution> {
    let origin = resolve_centroid(origin_zip, table)?;
    let destination = resolve_centroid(dest_zip, table)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "coordinate_lookup".to_string(),
        rule_name: "Coordinate Lookup".to_string(),
        input: serde_json::json!({
            "origin_zip": origin_zip,
            "dest_zip": dest_zip
        }),
        output: serde_json::json!({
            "origin": { "lat": origin.lat, "lon": origin.lon },
            "destination": { "lat": destination.lat, "lon": destination.lon }
        }),
        reasoning: format!(
            "Resolved {} to ({}, {}) and {} to ({}, {})",
            origin_zip, origin.lat, origin.lon, dest_zip, destination.lat, destination.lon
        ),
    };

    Ok(RouteResolution {
        origin,
        destination,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_code() {
        let centroid = resolve_centroid("10001", CentroidTable::builtin()).unwrap();
        assert_eq!(centroid, Centroid::new(40.750742, -73.99653));
    }

    #[test]
    fn test_unknown_code_names_the_code() {
        let err = resolve_centroid("99999", CentroidTable::builtin()).unwrap_err();
        assert!(matches!(err, EngineError::UnknownLocation { zip } if zip == "99999"));
    }

    #[test]
    fn test_empty_code_is_unknown() {
        assert!(resolve_centroid("", CentroidTable::builtin()).is_err());
    }

    #[test]
    fn test_resolve_route_records_audit_step() {
        let route = resolve_route("90001", "30301", CentroidTable::builtin(), 3).unwrap();
        assert_eq!(route.origin, Centroid::new(33.973951, -118.248405));
        assert_eq!(route.destination, Centroid::new(33.75288, -84.392708));
        assert_eq!(route.audit_step.step_number, 3);
        assert_eq!(route.audit_step.rule_id, "coordinate_lookup");
        assert_eq!(route.audit_step.input["dest_zip"], "30301");
        assert!(route.audit_step.reasoning.contains("90001"));
    }

    #[test]
    fn test_unknown_origin_is_reported_before_destination() {
        let err = resolve_route("00000", "11111", CentroidTable::builtin(), 1).unwrap_err();
        assert!(matches!(err, EngineError::UnknownLocation { zip } if zip == "00000"));
    }

    #[test]
    fn test_unknown_destination() {
        let err = resolve_route("90001", "11111", CentroidTable::builtin(), 1).unwrap_err();
        assert!(matches!(err, EngineError::UnknownLocation { zip } if zip == "11111"));
    }
}
