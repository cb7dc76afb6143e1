//! Quote request model.
//!
//! A [`QuoteRequest`] is the validated, fully-defaulted input to the pricing
//! pipeline. Every optional field has a stated default, applied by the
//! caller before the request enters the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::ShippingMode;

/// Origin used when a request does not name one (the Los Angeles DC).
pub const DEFAULT_ORIGIN_ZIP: &str = "90001";

/// Default package weight: 1.0 kg.
pub fn default_weight_kg() -> Decimal {
    Decimal::new(10, 1)
}

/// Default package length: 30.0 cm.
pub fn default_length_cm() -> Decimal {
    Decimal::new(300, 1)
}

/// Default package width: 20.0 cm.
pub fn default_width_cm() -> Decimal {
    Decimal::new(200, 1)
}

/// Default package height: 10.0 cm.
pub fn default_height_cm() -> Decimal {
    Decimal::new(100, 1)
}

/// Default monthly fuel surcharge: 12.0%.
pub fn default_fuel_surcharge_pct() -> Decimal {
    Decimal::new(120, 1)
}

/// Default regional surcharge: 3.0%.
pub fn default_regional_surcharge_pct() -> Decimal {
    Decimal::new(30, 1)
}

/// Heaviest parcel the engine will rate: 10,000 kg.
pub const MAX_WEIGHT_KG: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Longest side the engine will rate: 10,000 cm.
pub const MAX_DIMENSION_CM: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Physical description of the parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Actual weight in kilograms.
    pub weight_kg: Decimal,
    /// Length in centimetres.
    pub length_cm: Decimal,
    /// Width in centimetres.
    pub width_cm: Decimal,
    /// Height in centimetres.
    pub height_cm: Decimal,
}

impl Package {
    /// Volume in cubic centimetres, or `None` if it overflows.
    pub fn volume_cm3(&self) -> Option<Decimal> {
        self.length_cm
            .checked_mul(self.width_cm)?
            .checked_mul(self.height_cm)
    }

    /// Length plus girth: `L + 2 * (W + H)`, or `None` if it overflows.
    pub fn length_plus_girth_cm(&self) -> Option<Decimal> {
        let girth = Decimal::TWO.checked_mul(self.width_cm.checked_add(self.height_cm)?)?;
        self.length_cm.checked_add(girth)
    }
}

impl Default for Package {
    fn default() -> Self {
        Self {
            weight_kg: default_weight_kg(),
            length_cm: default_length_cm(),
            width_cm: default_width_cm(),
            height_cm: default_height_cm(),
        }
    }
}

/// The validated input to the pricing engine.
///
/// # Example
///
/// ```
/// use shipping_quote::models::{QuoteRequest, ShippingMode};
///
/// let request = QuoteRequest::new("30301");
/// assert_eq!(request.origin_zip, "90001");
/// assert_eq!(request.mode, ShippingMode::Ground);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Destination postal code.
    pub dest_zip: String,
    /// Origin postal code.
    pub origin_zip: String,
    /// Package weight and dimensions.
    pub package: Package,
    /// Service level.
    pub mode: ShippingMode,
    /// Fuel surcharge as a percentage of the pre-surcharge cost.
    pub fuel_surcharge_pct: Decimal,
    /// Regional surcharge as a percentage of the pre-surcharge cost.
    pub regional_surcharge_pct: Decimal,
    /// Whether the enterprise discount applies.
    pub enterprise_rate_card: bool,
}

impl QuoteRequest {
    /// Creates a request for the given destination with every other field defaulted.
    pub fn new(dest_zip: impl Into<String>) -> Self {
        Self {
            dest_zip: dest_zip.into(),
            origin_zip: DEFAULT_ORIGIN_ZIP.to_string(),
            package: Package::default(),
            mode: ShippingMode::default(),
            fuel_surcharge_pct: default_fuel_surcharge_pct(),
            regional_surcharge_pct: default_regional_surcharge_pct(),
            enterprise_rate_card: false,
        }
    }

    /// Checks numeric ranges.
    ///
    /// Weight must lie in `(0, MAX_WEIGHT_KG]` and each dimension in
    /// `(0, MAX_DIMENSION_CM]`; surcharge percentages must lie in `[0, 100]`.
    /// Postal codes are checked later by the coordinate resolver.
    pub fn validate(&self) -> EngineResult<()> {
        let measurements = [
            ("weight_kg", self.package.weight_kg, MAX_WEIGHT_KG),
            ("length_cm", self.package.length_cm, MAX_DIMENSION_CM),
            ("width_cm", self.package.width_cm, MAX_DIMENSION_CM),
            ("height_cm", self.package.height_cm, MAX_DIMENSION_CM),
        ];
        for (field, value, max) in measurements {
            if value <= Decimal::ZERO {
                return Err(EngineError::invalid_parameter(
                    field,
                    format!("must be greater than zero, got {}", value),
                ));
            }
            if value > max {
                return Err(EngineError::invalid_parameter(
                    field,
                    format!("must not exceed {}, got {}", max, value),
                ));
            }
        }

        let percentages = [
            ("fuel_surcharge_pct", self.fuel_surcharge_pct),
            ("regional_surcharge_pct", self.regional_surcharge_pct),
        ];
        for (field, value) in percentages {
            if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                return Err(EngineError::invalid_parameter(
                    field,
                    format!("must be between 0 and 100, got {}", value),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_new_applies_defaults() {
        let request = QuoteRequest::new("30301");
        assert_eq!(request.dest_zip, "30301");
        assert_eq!(request.origin_zip, "90001");
        assert_eq!(request.package.weight_kg, dec("1.0"));
        assert_eq!(request.package.length_cm, dec("30.0"));
        assert_eq!(request.package.width_cm, dec("20.0"));
        assert_eq!(request.package.height_cm, dec("10.0"));
        assert_eq!(request.mode, ShippingMode::Ground);
        assert_eq!(request.fuel_surcharge_pct, dec("12.0"));
        assert_eq!(request.regional_surcharge_pct, dec("3.0"));
        assert!(!request.enterprise_rate_card);
    }

    #[test]
    fn test_package_volume_and_girth() {
        let package = Package::default();
        assert_eq!(package.volume_cm3(), Some(dec("6000")));
        assert_eq!(package.length_plus_girth_cm(), Some(dec("90")));
    }

    #[test]
    fn test_package_geometry_reports_overflow() {
        let huge = dec("1000000000000000");
        let package = Package {
            weight_kg: dec("1"),
            length_cm: huge,
            width_cm: huge,
            height_cm: huge,
        };
        assert_eq!(package.volume_cm3(), None);
        assert!(package.length_plus_girth_cm().is_some());

        let package = Package {
            width_cm: Decimal::MAX,
            ..package
        };
        assert_eq!(package.length_plus_girth_cm(), None);
    }

    #[test]
    fn test_weight_above_maximum_is_rejected() {
        let mut request = QuoteRequest::new("30301");
        request.package.weight_kg = dec("30000000000000000000000000000");
        let err = request.validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter { field, .. } if field == "weight_kg"));
    }

    #[test]
    fn test_dimension_above_maximum_is_rejected() {
        let mut request = QuoteRequest::new("30301");
        request.package.length_cm = dec("1000000000000000");
        let err = request.validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter { field, .. } if field == "length_cm"));
    }

    #[test]
    fn test_maximum_measurements_are_accepted() {
        let mut request = QuoteRequest::new("30301");
        request.package = Package {
            weight_kg: MAX_WEIGHT_KG,
            length_cm: MAX_DIMENSION_CM,
            width_cm: MAX_DIMENSION_CM,
            height_cm: MAX_DIMENSION_CM,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_zero_weight_is_rejected() {
        let mut request = QuoteRequest::new("30301");
        request.package.weight_kg = Decimal::ZERO;
        let err = request.validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter { field, .. } if field == "weight_kg"));
    }

    #[test]
    fn test_negative_dimension_is_rejected() {
        let mut request = QuoteRequest::new("30301");
        request.package.height_cm = dec("-1");
        let err = request.validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter { field, .. } if field == "height_cm"));
    }

    #[test]
    fn test_negative_surcharge_is_rejected() {
        let mut request = QuoteRequest::new("30301");
        request.fuel_surcharge_pct = dec("-0.5");
        let err = request.validate().unwrap_err();
        assert!(
            matches!(err, EngineError::InvalidParameter { field, .. } if field == "fuel_surcharge_pct")
        );
    }

    #[test]
    fn test_surcharge_above_100_is_rejected() {
        let mut request = QuoteRequest::new("30301");
        request.regional_surcharge_pct = dec("100.01");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_boundary_surcharges_are_accepted() {
        let mut request = QuoteRequest::new("30301");
        request.fuel_surcharge_pct = Decimal::ZERO;
        request.regional_surcharge_pct = Decimal::ONE_HUNDRED;
        assert!(request.validate().is_ok());
    }
}
