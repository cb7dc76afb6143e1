//! Configuration types for shipment pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `pricing.yaml`, together with the calibrated
//! built-in values used when no configuration directory is supplied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ShippingMode;

use super::CentroidTable;

/// Rate structure for a single shipping mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeRate {
    /// Charge per kilogram of billable weight.
    pub weight_rate_per_kg: Decimal,
    /// Charge per kilometre of great-circle distance.
    pub distance_rate_per_km: Decimal,
    /// Floor applied to the rated base cost.
    pub minimum_charge: Decimal,
}

impl ModeRate {
    fn new(weight_rate_per_kg: Decimal, distance_rate_per_km: Decimal, minimum_charge: Decimal) -> Self {
        Self {
            weight_rate_per_kg,
            distance_rate_per_km,
            minimum_charge,
        }
    }

    fn fields(&self) -> [(&'static str, Decimal); 3] {
        [
            ("weight_rate_per_kg", self.weight_rate_per_kg),
            ("distance_rate_per_km", self.distance_rate_per_km),
            ("minimum_charge", self.minimum_charge),
        ]
    }
}

/// The rate card: one [`ModeRate`] per shipping mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeRates {
    /// Ground rates.
    pub ground: ModeRate,
    /// Air rates.
    pub air: ModeRate,
    /// Express rates.
    pub express: ModeRate,
}

impl ModeRates {
    /// Returns the rates for a mode.
    pub fn get(&self, mode: ShippingMode) -> &ModeRate {
        match mode {
            ShippingMode::Ground => &self.ground,
            ShippingMode::Air => &self.air,
            ShippingMode::Express => &self.express,
        }
    }
}

impl Default for ModeRates {
    fn default() -> Self {
        Self {
            ground: ModeRate::new(Decimal::new(80, 2), Decimal::new(5, 5), Decimal::new(50, 2)),
            air: ModeRate::new(Decimal::new(160, 2), Decimal::new(10, 5), Decimal::new(75, 2)),
            express: ModeRate::new(Decimal::new(200, 2), Decimal::new(20, 5), Decimal::new(100, 2)),
        }
    }
}

/// Thresholds and flat fees for oversize and overweight parcels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlingConfig {
    /// A parcel with any single dimension above this is oversize.
    pub oversize_dimension_cm: Decimal,
    /// A parcel whose `L + 2 * (W + H)` exceeds this is oversize.
    pub oversize_length_plus_girth_cm: Decimal,
    /// Flat fee for an oversize parcel.
    pub oversize_fee: Decimal,
    /// A parcel heavier than this (actual weight) is overweight.
    pub overweight_kg: Decimal,
    /// Flat fee for an overweight parcel.
    pub overweight_fee: Decimal,
}

impl Default for HandlingConfig {
    fn default() -> Self {
        Self {
            oversize_dimension_cm: Decimal::new(100, 0),
            oversize_length_plus_girth_cm: Decimal::new(300, 0),
            oversize_fee: Decimal::new(1000, 2),
            overweight_kg: Decimal::new(30, 0),
            overweight_fee: Decimal::new(1500, 2),
        }
    }
}

/// Pricing constants, deserialized from `pricing.yaml`.
///
/// # Example
///
/// ```
/// use shipping_quote::config::PricingConfig;
/// use rust_decimal::Decimal;
///
/// let pricing = PricingConfig::default();
/// assert_eq!(pricing.dim_divisor_cm3_per_kg, Decimal::new(5000, 0));
/// assert!(pricing.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Cubic centimetres per kilogram of dimensional weight.
    pub dim_divisor_cm3_per_kg: Decimal,
    /// Fraction taken off the surcharged total for enterprise customers.
    pub enterprise_discount_rate: Decimal,
    /// Per-mode rate card.
    pub rates: ModeRates,
    /// Oversize/overweight handling fees.
    #[serde(default)]
    pub handling: HandlingConfig,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            dim_divisor_cm3_per_kg: Decimal::new(5000, 0),
            enterprise_discount_rate: Decimal::new(10, 2),
            rates: ModeRates::default(),
            handling: HandlingConfig::default(),
        }
    }
}

impl PricingConfig {
    /// Checks the pricing invariants.
    ///
    /// - the DIM divisor is positive
    /// - the enterprise discount is in `[0, 1)`
    /// - every rate, minimum and fee is non-negative
    /// - every rate card field satisfies `ground <= air <= express`
    pub fn validate(&self) -> EngineResult<()> {
        if self.dim_divisor_cm3_per_kg <= Decimal::ZERO {
            return Err(invalid(format!(
                "dim_divisor_cm3_per_kg must be positive, got {}",
                self.dim_divisor_cm3_per_kg
            )));
        }

        if self.enterprise_discount_rate < Decimal::ZERO
            || self.enterprise_discount_rate >= Decimal::ONE
        {
            return Err(invalid(format!(
                "enterprise_discount_rate must be in [0, 1), got {}",
                self.enterprise_discount_rate
            )));
        }

        for mode in ShippingMode::ALL {
            for (field, value) in self.rates.get(mode).fields() {
                if value < Decimal::ZERO {
                    return Err(invalid(format!(
                        "rates.{}.{} must not be negative, got {}",
                        mode, field, value
                    )));
                }
            }
        }

        for pair in ShippingMode::ALL.windows(2) {
            let (cheaper, dearer) = (pair[0], pair[1]);
            let cheaper_fields = self.rates.get(cheaper).fields();
            let dearer_fields = self.rates.get(dearer).fields();
            for ((field, low), (_, high)) in cheaper_fields.into_iter().zip(dearer_fields) {
                if low > high {
                    return Err(invalid(format!(
                        "rates.{cheaper}.{field} ({low}) exceeds rates.{dearer}.{field} ({high})"
                    )));
                }
            }
        }

        let handling = &self.handling;
        for (field, value) in [
            ("oversize_fee", handling.oversize_fee),
            ("overweight_fee", handling.overweight_fee),
        ] {
            if value < Decimal::ZERO {
                return Err(invalid(format!(
                    "handling.{} must not be negative, got {}",
                    field, value
                )));
            }
        }
        for (field, value) in [
            ("oversize_dimension_cm", handling.oversize_dimension_cm),
            (
                "oversize_length_plus_girth_cm",
                handling.oversize_length_plus_girth_cm,
            ),
            ("overweight_kg", handling.overweight_kg),
        ] {
            if value <= Decimal::ZERO {
                return Err(invalid(format!(
                    "handling.{} must be positive, got {}",
                    field, value
                )));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> EngineError {
    EngineError::ConfigInvalid { message }
}

/// The complete engine configuration: pricing constants plus the centroid table.
///
/// Immutable once built; share it behind an `Arc` for concurrent readers.
#[derive(Debug, Clone)]
pub struct ShippingConfig {
    pricing: PricingConfig,
    centroids: CentroidTable,
}

impl ShippingConfig {
    /// Creates a configuration after validating the pricing constants.
    pub fn new(pricing: PricingConfig, centroids: CentroidTable) -> EngineResult<Self> {
        pricing.validate()?;
        Ok(Self { pricing, centroids })
    }

    /// Returns the pricing constants.
    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Returns the centroid table.
    pub fn centroids(&self) -> &CentroidTable {
        &self.centroids
    }
}

impl Default for ShippingConfig {
    /// The calibrated built-in pricing with the built-in centroid table.
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            centroids: CentroidTable::builtin().clone(),
        }
    }
}
