//! Mode-based base cost rating.
//!
//! Each mode charges a fixed rate per kilogram of billable weight plus a
//! fixed rate per kilometre, floored at the mode's minimum charge.

use rust_decimal::Decimal;

use crate::config::ModeRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, ShippingMode};

/// The result of rating a shipment.
#[derive(Debug, Clone)]
pub struct BaseCostResult {
    /// `weight_rate * billable_weight`.
    pub weight_charge: Decimal,
    /// `distance_rate * distance`.
    pub distance_charge: Decimal,
    /// `max(weight_charge + distance_charge, minimum_charge)`.
    pub base_cost: Decimal,
    /// True if the minimum charge replaced the rated cost.
    pub minimum_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the base cost in USD for a mode.
///
/// Fails with `CalculationError` if a charge overflows.
///
/// # Examples
///
/// ```
/// use shipping_quote::calculation::calculate_base_cost;
/// use shipping_quote::config::ModeRates;
/// use shipping_quote::models::ShippingMode;
/// use rust_decimal::Decimal;
///
/// // 1.2 kg over zero distance by ground: 1.2 * 0.80 = 0.96
/// let result = calculate_base_cost(
///     Decimal::new(12, 1),
///     Decimal::ZERO,
///     ShippingMode::Ground,
///     &ModeRates::default(),
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.base_cost, Decimal::new(96, 2));
/// ```
pub fn calculate_base_cost(
    billable_weight_kg: Decimal,
    distance_km: Decimal,
    mode: ShippingMode,
    rates: &ModeRates,
    step_number: u32,
) -> EngineResult<BaseCostResult> {
    let rate = rates.get(mode);
    let weight_charge = rate
        .weight_rate_per_kg
        .checked_mul(billable_weight_kg)
        .ok_or_else(|| EngineError::overflow("weight charge"))?;
    let distance_charge = rate
        .distance_rate_per_km
        .checked_mul(distance_km)
        .ok_or_else(|| EngineError::overflow("distance charge"))?;
    let rated_cost = weight_charge
        .checked_add(distance_charge)
        .ok_or_else(|| EngineError::overflow("base cost"))?;
    let minimum_applied = rated_cost < rate.minimum_charge;
    let base_cost = rated_cost.max(rate.minimum_charge);

    let reasoning = if minimum_applied {
        format!(
            "{}: ${} x {} kg + ${} x {} km = ${} is below the ${} minimum; charging the minimum",
            mode,
            rate.weight_rate_per_kg.normalize(),
            billable_weight_kg.normalize(),
            rate.distance_rate_per_km.normalize(),
            distance_km.normalize(),
            rated_cost.normalize(),
            rate.minimum_charge.normalize()
        )
    } else {
        format!(
            "{}: ${} x {} kg + ${} x {} km = ${}",
            mode,
            rate.weight_rate_per_kg.normalize(),
            billable_weight_kg.normalize(),
            rate.distance_rate_per_km.normalize(),
            distance_km.normalize(),
            base_cost.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_rate".to_string(),
        rule_name: "Mode Base Rate".to_string(),
        input: serde_json::json!({
            "mode": mode.as_str(),
            "billable_weight_kg": billable_weight_kg.normalize().to_string(),
            "distance_km": distance_km.normalize().to_string(),
            "weight_rate_per_kg": rate.weight_rate_per_kg.normalize().to_string(),
            "distance_rate_per_km": rate.distance_rate_per_km.normalize().to_string(),
            "minimum_charge": rate.minimum_charge.normalize().to_string()
        }),
        output: serde_json::json!({
            "weight_charge": weight_charge.normalize().to_string(),
            "distance_charge": distance_charge.normalize().to_string(),
            "base_cost": base_cost.normalize().to_string(),
            "minimum_applied": minimum_applied
        }),
        reasoning,
    };

    Ok(BaseCostResult {
        weight_charge,
        distance_charge,
        base_cost,
        minimum_applied,
        audit_step,
    })
}
