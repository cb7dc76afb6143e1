//! The end-to-end quote pipeline.
//!
//! validate → resolve codes → distance → billable weight → base rate →
//! handling fee → surcharges/discount → round.

use std::time::Instant;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::config::ShippingConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, QuoteBreakdown, QuoteCalculation, QuoteRequest,
    QuoteResult,
};

use super::billable_weight::calculate_billable_weight;
use super::coordinates::resolve_route;
use super::distance::calculate_distance;
use super::handling_fee::calculate_handling_fee;
use super::rate_engine::calculate_base_cost;
use super::surcharges::{SurchargeInputs, apply_surcharges};

/// Computes the quoted total for a request.
///
/// # Errors
///
/// - `InvalidParameter` for weight/dimensions outside their bounds or out-of-range percentages
/// - `UnknownLocation` if either code is missing from the centroid table
/// - `CalculationError` if an intermediate amount overflows
///
/// # Examples
///
/// ```
/// use shipping_quote::calculation::compute_quote;
/// use shipping_quote::config::ShippingConfig;
/// use shipping_quote::models::QuoteRequest;
/// use rust_decimal::Decimal;
///
/// let config = ShippingConfig::default();
/// let result = compute_quote(&QuoteRequest::new("30301"), &config).unwrap();
/// assert_eq!(result.total_usd, Decimal::new(128, 2));
/// ```
pub fn compute_quote(request: &QuoteRequest, config: &ShippingConfig) -> EngineResult<QuoteResult> {
    calculate_quote(request, config).map(|calculation| calculation.result)
}

/// Computes a quote with its full breakdown and audit trace.
pub fn calculate_quote(
    request: &QuoteRequest,
    config: &ShippingConfig,
) -> EngineResult<QuoteCalculation> {
    let start_time = Instant::now();
    request.validate()?;

    let pricing = config.pricing();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let route = resolve_route(
        &request.origin_zip,
        &request.dest_zip,
        config.centroids(),
        step_number,
    )?;
    steps.push(route.audit_step);
    step_number += 1;

    let distance = calculate_distance(route.origin, route.destination, step_number)?;
    steps.push(distance.audit_step);
    step_number += 1;
    if distance.distance_km.is_zero() {
        warnings.push(AuditWarning {
            code: "SAME_LOCATION".to_string(),
            message: format!(
                "Origin {} and destination {} share a centroid; no distance charge applied",
                request.origin_zip, request.dest_zip
            ),
            severity: "low".to_string(),
        });
    }

    let weight = calculate_billable_weight(
        &request.package,
        pricing.dim_divisor_cm3_per_kg,
        step_number,
    )?;
    steps.push(weight.audit_step);
    step_number += 1;

    let base = calculate_base_cost(
        weight.billable_weight_kg,
        distance.distance_km,
        request.mode,
        &pricing.rates,
        step_number,
    )?;
    steps.push(base.audit_step);
    step_number += 1;
    if base.minimum_applied {
        warnings.push(AuditWarning {
            code: "MINIMUM_CHARGE_APPLIED".to_string(),
            message: format!(
                "Rated cost was below the {} minimum charge of ${}",
                request.mode,
                pricing.rates.get(request.mode).minimum_charge
            ),
            severity: "low".to_string(),
        });
    }

    let handling = calculate_handling_fee(&request.package, &pricing.handling, step_number)?;
    steps.push(handling.audit_step);
    step_number += 1;

    let surcharge_inputs = SurchargeInputs {
        fuel_surcharge_pct: request.fuel_surcharge_pct,
        regional_surcharge_pct: request.regional_surcharge_pct,
        enterprise_rate_card: request.enterprise_rate_card,
        enterprise_discount_rate: pricing.enterprise_discount_rate,
    };
    let subtotal = base
        .base_cost
        .checked_add(handling.fee)
        .ok_or_else(|| EngineError::overflow("subtotal"))?;
    let surcharges = apply_surcharges(subtotal, &surcharge_inputs, step_number)?;
    steps.push(surcharges.audit_step);

    let total_usd = surcharges.total;
    let duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        origin_zip = %request.origin_zip,
        dest_zip = %request.dest_zip,
        mode = %request.mode,
        distance_km = %distance.distance_km,
        billable_weight_kg = %weight.billable_weight_kg,
        total_usd = %total_usd,
        duration_us,
        "Quote calculated"
    );

    Ok(QuoteCalculation {
        quote_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        origin_zip: request.origin_zip.clone(),
        dest_zip: request.dest_zip.clone(),
        mode: request.mode,
        distance_km: distance.distance_km,
        dimensional_weight_kg: weight.dimensional_weight_kg,
        billable_weight_kg: weight.billable_weight_kg,
        breakdown: QuoteBreakdown {
            weight_charge: base.weight_charge,
            distance_charge: base.distance_charge,
            base_cost: base.base_cost,
            handling_fee: handling.fee,
            fuel_surcharge: surcharges.fuel_surcharge,
            regional_surcharge: surcharges.regional_surcharge,
            enterprise_discount: surcharges.enterprise_discount,
            total: total_usd,
        },
        result: QuoteResult { total_usd },
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}
