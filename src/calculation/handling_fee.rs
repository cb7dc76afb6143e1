//! Oversize and overweight handling fees.

use rust_decimal::Decimal;

use crate::config::HandlingConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Package};

/// The result of a handling fee assessment.
#[derive(Debug, Clone)]
pub struct HandlingFeeResult {
    /// Any dimension or the length-plus-girth exceeded its threshold.
    pub oversize: bool,
    /// Actual weight exceeded the overweight threshold.
    pub overweight: bool,
    /// Sum of the applicable flat fees.
    pub fee: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Assesses flat handling fees for a parcel.
///
/// A parcel is oversize if any single dimension, or `L + 2 * (W + H)`,
/// exceeds its configured threshold. It is overweight if its actual (not
/// dimensional) weight exceeds the configured limit. Both fees may apply.
pub fn calculate_handling_fee(
    package: &Package,
    config: &HandlingConfig,
    step_number: u32,
) -> EngineResult<HandlingFeeResult> {
    let longest_side = package
        .length_cm
        .max(package.width_cm)
        .max(package.height_cm);
    let length_plus_girth = package
        .length_plus_girth_cm()
        .ok_or_else(|| EngineError::overflow("length plus girth"))?;

    let oversize = longest_side > config.oversize_dimension_cm
        || length_plus_girth > config.oversize_length_plus_girth_cm;
    let overweight = package.weight_kg > config.overweight_kg;

    let mut fee = Decimal::ZERO;
    let mut reasons = Vec::new();
    if oversize {
        fee += config.oversize_fee;
        reasons.push(format!("oversize +${}", config.oversize_fee.normalize()));
    }
    if overweight {
        fee = fee
            .checked_add(config.overweight_fee)
            .ok_or_else(|| EngineError::overflow("handling fee"))?;
        reasons.push(format!("overweight +${}", config.overweight_fee.normalize()));
    }

    let reasoning = if reasons.is_empty() {
        "No handling fee - parcel within size and weight limits".to_string()
    } else {
        format!("Handling fee ${}: {}", fee.normalize(), reasons.join(", "))
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "handling_fee".to_string(),
        rule_name: "Handling Fee".to_string(),
        input: serde_json::json!({
            "weight_kg": package.weight_kg.normalize().to_string(),
            "longest_side_cm": longest_side.normalize().to_string(),
            "length_plus_girth_cm": length_plus_girth.normalize().to_string()
        }),
        output: serde_json::json!({
            "oversize": oversize,
            "overweight": overweight,
            "fee": fee.normalize().to_string()
        }),
        reasoning,
    };

    Ok(HandlingFeeResult {
        oversize,
        overweight,
        fee,
        audit_step,
    })
}
