//! Billable weight calculation.
//!
//! Oversized-but-light parcels are billed by volume rather than mass: the
//! billable weight is the greater of the actual weight and the dimensional
//! weight `L * W * H / divisor`.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Package};

/// Dimensional weight in kilograms for the given divisor (cm³ per kg).
///
/// Fails with `CalculationError` if the volume overflows or the divisor is zero.
///
/// # Examples
///
/// ```
/// use shipping_quote::calculation::dimensional_weight;
/// use shipping_quote::models::Package;
/// use rust_decimal::Decimal;
///
/// // 30 x 20 x 10 cm = 6000 cm³, / 5000 = 1.2 kg
/// let dim = dimensional_weight(&Package::default(), Decimal::new(5000, 0)).unwrap();
/// assert_eq!(dim, Decimal::new(12, 1));
/// ```
pub fn dimensional_weight(package: &Package, divisor: Decimal) -> EngineResult<Decimal> {
    package
        .volume_cm3()
        .and_then(|volume| volume.checked_div(divisor))
        .ok_or_else(|| EngineError::overflow("dimensional weight"))
}

/// The result of a billable weight calculation.
#[derive(Debug, Clone)]
pub struct BillableWeightResult {
    /// Volume-derived weight.
    pub dimensional_weight_kg: Decimal,
    /// `max(actual, dimensional)`.
    pub billable_weight_kg: Decimal,
    /// True if the dimensional weight exceeded the actual weight.
    pub dimensional_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Determines the weight a shipment is billed on.
pub fn calculate_billable_weight(
    package: &Package,
    dim_divisor_cm3_per_kg: Decimal,
    step_number: u32,
) -> EngineResult<BillableWeightResult> {
    let dimensional_weight_kg = dimensional_weight(package, dim_divisor_cm3_per_kg)?;
    let dimensional_applied = dimensional_weight_kg > package.weight_kg;
    let billable_weight_kg = package.weight_kg.max(dimensional_weight_kg);

    let reasoning = if dimensional_applied {
        format!(
            "{} x {} x {} cm / {} = {} kg exceeds actual {} kg; billing dimensional weight",
            package.length_cm.normalize(),
            package.width_cm.normalize(),
            package.height_cm.normalize(),
            dim_divisor_cm3_per_kg.normalize(),
            dimensional_weight_kg.normalize(),
            package.weight_kg.normalize()
        )
    } else {
        format!(
            "Actual weight {} kg >= dimensional weight {} kg; billing actual weight",
            package.weight_kg.normalize(),
            dimensional_weight_kg.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "billable_weight".to_string(),
        rule_name: "Billable Weight".to_string(),
        input: serde_json::json!({
            "weight_kg": package.weight_kg.normalize().to_string(),
            "length_cm": package.length_cm.normalize().to_string(),
            "width_cm": package.width_cm.normalize().to_string(),
            "height_cm": package.height_cm.normalize().to_string(),
            "dim_divisor_cm3_per_kg": dim_divisor_cm3_per_kg.normalize().to_string()
        }),
        output: serde_json::json!({
            "dimensional_weight_kg": dimensional_weight_kg.normalize().to_string(),
            "billable_weight_kg": billable_weight_kg.normalize().to_string(),
            "dimensional_applied": dimensional_applied
        }),
        reasoning,
    };

    Ok(BillableWeightResult {
        dimensional_weight_kg,
        billable_weight_kg,
        dimensional_applied,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn package(weight: &str, l: &str, w: &str, h: &str) -> Package {
        Package {
            weight_kg: dec(weight),
            length_cm: dec(l),
            width_cm: dec(w),
            height_cm: dec(h),
        }
    }

    fn divisor() -> Decimal {
        dec("5000")
    }

    #[test]
    fn test_default_package_bills_dimensional_weight() {
        let result = calculate_billable_weight(&Package::default(), divisor(), 1).unwrap();
        assert_eq!(result.dimensional_weight_kg, dec("1.2"));
        assert_eq!(result.billable_weight_kg, dec("1.2"));
        assert!(result.dimensional_applied);
        assert!(result.audit_step.reasoning.contains("dimensional"));
    }

    #[test]
    fn test_heavy_small_package_bills_actual_weight() {
        let result = calculate_billable_weight(&package("5", "40", "30", "20"), divisor(), 1).unwrap();
        assert_eq!(result.dimensional_weight_kg, dec("4.8"));
        assert_eq!(result.billable_weight_kg, dec("5"));
        assert!(!result.dimensional_applied);
    }

    #[test]
    fn test_tiny_box_degenerates_to_actual_weight() {
        let result = calculate_billable_weight(&package("0.5", "1", "1", "1"), divisor(), 1).unwrap();
        assert_eq!(result.billable_weight_kg, dec("0.5"));
    }

    #[test]
    fn test_equal_weights_are_not_flagged_dimensional() {
        let result = calculate_billable_weight(&package("1.2", "30", "20", "10"), divisor(), 1).unwrap();
        assert_eq!(result.billable_weight_kg, dec("1.2"));
        assert!(!result.dimensional_applied);
    }

    #[test]
    fn test_audit_step_contents() {
        let result = calculate_billable_weight(&Package::default(), divisor(), 4).unwrap();
        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "billable_weight");
        assert_eq!(result.audit_step.input["dim_divisor_cm3_per_kg"], "5000");
        assert_eq!(result.audit_step.output["billable_weight_kg"], "1.2");
    }

    #[test]
    fn test_overflowing_volume_is_an_error() {
        let huge = "1000000000000000";
        let err = calculate_billable_weight(&package("1", huge, huge, huge), divisor(), 1).unwrap_err();
        assert!(matches!(err, EngineError::CalculationError { .. }));
    }
}
