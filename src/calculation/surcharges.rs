//! Surcharge and discount composition.
//!
//! ```text
//! surcharged = subtotal * (1 + fuel_pct / 100 + regional_pct / 100)
//! total      = surcharged * (1 - discount_rate)   if enterprise
//!            = surcharged                          otherwise
//! ```
//!
//! Both surcharges are percentages of the same pre-surcharge subtotal; they do
//! not compound.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::currency::round_currency;

/// Surcharge and discount inputs taken from the request and pricing config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurchargeInputs {
    /// Fuel surcharge percentage.
    pub fuel_surcharge_pct: Decimal,
    /// Regional surcharge percentage.
    pub regional_surcharge_pct: Decimal,
    /// Whether the enterprise discount applies.
    pub enterprise_rate_card: bool,
    /// Fraction removed when the enterprise discount applies.
    pub enterprise_discount_rate: Decimal,
}

/// The result of applying surcharges and discounts.
#[derive(Debug, Clone)]
pub struct SurchargeResult {
    /// `subtotal * fuel_pct / 100`.
    pub fuel_surcharge: Decimal,
    /// `subtotal * regional_pct / 100`.
    pub regional_surcharge: Decimal,
    /// Subtotal plus both surcharges.
    pub surcharged: Decimal,
    /// Amount removed by the enterprise discount; zero when not applied.
    pub enterprise_discount: Decimal,
    /// Final amount, rounded to cents.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies fuel and regional surcharges, then the optional enterprise discount.
///
/// Fails with `CalculationError` if an amount overflows.
///
/// # Examples
///
/// ```
/// use shipping_quote::calculation::{SurchargeInputs, apply_surcharges};
/// use rust_decimal::Decimal;
///
/// let inputs = SurchargeInputs {
///     fuel_surcharge_pct: Decimal::new(12, 0),
///     regional_surcharge_pct: Decimal::new(3, 0),
///     enterprise_rate_card: false,
///     enterprise_discount_rate: Decimal::new(10, 2),
/// };
/// // 0.96 * 1.15 = 1.104
/// let result = apply_surcharges(Decimal::new(96, 2), &inputs, 1).unwrap();
/// assert_eq!(result.total, Decimal::new(110, 2));
/// ```
pub fn apply_surcharges(
    subtotal: Decimal,
    inputs: &SurchargeInputs,
    step_number: u32,
) -> EngineResult<SurchargeResult> {
    let fuel_surcharge = percent_of(subtotal, inputs.fuel_surcharge_pct)
        .ok_or_else(|| EngineError::overflow("fuel surcharge"))?;
    let regional_surcharge = percent_of(subtotal, inputs.regional_surcharge_pct)
        .ok_or_else(|| EngineError::overflow("regional surcharge"))?;
    let surcharged = subtotal
        .checked_add(fuel_surcharge)
        .and_then(|amount| amount.checked_add(regional_surcharge))
        .ok_or_else(|| EngineError::overflow("surcharged cost"))?;

    let enterprise_discount = if inputs.enterprise_rate_card {
        surcharged
            .checked_mul(inputs.enterprise_discount_rate)
            .ok_or_else(|| EngineError::overflow("enterprise discount"))?
    } else {
        Decimal::ZERO
    };
    let total = round_currency(surcharged - enterprise_discount);

    let reasoning = if inputs.enterprise_rate_card {
        format!(
            "${} x (1 + {}% + {}%) = ${}; less {}% enterprise discount = ${}",
            subtotal.normalize(),
            inputs.fuel_surcharge_pct.normalize(),
            inputs.regional_surcharge_pct.normalize(),
            surcharged.normalize(),
            (inputs.enterprise_discount_rate * Decimal::ONE_HUNDRED).normalize(),
            total
        )
    } else {
        format!(
            "${} x (1 + {}% + {}%) = ${}",
            subtotal.normalize(),
            inputs.fuel_surcharge_pct.normalize(),
            inputs.regional_surcharge_pct.normalize(),
            total
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "surcharges".to_string(),
        rule_name: "Surcharges and Discounts".to_string(),
        input: serde_json::json!({
            "subtotal": subtotal.normalize().to_string(),
            "fuel_surcharge_pct": inputs.fuel_surcharge_pct.normalize().to_string(),
            "regional_surcharge_pct": inputs.regional_surcharge_pct.normalize().to_string(),
            "enterprise_rate_card": inputs.enterprise_rate_card,
            "enterprise_discount_rate": inputs.enterprise_discount_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "fuel_surcharge": fuel_surcharge.normalize().to_string(),
            "regional_surcharge": regional_surcharge.normalize().to_string(),
            "enterprise_discount": enterprise_discount.normalize().to_string(),
            "total": total.to_string()
        }),
        reasoning,
    };

    Ok(SurchargeResult {
        fuel_surcharge,
        regional_surcharge,
        surcharged,
        enterprise_discount,
        total,
        audit_step,
    })
}

fn percent_of(amount: Decimal, pct: Decimal) -> Option<Decimal> {
    amount.checked_mul(pct)?.checked_div(Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn inputs(fuel: &str, regional: &str, enterprise: bool) -> SurchargeInputs {
        SurchargeInputs {
            fuel_surcharge_pct: dec(fuel),
            regional_surcharge_pct: dec(regional),
            enterprise_rate_card: enterprise,
            enterprise_discount_rate: dec("0.10"),
        }
    }

    #[test]
    fn test_default_surcharges_on_golden_base() {
        let result = apply_surcharges(dec("1.11558175"), &inputs("12", "3", false), 1).unwrap();
        assert_eq!(result.fuel_surcharge, dec("0.13386981"));
        assert_eq!(result.regional_surcharge, dec("0.0334674525"));
        assert_eq!(result.surcharged, dec("1.2829190125"));
        assert!(result.enterprise_discount.is_zero());
        assert_eq!(result.total, dec("1.28"));
    }

    #[test]
    fn test_surcharges_do_not_compound() {
        let result = apply_surcharges(dec("100"), &inputs("10", "10", false), 1).unwrap();
        assert_eq!(result.total, dec("120.00"));
    }

    #[test]
    fn test_enterprise_discount() {
        let result = apply_surcharges(dec("100"), &inputs("12", "3", true), 1).unwrap();
        assert_eq!(result.surcharged, dec("115"));
        assert_eq!(result.enterprise_discount, dec("11.5"));
        assert_eq!(result.total, dec("103.50"));
        assert!(result.audit_step.reasoning.contains("enterprise discount"));
    }

    #[test]
    fn test_enterprise_discount_on_golden_base() {
        let result = apply_surcharges(dec("1.11558175"), &inputs("12", "3", true), 1).unwrap();
        assert_eq!(result.total, dec("1.15"));
    }

    #[test]
    fn test_zero_surcharges_pass_through() {
        let result = apply_surcharges(dec("4.567"), &inputs("0", "0", false), 1).unwrap();
        assert_eq!(result.total, dec("4.57"));
    }

    #[test]
    fn test_zero_subtotal_is_zero() {
        let result = apply_surcharges(Decimal::ZERO, &inputs("12", "3", true), 1).unwrap();
        assert!(result.total.is_zero());
        assert!(!result.total.is_sign_negative());
    }

    #[test]
    fn test_audit_step_contents() {
        let result = apply_surcharges(dec("0.96"), &inputs("12", "3", false), 7).unwrap();
        assert_eq!(result.audit_step.step_number, 7);
        assert_eq!(result.audit_step.rule_id, "surcharges");
        assert_eq!(result.audit_step.output["total"], "1.10");
        assert_eq!(result.audit_step.input["enterprise_rate_card"], false);
    }

    #[test]
    fn test_overflowing_surcharge_is_an_error() {
        let err = apply_surcharges(Decimal::MAX, &inputs("12", "3", false), 1).unwrap_err();
        assert!(matches!(err, EngineError::CalculationError { .. }));
    }
}
