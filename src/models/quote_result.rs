//! Quote result models for the Shipping Quote Engine.
//!
//! This module contains the [`QuoteResult`] returned by the core engine and the
//! richer [`QuoteCalculation`] that carries a cost breakdown and an audit trace
//! of every pricing step.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ShippingMode;

/// The final quoted amount.
///
/// # Example
///
/// ```
/// use shipping_quote::models::QuoteResult;
/// use rust_decimal::Decimal;
///
/// let result = QuoteResult { total_usd: Decimal::new(128, 2) };
/// assert_eq!(result.total_usd.to_string(), "1.28");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Total in USD, rounded half-up to 2 decimal places.
    pub total_usd: Decimal,
}

/// Itemised components of a quote.
///
/// `base_cost` is the larger of `weight_charge + distance_charge` and the
/// mode's minimum charge. Surcharges are computed on `base_cost + handling_fee`.
/// All amounts are unrounded except `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    /// Per-kg rate times billable weight.
    pub weight_charge: Decimal,
    /// Per-km rate times distance.
    pub distance_charge: Decimal,
    /// Rated cost after applying the minimum charge floor.
    pub base_cost: Decimal,
    /// Oversize and overweight handling fees.
    pub handling_fee: Decimal,
    /// Fuel surcharge amount.
    pub fuel_surcharge: Decimal,
    /// Regional surcharge amount.
    pub regional_surcharge: Decimal,
    /// Enterprise discount amount (zero when the rate card flag is off).
    pub enterprise_discount: Decimal,
    /// Rounded total.
    pub total: Decimal,
}

/// A single step in the audit trace recording a pricing decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag pricing outcomes worth a second look that do not prevent a
/// quote, such as a minimum charge replacing the rated cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a quote.
///
/// # Example
///
/// ```
/// use shipping_quote::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 42,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a quote calculation.
///
/// `quote_id`, `timestamp` and `audit_trace.duration_us` vary per call; every
/// monetary and physical field is a deterministic function of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteCalculation {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was calculated.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the quote.
    pub engine_version: String,
    /// Origin postal code.
    pub origin_zip: String,
    /// Destination postal code.
    pub dest_zip: String,
    /// Service level used for rating.
    pub mode: ShippingMode,
    /// Great-circle distance in kilometres, to the metre.
    pub distance_km: Decimal,
    /// Dimensional weight in kilograms.
    pub dimensional_weight_kg: Decimal,
    /// The greater of actual and dimensional weight.
    pub billable_weight_kg: Decimal,
    /// Itemised cost components.
    pub breakdown: QuoteBreakdown,
    /// The final quote.
    pub result: QuoteResult,
    /// Complete audit trace of pricing decisions.
    pub audit_trace: AuditTrace,
}

impl QuoteCalculation {
    /// Shortcut for `self.result.total_usd`.
    pub fn total_usd(&self) -> Decimal {
        self.result.total_usd
    }
}
