//! Shipping mode model.
//!
//! Modes are ordered by cost/speed tradeoff: ground is cheapest and slowest,
//! express is the most expensive and fastest.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The transport service level for a shipment.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMode {
    /// Road freight; the cheapest service.
    #[default]
    Ground,
    /// Standard air freight.
    Air,
    /// Priority air; the fastest and most expensive service.
    Express,
}

impl ShippingMode {
    /// All modes, cheapest first.
    pub const ALL: [ShippingMode; 3] = [ShippingMode::Ground, ShippingMode::Air, ShippingMode::Express];

    /// Returns the wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMode::Ground => "ground",
            ShippingMode::Air => "air",
            ShippingMode::Express => "express",
        }
    }
}

impl fmt::Display for ShippingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a mode name, rejecting anything outside the three known modes.
///
/// # Examples
///
/// ```
/// use shipping_quote::models::ShippingMode;
///
/// assert_eq!("air".parse::<ShippingMode>().unwrap(), ShippingMode::Air);
/// assert!("boat".parse::<ShippingMode>().is_err());
/// ```
impl FromStr for ShippingMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ground" => Ok(ShippingMode::Ground),
            "air" => Ok(ShippingMode::Air),
            "express" => Ok(ShippingMode::Express),
            other => Err(EngineError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        for mode in ShippingMode::ALL {
            assert_eq!(mode.as_str().parse::<ShippingMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Ground".parse::<ShippingMode>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidMode { mode } if mode == "Ground"));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = "overnight".parse::<ShippingMode>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidMode { .. }));
    }

    #[test]
    fn test_default_is_ground() {
        assert_eq!(ShippingMode::default(), ShippingMode::Ground);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&ShippingMode::Express).unwrap();
        assert_eq!(json, "\"express\"");
        let mode: ShippingMode = serde_json::from_str("\"air\"").unwrap();
        assert_eq!(mode, ShippingMode::Air);
    }

    #[test]
    fn test_modes_are_ordered_by_cost() {
        assert!(ShippingMode::Ground < ShippingMode::Air);
        assert!(ShippingMode::Air < ShippingMode::Express);
    }
}
