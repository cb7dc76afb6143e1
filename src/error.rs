//! Error types for the Shipping Quote Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing a shipment.

use thiserror::Error;

/// The main error type for the Shipping Quote Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shipping_quote::error::EngineError;
///
/// let error = EngineError::UnknownLocation {
///     zip: "99999".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown ZIP code: 99999");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but violates a pricing invariant.
    #[error("Invalid configuration: {message}")]
    ConfigInvalid {
        /// A description of the violated invariant.
        message: String,
    },

    /// A postal code is not present in the centroid table.
    #[error("Unknown ZIP code: {zip}")]
    UnknownLocation {
        /// The postal code that could not be resolved.
        zip: String,
    },

    /// The shipping mode is not one of ground, air or express.
    #[error("Invalid shipping mode '{mode}': expected one of ground, air, express")]
    InvalidMode {
        /// The rejected mode text.
        mode: String,
    },

    /// A request parameter is outside its accepted range.
    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameter {
        /// The name of the offending field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::InvalidParameter`] for the given field.
    pub fn invalid_parameter(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidParameter {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds an [`EngineError::CalculationError`] for an arithmetic overflow.
    pub fn overflow(quantity: &str) -> Self {
        EngineError::CalculationError {
            message: format!("{} is too large to represent", quantity),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/pricing.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/pricing.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_unknown_location_displays_zip() {
        let error = EngineError::UnknownLocation {
            zip: "00000".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown ZIP code: 00000");
    }

    #[test]
    fn test_invalid_mode_displays_mode() {
        let error = EngineError::InvalidMode {
            mode: "teleport".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shipping mode 'teleport': expected one of ground, air, express"
        );
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let error = EngineError::invalid_parameter("weight_kg", "must be greater than zero");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'weight_kg': must be greater than zero"
        );
    }

    #[test]
    fn test_overflow_helper() {
        let error = EngineError::overflow("base cost");
        assert_eq!(
            error.to_string(),
            "Calculation error: base cost is too large to represent"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_location() -> EngineResult<()> {
            Err(EngineError::UnknownLocation {
                zip: "12345".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_location()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::UnknownLocation { .. })
        ));
    }
}
