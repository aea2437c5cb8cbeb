//! Error types for structured error handling.
//!
//! This module provides `PricingError`, the cross-layer error enum that the
//! model and pricing crates convert their own error types into.

use std::fmt;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. Every failure in this
/// workspace is a configuration or programming error surfaced eagerly;
/// there is no retry or partial-failure concept.
///
/// # Variants
/// - `InvalidInput`: Invalid parameters or market data
/// - `NumericalInstability`: Computation produced a non-finite value
/// - `ModelFailure`: Model assumptions violated (e.g. arbitrage bounds)
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters.
    InvalidInput(String),

    /// Numerical instability during computation.
    NumericalInstability(String),

    /// Model failed to produce a valid result.
    ModelFailure(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
            PricingError::ModelFailure(msg) => write!(f, "Model failure: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidInput("bad spot".to_string());
        assert_eq!(err.to_string(), "Invalid input: bad spot");

        let err = PricingError::NumericalInstability("variance diverged".to_string());
        assert!(err.to_string().contains("variance diverged"));

        let err = PricingError::ModelFailure("arbitrage bound violated".to_string());
        assert!(err.to_string().starts_with("Model failure"));
    }

    #[test]
    fn test_pricing_error_is_std_error() {
        let err = PricingError::InvalidInput("x".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_pricing_error_clone_eq() {
        let err = PricingError::ModelFailure("m".to_string());
        assert_eq!(err.clone(), err);
    }
}
