//! Error types for the Monte Carlo kernel.

use std::fmt;

use pricer_models::models::ModelError;
use thiserror::Error;

use crate::payoff::PayoffError;

/// Configuration error for the Monte Carlo pricer.
///
/// These errors occur at build time when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    InvalidPathCount(usize),
    /// Step count outside valid range [1, 10_000].
    InvalidStepCount(usize),
    /// Spot price must be strictly positive.
    InvalidSpot(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, 10_000_000]",
                    count
                )
            }
            Self::InvalidStepCount(count) => {
                write!(
                    f,
                    "Invalid step count {}: must be in range [1, 10_000]",
                    count
                )
            }
            Self::InvalidSpot(value) => {
                write!(f, "Invalid spot price {}: must be positive", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level error for a pricing run.
///
/// Wraps the three failure sources: configuration, model and payoff.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum McError {
    /// Simulation parameters were rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The path model rejected its inputs.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// The payoff rejected a trajectory.
    #[error("payoff error: {0}")]
    Payoff(#[from] PayoffError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidStepCount(20_000);
        assert!(err.to_string().contains("Invalid step count 20000"));
    }

    #[test]
    fn test_mc_error_wraps_sources() {
        let err: McError = ConfigError::InvalidPathCount(0).into();
        assert!(matches!(err, McError::Config(_)));

        let err: McError = ModelError::InvalidSpot(-1.0).into();
        assert!(matches!(err, McError::Model(_)));

        let err: McError = PayoffError::EmptyPath.into();
        assert!(err.to_string().contains("payoff error"));
    }
}
