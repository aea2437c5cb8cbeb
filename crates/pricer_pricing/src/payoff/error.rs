//! Payoff error types.

use thiserror::Error;

/// Payoff construction and evaluation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayoffError {
    /// Trajectory had no points to evaluate.
    #[error("cannot evaluate payoff on an empty path")]
    EmptyPath,

    /// Strike must be strictly positive.
    #[error("invalid strike: K = {0} (must be positive)")]
    InvalidStrike(f64),

    /// Maturity must be strictly positive.
    #[error("invalid maturity: T = {0} (must be positive)")]
    InvalidMaturity(f64),

    /// Digital payout must be strictly positive.
    #[error("invalid digital payout: {0} (must be positive)")]
    InvalidPayout(f64),
}

impl From<PayoffError> for pricer_core::types::PricingError {
    fn from(err: PayoffError) -> Self {
        pricer_core::types::PricingError::InvalidInput(err.to_string())
    }
}
