//! Model error types.

use thiserror::Error;

/// Model construction and path-generation errors.
///
/// Every variant is an invalid-argument failure surfaced eagerly, either
/// at parameter construction or at the start of `generate_path`, never
/// from inside a simulation loop.
///
/// # Examples
///
/// ```
/// use pricer_models::models::ModelError;
///
/// let err = ModelError::InvalidSpot(-100.0);
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Spot price must be strictly positive.
    #[error("invalid spot price: S0 = {0} (must be positive)")]
    InvalidSpot(f64),

    /// Step count must be strictly positive.
    #[error("invalid step count: {0} (must be positive)")]
    InvalidStepCount(usize),

    /// Maturity must be strictly positive.
    #[error("invalid maturity: T = {0} (must be positive)")]
    InvalidMaturity(f64),

    /// Volatility must not be negative.
    #[error("invalid volatility: sigma = {0} (must not be negative)")]
    InvalidVolatility(f64),

    /// Mean-reversion speed must not be negative.
    #[error("invalid mean-reversion speed: kappa = {0} (must not be negative)")]
    InvalidKappa(f64),

    /// Long-run variance must not be negative.
    #[error("invalid long-run variance: theta = {0} (must not be negative)")]
    InvalidTheta(f64),

    /// Vol-of-vol must not be negative.
    #[error("invalid vol-of-vol: xi = {0} (must not be negative)")]
    InvalidXi(f64),

    /// Correlation must lie in [-1, 1].
    #[error("invalid correlation: rho = {0} (must lie in [-1, 1])")]
    InvalidRho(f64),

    /// Local-volatility function returned a negative factor.
    #[error("invalid local volatility: sigma_loc = {factor} at (S = {price}, t = {time})")]
    InvalidLocalVol {
        /// The offending factor.
        factor: f64,
        /// Price at which the function was evaluated.
        price: f64,
        /// Elapsed time at which the function was evaluated.
        time: f64,
    },

    /// Risk-neutral up-probability fell outside (0, 1).
    #[error("arbitrage violation: risk-neutral probability p = {0} outside (0, 1)")]
    ArbitrageViolation(f64),
}

impl From<ModelError> for pricer_core::types::PricingError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::ArbitrageViolation(_) => {
                pricer_core::types::PricingError::ModelFailure(err.to_string())
            }
            _ => pricer_core::types::PricingError::InvalidInput(err.to_string()),
        }
    }
}
