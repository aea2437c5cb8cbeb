//! Payoff types for European-exercise and path-dependent contracts.
//!
//! # Key Components
//!
//! - [`Payoff`]: the trait every contract implements
//! - [`VanillaPayoff`]: terminal-price call/put
//! - [`DigitalPayoff`]: cash-or-nothing call/put
//! - [`AsianPayoff`]: averaging call/put, arithmetic or geometric
//! - [`LookbackPayoff`]: floating-strike call/put
//! - [`AmericanApproxPayoff`]: path-wise maximum-intrinsic upper bound
//!
//! Every payoff carries its own maturity; the pricer passes it to the model
//! so trajectory horizon and discounting always agree.

mod american;
mod asian;
mod digital;
mod error;
mod lookback;
mod vanilla;

pub use american::AmericanApproxPayoff;
pub use asian::{AsianPayoff, AveragingKind};
pub use digital::DigitalPayoff;
pub use error::PayoffError;
pub use lookback::LookbackPayoff;
pub use vanilla::VanillaPayoff;

use pricer_core::types::Path;

/// Option exercise direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionKind {
    /// Intrinsic value of this direction at price `s` against strike `k`.
    #[inline]
    pub(crate) fn intrinsic(self, s: f64, k: f64) -> f64 {
        match self {
            Self::Call => (s - k).max(0.0),
            Self::Put => (k - s).max(0.0),
        }
    }
}

/// Contract payoff evaluated on a simulated trajectory.
///
/// Implementations are pure: they read the path and return an undiscounted
/// cash flow. Discounting is the pricer's job.
pub trait Payoff {
    /// Time to expiry in years.
    fn maturity(&self) -> f64;

    /// Evaluates the payoff on a trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::EmptyPath`] if the trajectory has no points.
    fn payoff(&self, path: &Path) -> Result<f64, PayoffError>;
}

/// Shared guard: path-dependent payoffs cannot price an empty trajectory.
#[inline]
pub(crate) fn require_non_empty(path: &Path) -> Result<(), PayoffError> {
    if path.is_empty() {
        return Err(PayoffError::EmptyPath);
    }
    Ok(())
}

/// Shared validation for strike-bearing contracts.
pub(crate) fn validate_strike_and_maturity(strike: f64, maturity: f64) -> Result<(), PayoffError> {
    if strike <= 0.0 {
        return Err(PayoffError::InvalidStrike(strike));
    }
    if maturity <= 0.0 {
        return Err(PayoffError::InvalidMaturity(maturity));
    }
    Ok(())
}
