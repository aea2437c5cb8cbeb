//! Vanilla European option payoff.

use pricer_core::types::Path;

use super::error::PayoffError;
use super::{require_non_empty, validate_strike_and_maturity, OptionKind, Payoff};

/// European call/put on the terminal price.
///
/// Pays `max(S_T - K, 0)` for a call and `max(K - S_T, 0)` for a put.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Path;
/// use pricer_pricing::payoff::{OptionKind, Payoff, VanillaPayoff};
///
/// let call = VanillaPayoff::new(OptionKind::Call, 100.0, 1.0).unwrap();
/// let path = Path::new(vec![100.0, 104.0, 110.0]);
/// assert_eq!(call.payoff(&path).unwrap(), 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VanillaPayoff {
    kind: OptionKind,
    strike: f64,
    maturity: f64,
}

impl VanillaPayoff {
    /// Creates a vanilla payoff with validation.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::InvalidStrike`] or [`PayoffError::InvalidMaturity`]
    /// if either parameter is not strictly positive.
    pub fn new(kind: OptionKind, strike: f64, maturity: f64) -> Result<Self, PayoffError> {
        validate_strike_and_maturity(strike, maturity)?;
        Ok(Self {
            kind,
            strike,
            maturity,
        })
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the exercise direction.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }
}

impl Payoff for VanillaPayoff {
    fn maturity(&self) -> f64 {
        self.maturity
    }

    fn payoff(&self, path: &Path) -> Result<f64, PayoffError> {
        require_non_empty(path)?;
        Ok(self.kind.intrinsic(path.terminal(), self.strike))
    }
}
