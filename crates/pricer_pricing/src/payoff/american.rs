//! Path-wise American option approximation.

use pricer_core::types::Path;

use super::error::PayoffError;
use super::{require_non_empty, validate_strike_and_maturity, OptionKind, Payoff};

/// American call/put approximated by the path-wise maximum intrinsic value.
///
/// Pays `max over the path of intrinsic(S_t, K)`: as if the holder could
/// look at the whole trajectory and exercise at its best point. This is a
/// crude upper-bound heuristic on a single path, not an exercise-policy
/// optimisation (no regression, no backward induction), and is kept for
/// like-for-like comparison against the European payoffs.
///
/// By construction the value dominates the vanilla payoff on the same path,
/// since the terminal intrinsic is one of the candidates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmericanApproxPayoff {
    kind: OptionKind,
    strike: f64,
    maturity: f64,
}

impl AmericanApproxPayoff {
    /// Creates an American-approximation payoff with validation.
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
}

impl Payoff for AmericanApproxPayoff {
    fn maturity(&self) -> f64 {
        self.maturity
    }

    fn payoff(&self, path: &Path) -> Result<f64, PayoffError> {
        require_non_empty(path)?;
        // Max intrinsic over the whole path; the extremum of a monotone
        // transform sits at the price extremum.
        let best = match self.kind {
            OptionKind::Call => path.maximum(),
            OptionKind::Put => path.minimum(),
        };
        Ok(self.kind.intrinsic(best, self.strike))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::VanillaPayoff;

    #[test]
    fn test_call_exercises_at_path_maximum() {
        let call = AmericanApproxPayoff::new(OptionKind::Call, 100.0, 1.0).unwrap();
        // Spike at 120 beats the terminal 95.
        let path = Path::new(vec![100.0, 120.0, 95.0]);
        assert_eq!(call.payoff(&path).unwrap(), 20.0);
    }

    #[test]
    fn test_put_exercises_at_path_minimum() {
        let put = AmericanApproxPayoff::new(OptionKind::Put, 100.0, 1.0).unwrap();
        let path = Path::new(vec![100.0, 70.0, 105.0]);
        assert_eq!(put.payoff(&path).unwrap(), 30.0);
    }

    #[test]
    fn test_never_in_the_money_pays_zero() {
        let call = AmericanApproxPayoff::new(OptionKind::Call, 100.0, 1.0).unwrap();
        let path = Path::new(vec![90.0, 95.0, 85.0]);
        assert_eq!(call.payoff(&path).unwrap(), 0.0);
    }

    #[test]
    fn test_dominates_vanilla_on_same_path() {
        let american = AmericanApproxPayoff::new(OptionKind::Call, 100.0, 1.0).unwrap();
        let vanilla = VanillaPayoff::new(OptionKind::Call, 100.0, 1.0).unwrap();
        let path = Path::new(vec![100.0, 115.0, 108.0]);
        assert!(american.payoff(&path).unwrap() >= vanilla.payoff(&path).unwrap());
    }

    #[test]
    fn test_empty_path_rejected() {
        let call = AmericanApproxPayoff::new(OptionKind::Call, 100.0, 1.0).unwrap();
        assert_eq!(call.payoff(&Path::new(vec![])), Err(PayoffError::EmptyPath));
    }
}
