//! Asian (average-price) option payoff.

use pricer_core::types::Path;

use super::error::PayoffError;
use super::{require_non_empty, validate_strike_and_maturity, OptionKind, Payoff};

/// Averaging convention for Asian options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AveragingKind {
    /// Arithmetic mean of every observed price.
    #[default]
    Arithmetic,
    /// Geometric mean of every observed price.
    Geometric,
}

/// Average-price call/put.
///
/// The average runs over every point of the trajectory, the initial spot
/// included. Pays `max(avg - K, 0)` for a call and `max(K - avg, 0)` for
/// a put.
///
/// The geometric mean never exceeds the arithmetic mean, so a geometric
/// Asian call is never worth more than its arithmetic twin on the same path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsianPayoff {
    kind: OptionKind,
    averaging: AveragingKind,
    strike: f64,
    maturity: f64,
}

impl AsianPayoff {
    /// Creates an Asian payoff with validation.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::InvalidStrike`] or [`PayoffError::InvalidMaturity`]
    /// if either parameter is not strictly positive.
    pub fn new(
        kind: OptionKind,
        averaging: AveragingKind,
        strike: f64,
        maturity: f64,
    ) -> Result<Self, PayoffError> {
        validate_strike_and_maturity(strike, maturity)?;
        Ok(Self {
            kind,
            averaging,
            strike,
            maturity,
        })
    }

    /// Returns the averaging convention.
    #[inline]
    pub fn averaging(&self) -> AveragingKind {
        self.averaging
    }
}

impl Payoff for AsianPayoff {
    fn maturity(&self) -> f64 {
        self.maturity
    }

    fn payoff(&self, path: &Path) -> Result<f64, PayoffError> {
        require_non_empty(path)?;
        let average = match self.averaging {
            AveragingKind::Arithmetic => path.arithmetic_average(),
            AveragingKind::Geometric => path.geometric_average(),
        };
        Ok(self.kind.intrinsic(average, self.strike))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arithmetic_average_call() {
        let call = AsianPayoff::new(OptionKind::Call, AveragingKind::Arithmetic, 100.0, 1.0)
            .unwrap();
        // Average of (100, 105, 110, 95, 100) is 102.
        let path = Path::new(vec![100.0, 105.0, 110.0, 95.0, 100.0]);
        assert_relative_eq!(call.payoff(&path).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_geometric_average_put() {
        let put =
            AsianPayoff::new(OptionKind::Put, AveragingKind::Geometric, 100.0, 1.0).unwrap();
        // Geometric mean of (50, 200) is 100: at the money.
        let path = Path::new(vec![50.0, 200.0]);
        assert_relative_eq!(put.payoff(&path).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_average_includes_initial_spot() {
        let call = AsianPayoff::new(OptionKind::Call, AveragingKind::Arithmetic, 100.0, 1.0)
            .unwrap();
        // Without the spot the average would be 120 and the payoff 20.
        let path = Path::new(vec![100.0, 120.0]);
        assert_relative_eq!(call.payoff(&path).unwrap(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_geometric_call_never_exceeds_arithmetic() {
        let arith = AsianPayoff::new(OptionKind::Call, AveragingKind::Arithmetic, 90.0, 1.0)
            .unwrap();
        let geom =
            AsianPayoff::new(OptionKind::Call, AveragingKind::Geometric, 90.0, 1.0).unwrap();
        let path = Path::new(vec![100.0, 80.0, 125.0, 110.0]);
        assert!(geom.payoff(&path).unwrap() <= arith.payoff(&path).unwrap());
    }

    #[test]
    fn test_constant_path_means_agree() {
        let path = Path::new(vec![100.0; 12]);
        assert_relative_eq!(path.arithmetic_average(), 100.0, epsilon = 1e-12);
        assert_relative_eq!(path.geometric_average(), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_path_rejected() {
        let call = AsianPayoff::new(OptionKind::Call, AveragingKind::Arithmetic, 100.0, 1.0)
            .unwrap();
        assert_eq!(call.payoff(&Path::new(vec![])), Err(PayoffError::EmptyPath));
    }
}
