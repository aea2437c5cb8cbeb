//! Floating-strike lookback option payoff.

use pricer_core::types::Path;

use super::error::PayoffError;
use super::{require_non_empty, OptionKind, Payoff};

/// Floating-strike lookback call/put.
///
/// The strike floats to the best price the path achieved: a call pays
/// `S_T - min(S)`, a put pays `max(S) - S_T`. The extremum runs over every
/// point of the trajectory, the terminal price included, so the payoff is
/// never negative. There is no fixed strike to validate, only the maturity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LookbackPayoff {
    kind: OptionKind,
    maturity: f64,
}

impl LookbackPayoff {
    /// Creates a floating-strike lookback payoff.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::InvalidMaturity`] if `maturity` is not
    /// strictly positive.
    pub fn new(kind: OptionKind, maturity: f64) -> Result<Self, PayoffError> {
        if maturity <= 0.0 {
            return Err(PayoffError::InvalidMaturity(maturity));
        }
        Ok(Self { kind, maturity })
    }
}

impl Payoff for LookbackPayoff {
    fn maturity(&self) -> f64 {
        self.maturity
    }

    fn payoff(&self, path: &Path) -> Result<f64, PayoffError> {
        require_non_empty(path)?;
        let terminal = path.terminal();
        let value = match self.kind {
            OptionKind::Call => terminal - path.minimum(),
            OptionKind::Put => path.maximum() - terminal,
        };
        Ok(value)
    }
}
