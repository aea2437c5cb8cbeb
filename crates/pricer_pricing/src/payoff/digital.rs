//! Cash-or-nothing digital option payoff.

use pricer_core::types::Path;

use super::error::PayoffError;
use super::{require_non_empty, validate_strike_and_maturity, OptionKind, Payoff};

/// Cash-or-nothing call/put on the terminal price.
///
/// Pays the fixed `payout` when the option finishes in the money and zero
/// otherwise. The boundary is exclusive both ways: a terminal price exactly
/// at the strike pays nothing for either direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DigitalPayoff {
    kind: OptionKind,
    strike: f64,
    maturity: f64,
    payout: f64,
}

impl DigitalPayoff {
    /// Creates a digital payoff paying one unit of cash.
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
            payout: 1.0,
        })
    }

    /// Replaces the unit payout with a custom cash amount.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::InvalidPayout`] if `payout` is not strictly
    /// positive.
    pub fn with_payout(mut self, payout: f64) -> Result<Self, PayoffError> {
        if payout <= 0.0 {
            return Err(PayoffError::InvalidPayout(payout));
        }
        self.payout = payout;
        Ok(self)
    }

    /// Returns the cash amount paid in the money.
    #[inline]
    pub fn payout(&self) -> f64 {
        self.payout
    }
}

impl Payoff for DigitalPayoff {
    fn maturity(&self) -> f64 {
        self.maturity
    }

    fn payoff(&self, path: &Path) -> Result<f64, PayoffError> {
        require_non_empty(path)?;
        let terminal = path.terminal();
        let in_the_money = match self.kind {
            OptionKind::Call => terminal > self.strike,
            OptionKind::Put => terminal < self.strike,
        };
        Ok(if in_the_money { self.payout } else { 0.0 })
    }
}
