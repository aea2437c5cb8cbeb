//! Monte Carlo pricing engine.
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Path generation (via [`PathModel`])
//! 2. Payoff evaluation (via [`Payoff`])
//! 3. Discounting at the model's risk-free rate
//! 4. Aggregation into a sample mean and standard error
//!
//! The loop is strictly sequential: the model owns its generator and each
//! path consumes the next draws from one continuing stream, so a fixed seed
//! reproduces the estimate bit for bit.

use pricer_models::models::PathModel;
use tracing::debug;

use super::config::MonteCarloConfig;
use super::error::McError;
use crate::payoff::Payoff;

/// Pricing result.
///
/// Contains the Monte Carlo price estimate and its standard error.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 10.5,
///     std_error: 0.05,
/// };
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the instrument.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine.
///
/// Generic over the path model and the payoff so the simulation loop
/// monomorphises per instrument; no dynamic dispatch on the hot path.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::{GbmModel, GbmParams};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
/// use pricer_pricing::payoff::{OptionKind, VanillaPayoff};
///
/// let model = GbmModel::new(GbmParams::default(), 42);
/// let payoff = VanillaPayoff::new(OptionKind::Call, 100.0, 1.0).unwrap();
/// let config = MonteCarloConfig::default();
///
/// let mut pricer = MonteCarloPricer::new(model, payoff, config);
/// let result = pricer.price().unwrap();
/// assert!(result.std_error > 0.0);
/// ```
#[derive(Debug)]
pub struct MonteCarloPricer<M: PathModel, P: Payoff> {
    model: M,
    payoff: P,
    config: MonteCarloConfig,
}

impl<M: PathModel, P: Payoff> MonteCarloPricer<M, P> {
    /// Creates a new pricer from a model, a payoff and a configuration.
    pub fn new(model: M, payoff: P, config: MonteCarloConfig) -> Self {
        Self {
            model,
            payoff,
            config,
        }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Runs the simulation and returns the discounted price estimate.
    ///
    /// Takes `&mut self` because path generation advances the model's
    /// random stream. Calling `price` twice continues the stream and
    /// yields an independent second estimate.
    ///
    /// # Errors
    ///
    /// - [`McError::Config`] if the configuration fails validation
    /// - [`McError::Model`] if the model rejects the path arguments
    /// - [`McError::Payoff`] if the payoff rejects a trajectory
    pub fn price(&mut self) -> Result<PricingResult, McError> {
        self.config.validate()?;

        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();
        let spot = self.config.spot();
        let maturity = self.payoff.maturity();
        let discount = self.model.discount(maturity);

        debug!(
            model = self.model.model_name(),
            n_paths, n_steps, spot, maturity, "starting Monte Carlo run"
        );

        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for _ in 0..n_paths {
            let path = self.model.generate_path(spot, maturity, n_steps)?;
            let value = discount * self.payoff.payoff(&path)?;
            sum += value;
            sum_sq += value * value;
        }

        let n = n_paths as f64;
        let mean = sum / n;
        // Unbiased sample variance of the discounted payoffs; clamp the
        // numerator against tiny negative rounding residue.
        let variance = if n_paths > 1 {
            ((sum_sq - n * mean * mean) / (n - 1.0)).max(0.0)
        } else {
            0.0
        };
        let std_error = (variance / n).sqrt();

        Ok(PricingResult {
            price: mean,
            std_error,
        })
    }

    /// Consumes the pricer and returns the model, with its advanced
    /// random stream, and the payoff.
    pub fn into_parts(self) -> (M, P) {
        (self.model, self.payoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::{AsianPayoff, AveragingKind, OptionKind, VanillaPayoff};
    use approx::assert_relative_eq;
    use pricer_models::models::{
        BinomialModel, BinomialParams, GbmModel, GbmParams, HestonModel, HestonParams, ModelError,
    };

    fn small_config() -> MonteCarloConfig {
        MonteCarloConfig::builder()
            .n_paths(2_000)
            .n_steps(50)
            .build()
            .unwrap()
    }

    #[test]
    fn test_price_is_reproducible() {
        let payoff = VanillaPayoff::new(OptionKind::Call, 100.0, 1.0).unwrap();

        let mut pricer1 = MonteCarloPricer::new(
            GbmModel::new(GbmParams::default(), 42),
            payoff,
            small_config(),
        );
        let mut pricer2 = MonteCarloPricer::new(
            GbmModel::new(GbmParams::default(), 42),
            payoff,
            small_config(),
        );

        assert_eq!(pricer1.price().unwrap(), pricer2.price().unwrap());
    }

    #[test]
    fn test_second_run_continues_the_stream() {
        let payoff = VanillaPayoff::new(OptionKind::Call, 100.0, 1.0).unwrap();
        let mut pricer = MonteCarloPricer::new(
            GbmModel::new(GbmParams::default(), 42),
            payoff,
            small_config(),
        );

        let first = pricer.price().unwrap();
        let second = pricer.price().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_zero_volatility_is_deterministic() {
        // sigma = 0: every path is the forward, the estimator has no spread.
        let params = GbmParams::new(0.05, 0.0).unwrap();
        let payoff = VanillaPayoff::new(OptionKind::Call, 100.0, 1.0).unwrap();
        let mut pricer =
            MonteCarloPricer::new(GbmModel::new(params, 42), payoff, small_config());

        let result = pricer.price().unwrap();
        let expected = (-0.05_f64).exp() * (100.0 * 0.05_f64.exp() - 100.0);
        assert_relative_eq!(result.price, expected, epsilon = 1e-9);
        assert_relative_eq!(result.std_error, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_path_has_zero_std_error() {
        let payoff = VanillaPayoff::new(OptionKind::Call, 100.0, 1.0).unwrap();
        let config = MonteCarloConfig::builder().n_paths(1).build().unwrap();
        let mut pricer =
            MonteCarloPricer::new(GbmModel::new(GbmParams::default(), 42), payoff, config);

        assert_eq!(pricer.price().unwrap().std_error, 0.0);
    }

    #[test]
    fn test_deep_out_of_the_money_prices_near_zero() {
        let payoff = VanillaPayoff::new(OptionKind::Call, 100_000.0, 1.0).unwrap();
        let mut pricer = MonteCarloPricer::new(
            GbmModel::new(GbmParams::default(), 42),
            payoff,
            small_config(),
        );
        assert_eq!(pricer.price().unwrap().price, 0.0);
    }

    #[test]
    fn test_model_error_propagates() {
        // Riskless growth above the up factor: every path fails eagerly.
        let params = BinomialParams::new(20.0, 0.01, 10).unwrap();
        let payoff = VanillaPayoff::new(OptionKind::Call, 100.0, 1.0).unwrap();
        let mut pricer =
            MonteCarloPricer::new(BinomialModel::new(params, 42), payoff, small_config());

        assert!(matches!(
            pricer.price(),
            Err(McError::Model(ModelError::ArbitrageViolation(_)))
        ));
    }

    #[test]
    fn test_works_with_heston_and_asian() {
        let model = HestonModel::new(HestonParams::default(), 7);
        let payoff =
            AsianPayoff::new(OptionKind::Call, AveragingKind::Arithmetic, 100.0, 1.0).unwrap();
        let mut pricer = MonteCarloPricer::new(model, payoff, small_config());

        let result = pricer.price().unwrap();
        assert!(result.price > 0.0);
        assert!(result.std_error > 0.0);
    }

    #[test]
    fn test_confidence_intervals_scale() {
        let result = PricingResult {
            price: 10.0,
            std_error: 0.5,
        };
        assert_relative_eq!(result.confidence_95(), 0.98, epsilon = 1e-12);
        assert_relative_eq!(result.confidence_99(), 1.288, epsilon = 1e-12);
        assert!(result.confidence_99() > result.confidence_95());
    }
}
