//! Binomial lattice model implementation.
//!
//! The Cox-Ross-Rubinstein lattice with up factor `u = exp(sigma*sqrt(dt))`,
//! down factor `d = 1/u` and risk-neutral up-probability
//! `p = (exp(r*dt) - d) / (u - d)`.
//!
//! As a [`PathModel`] the lattice produces one stochastic realisation:
//! one uniform draw per step, moving up when the draw falls below `p`.
//! The step count is bound at construction; a caller-supplied step count
//! is ignored so every trajectory has the lattice's own resolution.
//!
//! The companion [`forward_lattice`](BinomialModel::forward_lattice)
//! operation builds the full forward price tree for backward-induction
//! pricing; backward induction itself is outside this crate's scope.

use pricer_core::rng::PathRng;
use pricer_core::types::Path;
use tracing::debug;

use super::error::ModelError;
use super::path_model::{validate_path_args, PathModel};

/// Binomial lattice parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinomialParams {
    /// Risk-free rate (annualised).
    pub rate: f64,
    /// Volatility (annualised). Must be strictly positive: `sigma = 0`
    /// collapses the lattice to `u = d = 1` and leaves the risk-neutral
    /// probability undefined (division by zero).
    pub volatility: f64,
    /// Number of lattice steps, bound at construction.
    pub n_steps: usize,
}

impl BinomialParams {
    /// Create new lattice parameters with validation.
    ///
    /// # Errors
    ///
    /// - [`ModelError::InvalidVolatility`] if `volatility <= 0` (the
    ///   degenerate `u = d` lattice is rejected here rather than failing
    ///   with a division by zero per call)
    /// - [`ModelError::InvalidStepCount`] if `n_steps == 0`
    pub fn new(rate: f64, volatility: f64, n_steps: usize) -> Result<Self, ModelError> {
        if volatility <= 0.0 {
            return Err(ModelError::InvalidVolatility(volatility));
        }
        if n_steps == 0 {
            return Err(ModelError::InvalidStepCount(n_steps));
        }
        Ok(Self {
            rate,
            volatility,
            n_steps,
        })
    }
}

/// Lattice coefficients for a given step size.
#[derive(Clone, Copy, Debug)]
struct LatticeCoefficients {
    up: f64,
    down: f64,
    prob_up: f64,
}

/// Binomial lattice model.
///
/// # Examples
///
/// ```
/// use pricer_models::models::{BinomialModel, BinomialParams, PathModel};
///
/// let params = BinomialParams::new(0.05, 0.2, 252).unwrap();
/// let mut model = BinomialModel::new(params, 42);
///
/// // The caller-supplied step count is ignored: the lattice resolution
/// // is fixed at construction.
/// let path = model.generate_path(100.0, 1.0, 10).unwrap();
/// assert_eq!(path.len(), 253);
/// ```
#[derive(Debug)]
pub struct BinomialModel {
    params: BinomialParams,
    rng: PathRng,
}

impl BinomialModel {
    /// Creates a new binomial model with the given parameters and seed.
    pub fn new(params: BinomialParams, seed: u64) -> Self {
        Self {
            params,
            rng: PathRng::from_seed(seed),
        }
    }

    /// Returns the model parameters.
    pub fn params(&self) -> &BinomialParams {
        &self.params
    }

    /// Up/down factors and risk-neutral probability for step size `dt`.
    ///
    /// Rejects `p` outside (0, 1): the no-arbitrage condition
    /// `d < exp(r*dt) < u` fails for the given rate and volatility.
    fn coefficients(&self, dt: f64) -> Result<LatticeCoefficients, ModelError> {
        let up = (self.params.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let prob_up = ((self.params.rate * dt).exp() - down) / (up - down);
        if prob_up <= 0.0 || prob_up >= 1.0 {
            return Err(ModelError::ArbitrageViolation(prob_up));
        }
        Ok(LatticeCoefficients { up, down, prob_up })
    }

    /// Builds the full forward price lattice over `[0, maturity]`.
    ///
    /// Level `k` holds `k + 1` nodes `spot * u^j * d^(k-j)` for
    /// `j = 0..=k`, ordered from all-down to all-up. This is the public
    /// companion to path generation for backward-induction pricing;
    /// backward induction itself is not implemented here.
    pub fn forward_lattice(&self, spot: f64, maturity: f64) -> Result<Vec<Vec<f64>>, ModelError> {
        validate_path_args(spot, maturity, self.params.n_steps)?;
        let dt = maturity / self.params.n_steps as f64;
        let coeffs = self.coefficients(dt)?;

        let mut lattice = Vec::with_capacity(self.params.n_steps + 1);
        lattice.push(vec![spot]);
        for k in 1..=self.params.n_steps {
            let previous = &lattice[k - 1];
            let mut level = Vec::with_capacity(k + 1);
            // All-down node, then one up-move appended per node.
            level.push(previous[0] * coeffs.down);
            for &node in previous.iter() {
                level.push(node * coeffs.up);
            }
            lattice.push(level);
        }
        Ok(lattice)
    }
}

impl PathModel for BinomialModel {
    /// Generates one lattice realisation.
    ///
    /// `n_steps` is ignored; the trajectory always has
    /// `params.n_steps + 1` points.
    fn generate_path(
        &mut self,
        spot: f64,
        maturity: f64,
        _n_steps: usize,
    ) -> Result<Path, ModelError> {
        validate_path_args(spot, maturity, self.params.n_steps)?;

        let dt = maturity / self.params.n_steps as f64;
        let coeffs = self.coefficients(dt)?;

        debug!(
            model = "Binomial",
            n_steps = self.params.n_steps,
            p = coeffs.prob_up,
            "generating path"
        );

        let mut points = Vec::with_capacity(self.params.n_steps + 1);
        points.push(spot);
        let mut price = spot;
        for _ in 0..self.params.n_steps {
            let u = self.rng.gen_uniform();
            price *= if u < coeffs.prob_up {
                coeffs.up
            } else {
                coeffs.down
            };
            points.push(price);
        }

        Ok(Path::new(points))
    }

    fn discount(&self, maturity: f64) -> f64 {
        (-self.params.rate * maturity).exp()
    }

    fn model_name(&self) -> &'static str {
        "Binomial"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_params() -> BinomialParams {
        BinomialParams::new(0.05, 0.2, 252).unwrap()
    }

    #[test]
    fn test_params_reject_zero_volatility() {
        // u = d = 1 leaves p undefined; rejected at construction.
        assert_eq!(
            BinomialParams::new(0.05, 0.0, 252),
            Err(ModelError::InvalidVolatility(0.0))
        );
    }

    #[test]
    fn test_params_reject_zero_steps() {
        assert_eq!(
            BinomialParams::new(0.05, 0.2, 0),
            Err(ModelError::InvalidStepCount(0))
        );
    }

    #[test]
    fn test_up_down_product_is_one() {
        let model = BinomialModel::new(test_params(), 42);
        let coeffs = model.coefficients(1.0 / 252.0).unwrap();
        assert_relative_eq!(coeffs.up * coeffs.down, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_probability_in_open_unit_interval() {
        let model = BinomialModel::new(test_params(), 42);
        let coeffs = model.coefficients(1.0 / 252.0).unwrap();
        assert!(coeffs.prob_up > 0.0 && coeffs.prob_up < 1.0);
    }

    #[test]
    fn test_pathological_rate_is_arbitrage_violation() {
        // exp(r*dt) above u: riskless growth dominates every lattice move.
        let params = BinomialParams::new(20.0, 0.01, 10).unwrap();
        let mut model = BinomialModel::new(params, 42);
        let err = model.generate_path(100.0, 1.0, 10).unwrap_err();
        assert!(matches!(err, ModelError::ArbitrageViolation(_)));
    }

    #[test]
    fn test_path_has_fixed_resolution() {
        let mut model = BinomialModel::new(test_params(), 42);
        // Caller-supplied step count is ignored.
        let path = model.generate_path(100.0, 1.0, 7).unwrap();
        assert_eq!(path.len(), 253);
    }

    #[test]
    fn test_every_point_is_lattice_node() {
        let params = BinomialParams::new(0.05, 0.2, 50).unwrap();
        let mut model = BinomialModel::new(params, 42);
        let path = model.generate_path(100.0, 1.0, 50).unwrap();

        let dt: f64 = 1.0 / 50.0;
        let u = (0.2 * dt.sqrt()).exp();
        for (k, &s) in path.iter().enumerate() {
            // s = 100 * u^m with m an integer in [-k, k] of k's parity.
            let m = (s / 100.0).ln() / u.ln();
            let rounded = m.round();
            assert!((m - rounded).abs() < 1e-6);
            assert!(rounded.abs() <= k as f64 + 1e-9);
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut model1 = BinomialModel::new(test_params(), 42);
        let mut model2 = BinomialModel::new(test_params(), 42);
        assert_eq!(
            model1.generate_path(100.0, 1.0, 0).unwrap(),
            model2.generate_path(100.0, 1.0, 0).unwrap()
        );
    }

    #[test]
    fn test_forward_lattice_shape() {
        let params = BinomialParams::new(0.05, 0.2, 4).unwrap();
        let model = BinomialModel::new(params, 42);
        let lattice = model.forward_lattice(100.0, 1.0).unwrap();

        assert_eq!(lattice.len(), 5);
        for (k, level) in lattice.iter().enumerate() {
            assert_eq!(level.len(), k + 1);
        }
        assert_eq!(lattice[0][0], 100.0);
    }

    #[test]
    fn test_forward_lattice_recombines() {
        let params = BinomialParams::new(0.05, 0.2, 4).unwrap();
        let model = BinomialModel::new(params, 42);
        let lattice = model.forward_lattice(100.0, 1.0).unwrap();

        let dt: f64 = 0.25;
        let u = (0.2 * dt.sqrt()).exp();
        // Middle node of an even level recombines to the spot.
        assert_relative_eq!(lattice[2][1], 100.0, epsilon = 1e-12);
        // Extremes are all-down and all-up.
        assert_relative_eq!(lattice[4][0], 100.0 / u.powi(4), epsilon = 1e-12);
        assert_relative_eq!(lattice[4][4], 100.0 * u.powi(4), epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_invalid_path_args() {
        let mut model = BinomialModel::new(test_params(), 42);
        assert!(model.generate_path(0.0, 1.0, 0).is_err());
        assert!(model.generate_path(100.0, -1.0, 0).is_err());
    }

    #[test]
    fn test_discount_and_name() {
        let model = BinomialModel::new(test_params(), 42);
        for t in [0.0, 1.0, 10.0] {
            assert_relative_eq!(model.discount(t), (-0.05 * t).exp(), epsilon = 1e-15);
        }
        assert_eq!(model.model_name(), "Binomial");
    }
}
