//! Heston stochastic volatility model implementation.
//!
//! The Heston model is described by the SDE pair:
//! ```text
//! dS = r * S * dt + sqrt(V) * S * dW_S
//! dV = kappa * (theta - V) * dt + xi * sqrt(V) * dW_V
//! E[dW_S * dW_V] = rho * dt
//! ```
//! where:
//! - S = asset price
//! - V = instantaneous variance
//! - r = risk-free rate
//! - kappa = mean-reversion speed
//! - theta = long-run variance
//! - xi = vol-of-vol
//! - rho = price/variance correlation
//!
//! ## Full-truncation Euler scheme
//!
//! The CIR variance process is discretised with the full-truncation Euler
//! scheme: the variance update is clamped at zero every step,
//! ```text
//! v <- max(v + kappa*(theta - v)*dt + xi*sqrt(max(v, 0))*sqrt(dt)*W2, 0)
//! ```
//! a deliberate approximation of the exact non-central chi-square CIR
//! transition. The variance path is initialised at `theta`.
//!
//! ## Feller condition
//!
//! `2 * kappa * theta > xi^2` is sufficient for the continuous-time
//! variance to stay positive. Construction warns when it fails; the
//! truncation clamp already guards the discretised path.

use pricer_core::rng::PathRng;
use pricer_core::types::Path;
use tracing::{debug, warn};

use super::error::ModelError;
use super::path_model::{validate_path_args, PathModel};

/// Heston model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HestonParams {
    /// Risk-free rate (annualised).
    pub rate: f64,
    /// Mean-reversion speed (kappa).
    pub kappa: f64,
    /// Long-run variance (theta); also the initial variance.
    pub theta: f64,
    /// Vol-of-vol (xi).
    pub xi: f64,
    /// Price/variance correlation (rho).
    pub rho: f64,
}

impl HestonParams {
    /// Create new Heston parameters with validation.
    ///
    /// # Errors
    ///
    /// - [`ModelError::InvalidKappa`] if `kappa < 0`
    /// - [`ModelError::InvalidTheta`] if `theta < 0`
    /// - [`ModelError::InvalidXi`] if `xi < 0`
    /// - [`ModelError::InvalidRho`] if `rho` lies outside [-1, 1]
    pub fn new(rate: f64, kappa: f64, theta: f64, xi: f64, rho: f64) -> Result<Self, ModelError> {
        let params = Self {
            rate,
            kappa,
            theta,
            xi,
            rho,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameter bundle.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.kappa < 0.0 {
            return Err(ModelError::InvalidKappa(self.kappa));
        }
        if self.theta < 0.0 {
            return Err(ModelError::InvalidTheta(self.theta));
        }
        if self.xi < 0.0 {
            return Err(ModelError::InvalidXi(self.xi));
        }
        if !(-1.0..=1.0).contains(&self.rho) {
            return Err(ModelError::InvalidRho(self.rho));
        }
        Ok(())
    }

    /// Whether the Feller condition `2 * kappa * theta > xi^2` holds.
    pub fn satisfies_feller(&self) -> bool {
        2.0 * self.kappa * self.theta > self.xi * self.xi
    }

    /// The Feller ratio `2 * kappa * theta / xi^2` (infinity for `xi = 0`).
    pub fn feller_ratio(&self) -> f64 {
        let denominator = self.xi * self.xi;
        if denominator > 0.0 {
            2.0 * self.kappa * self.theta / denominator
        } else {
            f64::INFINITY
        }
    }
}

impl Default for HestonParams {
    fn default() -> Self {
        Self {
            rate: 0.05,
            kappa: 1.5,
            theta: 0.04,
            xi: 0.3,
            rho: -0.7,
        }
    }
}

/// Heston stochastic volatility model.
///
/// Consumes two independent standard normals per step, correlated via
/// Cholesky: `W1 = Z1`, `W2 = rho*Z1 + sqrt(1 - rho^2)*Z2`.
///
/// # Examples
///
/// ```
/// use pricer_models::models::{HestonModel, HestonParams, PathModel};
///
/// let params = HestonParams::new(0.05, 1.5, 0.04, 0.3, -0.7).unwrap();
/// let mut model = HestonModel::new(params, 42);
///
/// let (path, variance) = model.generate_path_with_variance(100.0, 1.0, 252).unwrap();
/// assert_eq!(path.len(), 253);
/// assert_eq!(variance.len(), 253);
/// assert!(variance.iter().all(|&v| v >= 0.0));
/// ```
#[derive(Debug)]
pub struct HestonModel {
    params: HestonParams,
    rng: PathRng,
}

impl HestonModel {
    /// Creates a new Heston model with the given parameters and seed.
    ///
    /// Logs a warning when the Feller condition fails; the full-truncation
    /// scheme still keeps the discretised variance non-negative.
    pub fn new(params: HestonParams, seed: u64) -> Self {
        if !params.satisfies_feller() {
            warn!(
                kappa = params.kappa,
                theta = params.theta,
                xi = params.xi,
                ratio = params.feller_ratio(),
                "Feller condition 2*kappa*theta > xi^2 not satisfied; \
                 relying on full truncation"
            );
        }
        Self {
            params,
            rng: PathRng::from_seed(seed),
        }
    }

    /// Returns the model parameters.
    pub fn params(&self) -> &HestonParams {
        &self.params
    }

    /// Correlated Brownian increments from two independent normals.
    ///
    /// `W1 = z1`, `W2 = rho*z1 + sqrt(1 - rho^2)*z2` (Cholesky).
    fn correlate(&self, z1: f64, z2: f64) -> (f64, f64) {
        let rho = self.params.rho;
        (z1, rho * z1 + (1.0 - rho * rho).sqrt() * z2)
    }

    /// One full-truncation Euler step of the CIR variance process.
    fn variance_step(&self, v: f64, dt: f64, w2: f64) -> f64 {
        let p = &self.params;
        let next = v + p.kappa * (p.theta - v) * dt + p.xi * v.max(0.0).sqrt() * dt.sqrt() * w2;
        next.max(0.0)
    }

    /// Generates the asset trajectory together with the full variance
    /// trajectory.
    ///
    /// The variance trajectory has `n_steps + 1` points with element 0
    /// equal to `theta`. The plain [`PathModel::generate_path`] discards
    /// the variance history; this extended operation keeps it for callers
    /// needing diagnostics.
    pub fn generate_path_with_variance(
        &mut self,
        spot: f64,
        maturity: f64,
        n_steps: usize,
    ) -> Result<(Path, Vec<f64>), ModelError> {
        validate_path_args(spot, maturity, n_steps)?;

        let dt = maturity / n_steps as f64;
        let rate = self.params.rate;

        debug!(model = "Heston", n_steps, dt, "generating path");

        let mut points = Vec::with_capacity(n_steps + 1);
        let mut variances = Vec::with_capacity(n_steps + 1);
        let mut price = spot;
        let mut v = self.params.theta;
        points.push(price);
        variances.push(v);

        for _ in 0..n_steps {
            let z1 = self.rng.gen_normal();
            let z2 = self.rng.gen_normal();
            let (w1, w2) = self.correlate(z1, z2);

            v = self.variance_step(v, dt, w2);

            let drift = (rate - v / 2.0) * dt;
            let diffusion = (v * dt).sqrt() * w1;
            price *= (drift + diffusion).exp();

            points.push(price);
            variances.push(v);
        }

        Ok((Path::new(points), variances))
    }
}

impl PathModel for HestonModel {
    fn generate_path(
        &mut self,
        spot: f64,
        maturity: f64,
        n_steps: usize,
    ) -> Result<Path, ModelError> {
        let (path, _variance) = self.generate_path_with_variance(spot, maturity, n_steps)?;
        Ok(path)
    }

    fn discount(&self, maturity: f64) -> f64 {
        (-self.params.rate * maturity).exp()
    }

    fn model_name(&self) -> &'static str {
        "Heston"
    }
}
