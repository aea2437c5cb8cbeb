//! Geometric Brownian Motion (GBM) model implementation.
//!
//! GBM is the fundamental model for asset price dynamics, described by:
//! ```text
//! dS = r * S * dt + sigma * S * dW
//! ```
//! where:
//! - S = asset price
//! - r = risk-free rate
//! - sigma = volatility
//! - dW = Wiener process increment
//!
//! ## Log-space formulation
//!
//! The path step uses the exact solution, not an Euler approximation:
//! ```text
//! S(t+dt) = S(t) * exp((r - 0.5*sigma^2)*dt + sigma*sqrt(dt)*Z)
//! ```

use pricer_core::rng::PathRng;
use pricer_core::types::Path;
use tracing::debug;

use super::error::ModelError;
use super::path_model::{validate_path_args, PathModel};

/// GBM model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Risk-free rate (annualised). May be negative: unlike the other
    /// model variants, GBM does not reject negative rates.
    pub rate: f64,
    /// Volatility (annualised).
    pub volatility: f64,
}

impl GbmParams {
    /// Create new GBM parameters with validation.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidVolatility`] if `volatility < 0`.
    /// The rate is intentionally unchecked; negative risk-free rates are
    /// permitted for this variant.
    pub fn new(rate: f64, volatility: f64) -> Result<Self, ModelError> {
        if volatility < 0.0 {
            return Err(ModelError::InvalidVolatility(volatility));
        }
        Ok(Self { rate, volatility })
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            rate: 0.05,
            volatility: 0.2,
        }
    }
}

/// Geometric Brownian Motion model.
///
/// Owns a seeded random stream consuming one standard normal per step.
/// The stream continues across successive `generate_path` calls.
///
/// # Examples
///
/// ```
/// use pricer_models::models::{GbmModel, GbmParams, PathModel};
///
/// let params = GbmParams::new(0.05, 0.2).unwrap();
/// let mut model = GbmModel::new(params, 42);
///
/// let path = model.generate_path(100.0, 1.0, 252).unwrap();
/// assert_eq!(path.len(), 253);
/// assert!(path.iter().all(|&s| s > 0.0));
/// ```
#[derive(Debug)]
pub struct GbmModel {
    params: GbmParams,
    rng: PathRng,
}

impl GbmModel {
    /// Creates a new GBM model with the given parameters and seed.
    pub fn new(params: GbmParams, seed: u64) -> Self {
        Self {
            params,
            rng: PathRng::from_seed(seed),
        }
    }

    /// Convenience constructor with the conventional default seed 42.
    pub fn with_default_seed(params: GbmParams) -> Self {
        Self::new(params, 42)
    }

    /// Returns the model parameters.
    pub fn params(&self) -> &GbmParams {
        &self.params
    }
}

impl PathModel for GbmModel {
    fn generate_path(
        &mut self,
        spot: f64,
        maturity: f64,
        n_steps: usize,
    ) -> Result<Path, ModelError> {
        validate_path_args(spot, maturity, n_steps)?;

        let dt = maturity / n_steps as f64;
        let drift = (self.params.rate - 0.5 * self.params.volatility * self.params.volatility) * dt;
        let diffusion = self.params.volatility * dt.sqrt();

        debug!(model = "GBM", n_steps, dt, "generating path");

        let mut points = Vec::with_capacity(n_steps + 1);
        points.push(spot);
        let mut price = spot;
        for _ in 0..n_steps {
            let z = self.rng.gen_normal();
            price *= (drift + diffusion * z).exp();
            points.push(price);
        }

        Ok(Path::new(points))
    }

    fn discount(&self, maturity: f64) -> f64 {
        (-self.params.rate * maturity).exp()
    }

    fn model_name(&self) -> &'static str {
        "GBM"
    }
}
