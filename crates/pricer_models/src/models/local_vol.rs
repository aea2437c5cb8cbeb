//! Local-stochastic volatility (LSV) model implementation.
//!
//! The LSV model is a superset of Heston: the same full-truncation Euler
//! CIR variance process, with the price dynamics scaled by a
//! deterministic local-volatility factor `sigma_loc(S, t)`:
//! ```text
//! dS = r * S * dt + sigma_loc(S, t) * sqrt(V) * S * dW_S
//! ```
//! Per discretised step the factor is evaluated at the *previous* step's
//! price and the time at the *end* of the current step:
//! ```text
//! drift     = (r - v * sigma_loc^2 / 2) * dt
//! diffusion = sigma_loc * sqrt(v * dt) * W1
//! ```
//!
//! The local-volatility function is an injected pure capability stored by
//! value at construction, a generic `Fn(f64, f64) -> f64` so dispatch
//! stays static (no `Box<dyn Fn>` in the simulation loop).

use pricer_core::rng::PathRng;
use pricer_core::types::Path;
use tracing::{debug, warn};

use super::error::ModelError;
use super::heston::HestonParams;
use super::path_model::{validate_path_args, PathModel};

/// Local-stochastic volatility model.
///
/// Parameterised by the Heston bundle plus a local-volatility function
/// mapping `(price, time)` to a non-negative multiplicative factor.
/// A factor of 1 everywhere reduces the model to plain Heston.
///
/// # Examples
///
/// ```
/// use pricer_models::models::{HestonParams, LsvModel, PathModel};
///
/// let params = HestonParams::new(0.05, 1.5, 0.04, 0.3, -0.7).unwrap();
/// // CEV-style local factor around the initial spot.
/// let local_vol = |s: f64, _t: f64| (s / 100.0).powf(-0.3);
/// let mut model = LsvModel::new(params, local_vol, 42);
///
/// let path = model.generate_path(100.0, 1.0, 252).unwrap();
/// assert_eq!(path.len(), 253);
/// ```
#[derive(Debug)]
pub struct LsvModel<F>
where
    F: Fn(f64, f64) -> f64,
{
    params: HestonParams,
    local_vol: F,
    rng: PathRng,
}

impl<F> LsvModel<F>
where
    F: Fn(f64, f64) -> f64,
{
    /// Creates a new LSV model.
    ///
    /// Validation mirrors [`HestonParams::new`]; the local-volatility
    /// function is checked lazily, per evaluation, because its domain is
    /// only known once paths are generated.
    pub fn new(params: HestonParams, local_vol: F, seed: u64) -> Self {
        if !params.satisfies_feller() {
            warn!(
                kappa = params.kappa,
                theta = params.theta,
                xi = params.xi,
                "Feller condition not satisfied; relying on full truncation"
            );
        }
        Self {
            params,
            local_vol,
            rng: PathRng::from_seed(seed),
        }
    }

    /// Returns the Heston parameter bundle.
    pub fn params(&self) -> &HestonParams {
        &self.params
    }

    /// Generates the asset trajectory together with the full variance
    /// trajectory (element 0 of the variance trajectory is `theta`).
    pub fn generate_path_with_variance(
        &mut self,
        spot: f64,
        maturity: f64,
        n_steps: usize,
    ) -> Result<(Path, Vec<f64>), ModelError> {
        validate_path_args(spot, maturity, n_steps)?;

        let dt = maturity / n_steps as f64;
        let sqrt_dt = dt.sqrt();
        let p = self.params;

        debug!(model = "LSV", n_steps, dt, "generating path");

        let mut points = Vec::with_capacity(n_steps + 1);
        let mut variances = Vec::with_capacity(n_steps + 1);
        let mut price = spot;
        let mut v = p.theta;
        let mut t = 0.0;
        points.push(price);
        variances.push(v);

        for _ in 0..n_steps {
            let z1 = self.rng.gen_normal();
            let z2 = self.rng.gen_normal();
            let w1 = z1;
            let w2 = p.rho * z1 + (1.0 - p.rho * p.rho).sqrt() * z2;

            // CIR variance, full truncation (as Heston).
            v = (v + p.kappa * (p.theta - v) * dt + p.xi * v.max(0.0).sqrt() * sqrt_dt * w2)
                .max(0.0);

            // Local factor sees the previous price and end-of-step time.
            t += dt;
            let sigma_loc = (self.local_vol)(price, t);
            if sigma_loc < 0.0 || !sigma_loc.is_finite() {
                return Err(ModelError::InvalidLocalVol {
                    factor: sigma_loc,
                    price,
                    time: t,
                });
            }

            let drift = (p.rate - v * sigma_loc * sigma_loc / 2.0) * dt;
            let diffusion = sigma_loc * (v * dt).sqrt() * w1;
            price *= (drift + diffusion).exp();

            points.push(price);
            variances.push(v);
        }

        Ok((Path::new(points), variances))
    }
}

impl<F> PathModel for LsvModel<F>
where
    F: Fn(f64, f64) -> f64,
{
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
        "LSV"
    }
}
