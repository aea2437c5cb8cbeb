//! The `PathModel` trait: unified interface for path-generation models.

use pricer_core::types::Path;

use super::error::ModelError;

/// Unified interface for stochastic path-generation models.
///
/// A path model produces complete price trajectories and the discount
/// factor turning a cash payoff at maturity into present value. The two
/// operations mirror the pricing loop's needs exactly; nothing else is
/// required of a model.
///
/// # Random stream ownership
///
/// `generate_path` takes `&mut self`: each model owns a private seeded
/// random stream that advances as draws are consumed. Successive calls
/// continue the same stream; the stream is never reset between paths.
/// Path generation observes no externally visible mutation beyond that
/// stream position.
///
/// # Static dispatch
///
/// The pricer is generic over `M: PathModel`. Do not use
/// `Box<dyn PathModel>`; enum or generic dispatch keeps the simulation
/// loop monomorphised.
///
/// # Validation
///
/// Implementations validate eagerly at the start of `generate_path`:
/// non-positive spot, step count or maturity is rejected with
/// [`ModelError`] before any simulation work.
pub trait PathModel {
    /// Generates one fresh trajectory of `n_steps + 1` points starting at
    /// `spot`, covering `[0, maturity]`.
    ///
    /// # Errors
    ///
    /// - [`ModelError::InvalidSpot`] if `spot <= 0`
    /// - [`ModelError::InvalidStepCount`] if `n_steps == 0`
    /// - [`ModelError::InvalidMaturity`] if `maturity <= 0`
    ///
    /// Lattice models may reject further per-call conditions (see
    /// [`ModelError::ArbitrageViolation`]).
    fn generate_path(
        &mut self,
        spot: f64,
        maturity: f64,
        n_steps: usize,
    ) -> Result<Path, ModelError>;

    /// Discount factor `exp(-r * maturity)` for a cash flow at `maturity`.
    fn discount(&self, maturity: f64) -> f64;

    /// Model name for logging and debugging.
    fn model_name(&self) -> &'static str;
}

/// Shared eager validation for `generate_path` arguments.
pub(crate) fn validate_path_args(
    spot: f64,
    maturity: f64,
    n_steps: usize,
) -> Result<(), ModelError> {
    if spot <= 0.0 {
        return Err(ModelError::InvalidSpot(spot));
    }
    if n_steps == 0 {
        return Err(ModelError::InvalidStepCount(n_steps));
    }
    if maturity <= 0.0 {
        return Err(ModelError::InvalidMaturity(maturity));
    }
    Ok(())
}
