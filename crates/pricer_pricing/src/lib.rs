//! Monte Carlo pricing engine (Layer 3).
//!
//! This crate turns a path model from `pricer_models` and a payoff into a
//! present value:
//!
//! 1. Generate a trajectory with [`PathModel`](pricer_models::models::PathModel)
//! 2. Evaluate the payoff on that trajectory
//! 3. Discount at the model's risk-free rate
//! 4. Average over paths and report the standard error
//!
//! # Design Philosophy
//!
//! - **Static dispatch**: the pricer is generic over model and payoff types;
//!   no trait objects on the hot path
//! - **Sequential estimator**: one running sum and one running sum of squares,
//!   no per-path storage
//! - **Reproducibility**: the model owns its generator; a fixed seed yields a
//!   bitwise-identical estimate
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::models::{GbmModel, GbmParams};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//! use pricer_pricing::payoff::{OptionKind, VanillaPayoff};
//!
//! let model = GbmModel::new(GbmParams::default(), 42);
//! let payoff = VanillaPayoff::new(OptionKind::Call, 100.0, 1.0).unwrap();
//! let config = MonteCarloConfig::builder().n_paths(10_000).build().unwrap();
//!
//! let mut pricer = MonteCarloPricer::new(model, payoff, config);
//! let result = pricer.price().unwrap();
//! assert!(result.price > 0.0);
//! ```

#![deny(missing_docs)]

pub mod mc;
pub mod payoff;
