//! Stochastic path-generation models (GBM, Heston, LSV, binomial).
//!
//! This module provides the model family for Monte Carlo simulation:
//! - [`PathModel`] trait: the unified interface (`generate_path`,
//!   `discount`)
//! - [`GbmModel`]: geometric Brownian motion
//! - [`HestonModel`]: Heston stochastic volatility
//! - [`LsvModel`]: local-stochastic volatility
//! - [`BinomialModel`]: binomial lattice realisation
//!
//! ## Design philosophy
//!
//! - Static dispatch via generics, not `Box<dyn Trait>`
//! - Parameters validated eagerly at construction
//! - Each model owns its advancing random stream; `generate_path` takes
//!   `&mut self` to make that ownership explicit

pub mod binomial;
pub mod error;
pub mod gbm;
pub mod heston;
pub mod local_vol;
pub mod path_model;

pub use binomial::{BinomialModel, BinomialParams};
pub use error::ModelError;
pub use gbm::{GbmModel, GbmParams};
pub use heston::{HestonModel, HestonParams};
pub use local_vol::LsvModel;
pub use path_model::PathModel;
