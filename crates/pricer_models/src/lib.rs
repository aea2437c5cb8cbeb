//! # pricer_models: Stochastic path-generation models
//!
//! ## Models layer role
//!
//! This crate provides the [`PathModel`](models::PathModel) abstraction and
//! its four variants:
//! - [`GbmModel`](models::GbmModel): geometric Brownian motion (exact
//!   log-space discretisation)
//! - [`HestonModel`](models::HestonModel): Heston stochastic volatility
//!   (full-truncation Euler CIR variance)
//! - [`LsvModel`](models::LsvModel): local-stochastic volatility (Heston
//!   superset with an injected local-volatility function)
//! - [`BinomialModel`](models::BinomialModel): one stochastic realisation
//!   of a binomial lattice
//!
//! Every model owns its seeded random stream ([`pricer_core::rng::PathRng`])
//! and produces freshly allocated trajectories
//! ([`pricer_core::types::Path`]). Dispatch is static: the pricing layer is
//! generic over `M: PathModel`.
//!
//! ## Example
//!
//! ```rust
//! use pricer_models::models::{GbmModel, GbmParams, PathModel};
//!
//! let params = GbmParams::new(0.05, 0.2).unwrap();
//! let mut model = GbmModel::new(params, 42);
//!
//! let path = model.generate_path(100.0, 1.0, 252).unwrap();
//! assert_eq!(path.len(), 253);
//! assert!((model.discount(1.0) - (-0.05_f64).exp()).abs() < 1e-15);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod models;

pub use models::{
    BinomialModel, BinomialParams, GbmModel, GbmParams, HestonModel, HestonParams, LsvModel,
    ModelError, PathModel,
};
